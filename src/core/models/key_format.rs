use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::KeygenError;

static FORMAT1_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{5}(?:-[A-Z0-9]{5}){7}$").expect("valid regex"));

static FORMAT2_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{5}(?:-[A-Z0-9]{5}){4}$").expect("valid regex"));

static FORMAT3_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[237ABCDGHJLPRST]{14} [1-9][0-9]$").expect("valid regex"));

/// One of the three fixed key shapes.
///
/// The format selects both the generation algorithm and the collection
/// a key is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyFormat {
    /// Eight 5-character groups: `AAAAA-BBBBB-CCCCC-DDDDD-EEEEE-FFFFF-GGGGG-HHHHH`.
    #[default]
    Format1,
    /// Five 5-character groups: `AAAAA-BBBBB-CCCCC-DDDDD-EEEEE`.
    Format2,
    /// Fourteen symbols from `237ABCDGHJLPRST`, a space, and a number 10–99.
    Format3,
}

impl KeyFormat {
    pub const ALL: [KeyFormat; 3] = [KeyFormat::Format1, KeyFormat::Format2, KeyFormat::Format3];

    /// Numeric identifier (1, 2 or 3).
    pub fn id(self) -> u8 {
        match self {
            KeyFormat::Format1 => 1,
            KeyFormat::Format2 => 2,
            KeyFormat::Format3 => 3,
        }
    }

    /// Example rendering of the shape, for menus and help text.
    pub fn template(self) -> &'static str {
        match self {
            KeyFormat::Format1 => "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE-FFFFF-GGGGG-HHHHH",
            KeyFormat::Format2 => "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE",
            KeyFormat::Format3 => "237ABCDGHJLPRST 23",
        }
    }

    /// Returns true if `key` has exactly this format's shape.
    pub fn matches(self, key: &str) -> bool {
        let pattern = match self {
            KeyFormat::Format1 => &FORMAT1_PATTERN,
            KeyFormat::Format2 => &FORMAT2_PATTERN,
            KeyFormat::Format3 => &FORMAT3_PATTERN,
        };
        pattern.is_match(key)
    }

    /// Detect which format a key string belongs to, if any.
    pub fn detect(key: &str) -> Option<KeyFormat> {
        Self::ALL.into_iter().find(|f| f.matches(key))
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl TryFrom<u8> for KeyFormat {
    type Error = KeygenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(KeyFormat::Format1),
            2 => Ok(KeyFormat::Format2),
            3 => Ok(KeyFormat::Format3),
            other => Err(KeygenError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for KeyFormat {
    type Err = KeygenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(KeyFormat::Format1),
            "2" => Ok(KeyFormat::Format2),
            "3" => Ok(KeyFormat::Format3),
            other => Err(KeygenError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_one_to_three() {
        assert_eq!("1".parse::<KeyFormat>().unwrap(), KeyFormat::Format1);
        assert_eq!(" 2 ".parse::<KeyFormat>().unwrap(), KeyFormat::Format2);
        assert_eq!("3".parse::<KeyFormat>().unwrap(), KeyFormat::Format3);

        for bad in ["0", "4", "-1", "", "one"] {
            let err = bad.parse::<KeyFormat>().unwrap_err();
            assert!(matches!(err, KeygenError::InvalidFormat { .. }), "{bad}");
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(KeyFormat::try_from(3).unwrap(), KeyFormat::Format3);
        assert!(KeyFormat::try_from(0).is_err());
        assert!(KeyFormat::try_from(9).is_err());
    }

    #[test]
    fn display_is_numeric_id() {
        assert_eq!(KeyFormat::Format2.to_string(), "2");
    }

    #[test]
    fn format1_pattern() {
        let key = "ABCDE-12345-FGHIJ-67890-KLMNO-PQRST-UVWXY-Z0123";
        assert!(KeyFormat::Format1.matches(key));
        assert!(!KeyFormat::Format1.matches("ABCDE-12345-FGHIJ-67890-KLMNO"));
        assert!(!KeyFormat::Format1.matches(&key.to_lowercase()));
        assert!(!KeyFormat::Format1.matches(&format!("{key}-")));
    }

    #[test]
    fn format2_pattern() {
        assert!(KeyFormat::Format2.matches("ABCDE-12345-FGHIJ-67890-KLMNO"));
        assert!(!KeyFormat::Format2.matches("ABCDE-12345-FGHIJ-67890-KLMN"));
        assert!(!KeyFormat::Format2.matches("ABCDE_12345-FGHIJ-67890-KLMNO"));
    }

    #[test]
    fn format3_pattern() {
        assert!(KeyFormat::Format3.matches("237ABCDGHJLPRS 10"));
        assert!(KeyFormat::Format3.matches("TTTTTTTTTTTTTT 99"));
        // suffix below 10
        assert!(!KeyFormat::Format3.matches("237ABCDGHJLPRS 09"));
        // E is not in the alphabet
        assert!(!KeyFormat::Format3.matches("237ABCDGHJLPRE 42"));
        assert!(!KeyFormat::Format3.matches("237ABCDGHJLPR 42"));
        assert!(!KeyFormat::Format3.matches("237ABCDGHJLPRS  42"));
    }

    #[test]
    fn detect_picks_matching_format() {
        assert_eq!(
            KeyFormat::detect("ABCDE-12345-FGHIJ-67890-KLMNO"),
            Some(KeyFormat::Format2)
        );
        assert_eq!(
            KeyFormat::detect("237ABCDGHJLPRS 55"),
            Some(KeyFormat::Format3)
        );
        assert_eq!(KeyFormat::detect("not-a-key"), None);
    }
}
