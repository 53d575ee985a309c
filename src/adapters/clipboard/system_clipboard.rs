use std::io::Write;
use std::process::{Command, Stdio};

use crate::core::errors::{KeygenError, Result};
use crate::core::traits::clipboard::Clipboard;

/// Clipboard backed by the platform's command-line copy tool.
///
/// The text is written to the tool's stdin; nothing is interpolated into
/// a shell command line.
pub struct SystemClipboard;

type CopyCommand = (&'static str, &'static [&'static str]);

const WINDOWS_COMMANDS: &[CopyCommand] = &[(
    "powershell",
    &["-NoProfile", "-Command", "$input | Set-Clipboard"],
)];

const MACOS_COMMANDS: &[CopyCommand] = &[("pbcopy", &[])];

const UNIX_COMMANDS: &[CopyCommand] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("wl-copy", &[]),
];

impl SystemClipboard {
    /// Candidate commands for the current platform, tried in order.
    fn commands() -> &'static [CopyCommand] {
        if cfg!(target_os = "windows") {
            WINDOWS_COMMANDS
        } else if cfg!(target_os = "macos") {
            MACOS_COMMANDS
        } else {
            UNIX_COMMANDS
        }
    }

    fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        Ok(child.wait()?.success())
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut last_error = String::from("no clipboard tool available");

        for (program, args) in Self::commands() {
            match Self::pipe_to(program, args, text) {
                Ok(true) => return Ok(()),
                Ok(false) => last_error = format!("{program} exited with an error"),
                Err(e) => last_error = format!("{program}: {e}"),
            }
        }

        Err(KeygenError::Io(std::io::Error::other(last_error)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_reports_error() {
        let result = SystemClipboard::pipe_to("steamkeygen-no-such-tool", &[], "text");
        assert!(result.is_err());
    }

    #[test]
    fn platform_has_at_least_one_command() {
        assert!(!SystemClipboard::commands().is_empty());
    }
}
