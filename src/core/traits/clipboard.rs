use crate::core::errors::Result;

/// Port for handing a generated key to the system clipboard.
///
/// Copying is best-effort. Callers discard the error branch.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}
