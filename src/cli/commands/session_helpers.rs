use crate::adapters::clipboard::system_clipboard::SystemClipboard;
use crate::cli::output;
use crate::core::traits::clipboard::Clipboard;
use crate::core::traits::key_store::LoadSource;

/// Offer a key to the system clipboard. Failures are reported in verbose
/// mode only and never interrupt generation.
pub fn offer_to_clipboard(key: &str) {
    match SystemClipboard.copy(key) {
        Ok(()) => output::success("Copied to clipboard"),
        Err(e) => output::detail(&format!("Clipboard unavailable: {e}")),
    }
}

/// Explain where the database snapshot came from.
pub fn report_load_source(source: &LoadSource) {
    match source {
        LoadSource::File => {}
        LoadSource::Missing => output::detail("No key database yet, starting empty"),
        LoadSource::Recovered { reason } => {
            output::detail(&format!("Ignoring unreadable key database ({reason})"));
        }
    }
}

/// "Yes" / "No" for validity flags.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
