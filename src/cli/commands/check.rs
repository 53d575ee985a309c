use crate::cli::commands::session_helpers::yes_no;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::key_format::KeyFormat;
use crate::core::services::key_service::KeyService;

/// Execute the `steamkeygen check` command.
///
/// Reports which format the key's shape matches and whether it is
/// already recorded for that format.
pub fn execute(ctx: &Context, key: &str) -> Result<()> {
    let key = key.trim();

    output::header("🔍 steamkeygen check");

    let Some(format) = KeyFormat::detect(key) else {
        output::warning(&format!("'{key}' does not match any key format"));
        return Ok(());
    };

    output::success(&format!("Format {format} ({})", format.template()));

    let service = KeyService { store: ctx.store() };
    match service.lookup(key, format) {
        Some(entry) => output::success(&format!(
            "Recorded in database (valid: {})",
            yes_no(entry.is_valid)
        )),
        None => output::warning("Not recorded in database"),
    }

    Ok(())
}
