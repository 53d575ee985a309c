use colored::Colorize;

use crate::cli::commands::session_helpers::report_load_source;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::key_format::KeyFormat;
use crate::core::services::key_service::KeyService;

/// Execute the `steamkeygen list` command.
pub fn execute(ctx: &Context, only: Option<KeyFormat>) -> Result<()> {
    let service = KeyService { store: ctx.store() };
    let (db, source) = service.database();
    report_load_source(&source);

    if db.is_empty() {
        output::warning("No keys recorded yet. Run 'steamkeygen generate' first.");
        return Ok(());
    }

    let formats: Vec<KeyFormat> = match only {
        Some(format) => vec![format],
        None => KeyFormat::ALL.to_vec(),
    };

    for format in formats {
        let entries = db.entries(format);
        output::header(&format!("Format {format} ({} keys)", entries.len()));

        if entries.is_empty() {
            println!("    (none)");
            continue;
        }

        for entry in entries {
            let marker = if entry.is_valid {
                "✓".green()
            } else {
                "✗".red()
            };
            println!("    {marker} {}", entry.key);
        }
    }

    if only.is_none() {
        println!();
        output::success(&format!("{} keys recorded", db.len()));
    }

    Ok(())
}
