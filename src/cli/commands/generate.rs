use crate::adapters::synthesizers::random_synthesizer::RandomSynthesizer;
use crate::cli::commands::session_helpers::{offer_to_clipboard, report_load_source, yes_no};
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::key_format::KeyFormat;
use crate::core::services::key_generator::KeyGenerator;
use crate::core::services::key_service::KeyService;

/// Flags accepted by `steamkeygen generate`.
#[derive(Debug, Clone, Copy)]
pub struct GenerateArgs {
    pub format: Option<KeyFormat>,
    pub count: usize,
    pub valid: bool,
    pub no_save: bool,
    pub no_copy: bool,
}

/// Execute the `steamkeygen generate` command.
///
/// Each key is generated against a fresh snapshot of the database and,
/// unless saving is disabled, recorded before the next one is drawn.
/// Only the last key is offered to the clipboard.
pub fn execute(ctx: &Context, args: GenerateArgs) -> Result<()> {
    let mut options = ctx.options;
    if let Some(format) = args.format {
        options = options.with_format(format);
    }
    if args.no_save {
        options = options.with_save_to_database(false);
    }

    let store = ctx.store();
    let service = KeyService {
        store: store.clone(),
    };
    let mut generator = KeyGenerator::new(&store, RandomSynthesizer::new(), options.max_attempts);

    output::header(&format!("🔑 Format {} ({})", options.format, options.format.template()));

    let mut last_key = None;
    for _ in 0..args.count {
        let generated = generator.generate_unique(options.format)?;
        report_load_source(&generated.source);
        output::detail(&format!(
            "Format {} key accepted after {} attempt(s)",
            generated.format, generated.attempts
        ));
        output::key(&generated.key);

        if options.save_to_database {
            service.record(&generated.key, options.format, args.valid)?;
            output::success(&format!(
                "Saved to {} (valid: {})",
                store.path().display(),
                yes_no(args.valid)
            ));
        }

        last_key = Some(generated.key);
    }

    if !options.save_to_database {
        output::warning("Not saved: keys may be generated again later");
    }

    if options.copy_to_clipboard
        && !args.no_copy
        && let Some(key) = last_key
    {
        offer_to_clipboard(&key);
    }

    Ok(())
}
