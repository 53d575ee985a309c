use std::io::{self, BufRead};

use crate::adapters::key_stores::json_key_store::JsonKeyStore;
use crate::adapters::synthesizers::random_synthesizer::RandomSynthesizer;
use crate::cli::commands::session_helpers::{offer_to_clipboard, report_load_source, yes_no};
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::{KeygenError, Result};
use crate::core::models::generator_options::GeneratorOptions;
use crate::core::models::key_format::KeyFormat;
use crate::core::services::key_generator::KeyGenerator;
use crate::core::services::key_service::KeyService;

/// Execute the `steamkeygen menu` command.
///
/// Options changed here live only for this session. End of input exits.
pub fn execute(ctx: &Context) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut options = ctx.options;

    loop {
        output::header("Steam Game Key Generator");
        println!("  1 - Generate Key");
        println!("  2 - Options");
        println!("  3 - Exit");
        output::prompt("Select option (1/2/3): ")?;

        let Some(choice) = read_answer(&mut input)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => generate_loop(ctx, &options, &mut input)?,
            "2" => options = options_menu(options, &mut input)?,
            "3" => {
                output::success("Goodbye!");
                return Ok(());
            }
            _ => output::warning("Invalid selection"),
        }
    }
}

/// Generate keys until the user answers something other than Y or N.
fn generate_loop(ctx: &Context, options: &GeneratorOptions, input: &mut impl BufRead) -> Result<()> {
    let store = ctx.store();
    let service = KeyService {
        store: store.clone(),
    };
    let mut generator = KeyGenerator::new(&store, RandomSynthesizer::new(), options.max_attempts);

    output::header(&format!("Format: {}", options.format));
    println!("  Save to Database: {}", yes_no(options.save_to_database));
    println!("  (Any input other than Y or N will return to menu)");

    loop {
        let generated = match generator.generate_unique(options.format) {
            Ok(g) => g,
            Err(e) => {
                output::error(&e.to_string());
                return Ok(());
            }
        };
        report_load_source(&generated.source);

        println!();
        output::key(&generated.key);
        if options.copy_to_clipboard {
            offer_to_clipboard(&generated.key);
        }

        output::prompt("Is this key valid? (Y/y for yes, N/n for no): ")?;
        let Some(answer) = read_answer(input)? else {
            return Ok(());
        };

        let Some(is_valid) = parse_validity(&answer) else {
            output::warning("Returning to menu...");
            return Ok(());
        };

        if options.save_to_database {
            record(&service, &generated.key, options.format, is_valid);
        } else {
            output::warning(&format!("Key not saved (valid: {})", yes_no(is_valid)));
        }
    }
}

/// Record a key, reporting a failed save without leaving the loop.
fn record(service: &KeyService<JsonKeyStore>, key: &str, format: KeyFormat, is_valid: bool) {
    match service.record(key, format, is_valid) {
        Ok(_) => output::success(&format!("Key saved to database (valid: {})", yes_no(is_valid))),
        Err(e) => output::error(&e.to_string()),
    }
}

/// Let the user change the format and the save toggle.
fn options_menu(mut options: GeneratorOptions, input: &mut impl BufRead) -> Result<GeneratorOptions> {
    loop {
        output::header("Options");
        println!("  1 - Format: {}", options.format);
        println!("  2 - Save to Database: {}", yes_no(options.save_to_database));
        println!("  3 - Back to Menu");
        output::prompt("Select option (1/2/3): ")?;

        let Some(choice) = read_answer(input)? else {
            return Ok(options);
        };

        match choice.as_str() {
            "1" => options = select_format(options, input)?,
            "2" => options = select_save(options, input)?,
            "3" => return Ok(options),
            _ => output::warning("Invalid selection"),
        }
    }
}

fn select_format(options: GeneratorOptions, input: &mut impl BufRead) -> Result<GeneratorOptions> {
    output::header("Select Format");
    for format in KeyFormat::ALL {
        println!("  {format} - Format {format} ({})", format.template());
    }
    output::prompt("Enter format (1/2/3): ")?;

    let Some(answer) = read_answer(input)? else {
        return Ok(options);
    };

    match answer.parse::<KeyFormat>() {
        Ok(format) => {
            output::success(&format!("Format set to {format}"));
            Ok(options.with_format(format))
        }
        Err(KeygenError::InvalidFormat { .. }) => {
            output::warning("Invalid format selection");
            Ok(options)
        }
        Err(e) => Err(e),
    }
}

fn select_save(options: GeneratorOptions, input: &mut impl BufRead) -> Result<GeneratorOptions> {
    output::header("Save to Database");
    println!("  1 - Yes");
    println!("  2 - No");
    output::prompt("Enter choice (1/2): ")?;

    let save = match read_answer(input)?.as_deref() {
        Some("1") => true,
        Some("2") => false,
        _ => options.save_to_database,
    };

    output::success(&format!("Save to Database set to {}", yes_no(save)));
    Ok(options.with_save_to_database(save))
}

/// Y/y is valid, N/n is not valid, anything else is no answer.
fn parse_validity(answer: &str) -> Option<bool> {
    if answer.eq_ignore_ascii_case("y") {
        Some(true)
    } else if answer.eq_ignore_ascii_case("n") {
        Some(false)
    } else {
        None
    }
}

/// Read one trimmed line, or `None` at end of input.
fn read_answer(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
