mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::commands::generate::GenerateArgs;
use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    cli::output::init(args.verbose, args.quiet);

    let result = Context::resolve(&args).and_then(|ctx| match &args.command {
        Commands::Generate {
            format,
            count,
            valid,
            no_save,
            no_copy,
        } => cli::commands::generate::execute(
            &ctx,
            GenerateArgs {
                format: *format,
                count: *count,
                valid: *valid,
                no_save: *no_save,
                no_copy: *no_copy,
            },
        ),
        Commands::Menu => cli::commands::menu::execute(&ctx),
        Commands::List { format } => cli::commands::list::execute(&ctx, *format),
        Commands::Check { key } => cli::commands::check::execute(&ctx, key),
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
