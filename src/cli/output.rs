use std::io::Write;
use std::sync::OnceLock;

use colored::Colorize;

/// How much the CLI prints besides keys and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

/// Set the output level once at startup.
pub fn init(verbose: bool, quiet: bool) {
    let level = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    let _ = VERBOSITY.set(level);
}

fn verbosity() -> Verbosity {
    VERBOSITY.get().copied().unwrap_or(Verbosity::Normal)
}

/// Print a generated key. Always shown, bare in quiet mode.
pub fn key(key: &str) {
    if verbosity() == Verbosity::Quiet {
        println!("{key}");
    } else {
        println!("  Generated key: {}", key.cyan().bold());
    }
}

/// Print a success message.
pub fn success(msg: &str) {
    if verbosity() > Verbosity::Quiet {
        println!("  {} {}", "✓".green(), msg);
    }
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if verbosity() > Verbosity::Quiet {
        println!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    if verbosity() > Verbosity::Quiet {
        println!("\n{}", msg.bold());
    }
}

/// Print a diagnostic line, only with `--verbose`.
pub fn detail(msg: &str) {
    if verbosity() == Verbosity::Verbose {
        println!("  {} {}", "·".dimmed(), msg.dimmed());
    }
}

/// Print a prompt without a trailing newline.
pub fn prompt(msg: &str) -> std::io::Result<()> {
    print!("  {msg}");
    std::io::stdout().flush()
}
