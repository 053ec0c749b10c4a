//! Palindrome checker demo.
//!
//! ```bash
//! # Built-in samples (default)
//! palindrome-demo
//!
//! # Ignore case, spaces and punctuation
//! palindrome-demo check "No 'x' in Nixon"
//!
//! # Length-limited check, punctuation significant
//! palindrome-demo secure --max-length 20 "Race Car"
//!
//! # Untyped input
//! palindrome-demo json '"level"' 12321 null
//!
//! # Validation scenarios
//! palindrome-demo security
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG` or pass `-v` for per-check debug output.

mod cli;
mod report;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use palindrome_core::SecureChecker;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Samples) {
        Commands::Samples => report::write_samples(&mut out)?,
        Commands::Check { texts } => report::write_checks(&mut out, &texts)?,
        Commands::Secure { max_length, texts } => {
            let checker = SecureChecker::with_max_length(max_length);
            report::write_secure(&mut out, &checker, &texts)?
        }
        Commands::Json { max_length, values } => {
            let checker = SecureChecker::with_max_length(max_length);
            report::write_json(&mut out, &checker, &values)?
        }
        Commands::Security => report::write_security(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
