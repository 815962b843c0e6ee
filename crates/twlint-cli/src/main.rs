//! twlint entry point.
//!
//! ```bash
//! cargo run -p twlint-cli -- check src/
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use twlint_cli::Cli;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so JSON on stdout stays clean (respects RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let outcome = twlint_cli::run(cli, &mut io::stdout().lock())?;
    Ok(if outcome.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
