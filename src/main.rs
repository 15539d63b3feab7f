//! glance: CPU, memory and disk usage at a glance, in the terminal.
//!
//! Run with:  `RUST_LOG=debug glance memory`

use anyhow::Result;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = glance_cli::Cli::parse_checked();

    // Logs go to stderr; RUST_LOG controls verbosity (default: warn).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    tracing::debug!("glance v{} starting", env!("CARGO_PKG_VERSION"));

    glance_cli::run(cli)
}
