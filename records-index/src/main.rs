use anyhow::{Context, Result};
use clap::Parser;
use records_index::cli::{run, Cli};

fn main() -> Result<()> {
    // Logs go to stderr; stdout stays free for the human-readable summary.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    tracing::info!("CLI application startup: tracing initialised");

    let _cli = Cli::parse();
    let program_root = std::env::current_dir().context("Failed to determine program root")?;

    let result = run(&program_root);
    match &result {
        Ok(_) => tracing::info!("CLI completed successfully"),
        Err(e) => tracing::error!(error = %e, "CLI exited with error"),
    }
    result
}
