//! CLI glue for records-index: configuration lookup, orchestration of the
//! core pipeline, and user-visible output.
//!
//! All indexing logic lives in `records-index-core`. The binary takes no
//! options besides `--help` and `--version`; it works on the program root
//! (the current working directory) and its `records/` directory.

use crate::load_config::{load_config_or_default, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use clap::Parser;
use records_index_core::Indexer;
use std::path::Path;

/// Generate `records/index.html` listing every PDF under `records/`.
#[derive(Parser)]
#[clap(
    name = "records-index",
    version,
    about = "Generate records/index.html listing every PDF under records/ with a download link"
)]
pub struct Cli {}

/// Build the index for `program_root`. Shared by `main()` and integration tests.
pub fn run(program_root: &Path) -> Result<()> {
    let config = load_config_or_default(program_root.join(CONFIG_FILE_NAME))?;
    let root = config.resolve_root(program_root);
    tracing::info!(root = %root.display(), "Starting index build");

    let report = Indexer::new(config.index)
        .run(&root)
        .with_context(|| format!("Failed to build index for {}", root.display()))?;

    println!(
        "Wrote {} ({} {})",
        report.output.display(),
        report.entries,
        if report.entries == 1 { "entry" } else { "entries" }
    );
    Ok(())
}
