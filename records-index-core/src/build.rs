//! The indexing pipeline: validate root, scan, sort, render, write.
//!
//! Each run is linear and fail-fast. Nothing touches the output path until
//! the page is fully rendered, and the page is written through a temporary
//! file in the same directory that is renamed into place, so a failed run
//! leaves any previous index untouched.
//!
//! The rename replaces the directory entry itself: a symlinked `index.html`
//! is replaced by a regular file rather than written through, and a
//! read-only one is replaced as long as the root directory is writable. The
//! new file takes over the previous index's permissions, or `0644` when
//! there was none.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::collate::EnglishCollator;
use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::render::render_index;
use crate::scan::{MatchedFile, Scanner, WalkScanner};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub root: PathBuf,
    pub output: PathBuf,
    pub entries: usize,
}

/// Builds an index page for a root directory using a [`Scanner`].
pub struct Indexer<S: Scanner = WalkScanner> {
    config: IndexConfig,
    scanner: S,
}

impl Indexer<WalkScanner> {
    pub fn new(config: IndexConfig) -> Self {
        Self::with_scanner(config, WalkScanner)
    }
}

impl<S: Scanner> Indexer<S> {
    pub fn with_scanner(config: IndexConfig, scanner: S) -> Self {
        Self { config, scanner }
    }

    /// Run the whole pipeline against `root` and write the page.
    pub fn run(&self, root: &Path) -> Result<IndexReport> {
        self.config.validate()?;
        ensure_root(root)?;
        info!(root = %root.display(), "Root directory validated");

        let files = self.collect(root)?;
        let html = render_index(&self.config, &files);
        let output = root.join(&self.config.output);
        write_atomically(root, &output, &html).map_err(|e| {
            error!(error = %e, output = %output.display(), "Failed to write index");
            e
        })?;

        let entries = files.len();
        info!(output = %output.display(), entries, "Index written");
        Ok(IndexReport {
            root: root.to_path_buf(),
            output,
            entries,
        })
    }

    /// Scan and return the matches in listing order. The root is not validated here.
    pub fn collect(&self, root: &Path) -> Result<Vec<MatchedFile>> {
        let collator = EnglishCollator::new()?;
        let mut files = self.scanner.scan(root, &self.config)?;
        // Lossily decoded names can collide; the derived order on raw segments settles those.
        files.sort_by(|a, b| {
            collator
                .compare(a.relative(), b.relative())
                .then_with(|| a.cmp(b))
        });
        Ok(files)
    }
}

fn ensure_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        return Ok(());
    }
    error!(root = %root.display(), "Root not found or not a directory");
    Err(IndexError::Configuration(format!(
        "root not found or not a directory: {}",
        root.display()
    )))
}

fn write_atomically(dir: &Path, output: &Path, contents: &str) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| IndexError::io(dir, e))?;
    let tmp_path = tmp.path().to_path_buf();
    tmp.write_all(contents.as_bytes())
        .map_err(|e| IndexError::io(&tmp_path, e))?;
    tmp.flush().map_err(|e| IndexError::io(&tmp_path, e))?;
    set_output_permissions(tmp.as_file(), output).map_err(|e| IndexError::io(output, e))?;
    tmp.persist(output)
        .map_err(|e| IndexError::io(output, e.error))?;
    Ok(())
}

// Temp files are created owner-only; the page has to stay readable by whatever serves it.
#[cfg(unix)]
fn set_output_permissions(file: &std::fs::File, output: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match std::fs::metadata(output) {
        Ok(existing) => existing.permissions(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            std::fs::Permissions::from_mode(0o644)
        }
        Err(e) => return Err(e),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn set_output_permissions(_file: &std::fs::File, _output: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Write `<root>/index.html` listing every `.pdf` file under `root`.
pub fn build_index(root: &Path) -> Result<()> {
    Indexer::new(IndexConfig::default()).run(root).map(|_| ())
}
