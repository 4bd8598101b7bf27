//! Directory traversal: find every file under a root whose name carries the
//! target extension.
//!
//! The walk is iterative and never follows symbolic links, so link cycles
//! cannot trap it. Symlinks themselves are not listed either, matching
//! plain directory-entry enumeration where a link is neither a file nor a
//! directory.

use std::ffi::OsString;
use std::path::{Component, Path};

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};

/// A matched file, identified by its path relative to the scanned root.
///
/// Names that are not valid UTF-8 are kept: they are shown lossily decoded,
/// while the link is built from the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchedFile {
    relative: String,
    segments: Vec<OsString>,
}

impl MatchedFile {
    /// Build from a path relative to the root, normalizing separators.
    ///
    /// Returns `None` for empty paths or paths that escape the root (`..`,
    /// absolute prefixes).
    pub fn from_relative_path(rel: &Path) -> Option<Self> {
        let mut segments = Vec::new();
        for comp in rel.components() {
            match comp {
                Component::Normal(seg) => segments.push(seg.to_os_string()),
                Component::CurDir => {}
                _ => return None,
            }
        }
        if segments.is_empty() {
            return None;
        }
        let relative = segments
            .iter()
            .map(|seg| seg.to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Some(Self { relative, segments })
    }

    /// Relative path with forward slashes, e.g. `sub/dir/report.pdf`.
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Last path segment.
    pub fn file_name(&self) -> &str {
        self.relative
            .rsplit('/')
            .next()
            .unwrap_or(self.relative.as_str())
    }

    /// Relative link: every segment percent-encoded from its raw bytes, joined by `/`.
    pub fn href(&self) -> String {
        self.segments
            .iter()
            .map(|seg| urlencoding::encode_binary(seg.as_encoded_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Produces the unordered set of matching files under a root.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait Scanner {
    fn scan(&self, root: &Path, config: &IndexConfig) -> Result<Vec<MatchedFile>>;
}

/// Filesystem scanner backed by `walkdir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkScanner;

impl Scanner for WalkScanner {
    fn scan(&self, root: &Path, config: &IndexConfig) -> Result<Vec<MatchedFile>> {
        info!(root = %root.display(), extension = %config.normalized_extension(), "Scanning directory tree");
        let mut found = Vec::new();

        for entry_res in WalkDir::new(root).follow_links(false) {
            let entry = entry_res.map_err(|e| {
                error!(error = %e, "Failed to read directory entry");
                IndexError::from(e)
            })?;

            if !entry.file_type().is_file() {
                if entry.path_is_symlink() {
                    debug!(path = %entry.path().display(), "Skipping symbolic link");
                }
                continue;
            }

            // The page we are about to write is never part of its own listing.
            if entry.depth() == 1 && entry.file_name() == config.output.as_str() {
                continue;
            }

            // Lossy decoding never swallows the ASCII bytes of the suffix.
            if !config.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let rel = match entry.path().strip_prefix(root) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            match MatchedFile::from_relative_path(rel) {
                Some(file) => {
                    debug!(file = file.relative(), "Matched file");
                    found.push(file);
                }
                None => {
                    warn!(path = %entry.path().display(), "Skipping entry outside the root");
                }
            }
        }

        info!(count = found.len(), "Scan complete");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn relative_path_uses_forward_slashes() {
        let rel: PathBuf = ["sub", "dir", "report.pdf"].iter().collect();
        let file = MatchedFile::from_relative_path(&rel).unwrap();
        assert_eq!(file.relative(), "sub/dir/report.pdf");
        assert_eq!(file.file_name(), "report.pdf");
    }

    #[test]
    fn href_keeps_slashes_and_encodes_segments() {
        let file = MatchedFile::from_relative_path(Path::new("my docs/a b#1.pdf")).unwrap();
        assert_eq!(file.href(), "my%20docs/a%20b%231.pdf");
        let plain = MatchedFile::from_relative_path(Path::new("sub/dir/report.pdf")).unwrap();
        assert_eq!(plain.href(), "sub/dir/report.pdf");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_segments_are_kept_and_encoded_from_raw_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let rel = Path::new(OsStr::from_bytes(b"d\xff/caf\xe9.pdf"));
        let file = MatchedFile::from_relative_path(rel).unwrap();
        assert_eq!(file.relative(), "d\u{FFFD}/caf\u{FFFD}.pdf");
        assert_eq!(file.file_name(), "caf\u{FFFD}.pdf");
        assert_eq!(file.href(), "d%FF/caf%E9.pdf");
    }

    #[test]
    fn relative_path_rejects_parent_components() {
        assert!(MatchedFile::from_relative_path(Path::new("../x.pdf")).is_none());
        assert!(MatchedFile::from_relative_path(Path::new("")).is_none());
    }
}
