use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    /// The root directory or the index settings are unusable. Raised before any traversal.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IndexError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        IndexError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, IndexError::Configuration(_))
    }
}

impl From<walkdir::Error> for IndexError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map(Path::to_path_buf).unwrap_or_default();
        let source = match e.into_io_error() {
            Some(io_err) => io_err,
            None => io::Error::new(io::ErrorKind::Other, "filesystem loop detected"),
        };
        IndexError::Io { path, source }
    }
}
