#![doc = "records-index-core: core logic library for records-index."]

//! Scans a directory tree for files with a target extension and renders a
//! static HTML page listing each one with a download link.
//!
//! # Usage
//! Call [`build_index`] with the root directory, or construct an
//! [`Indexer`] with a custom [`IndexConfig`] and [`Scanner`].

pub mod build;
pub mod collate;
pub mod config;
pub mod error;
pub mod render;
pub mod scan;

pub use build::{build_index, IndexReport, Indexer};
pub use config::IndexConfig;
pub use error::{IndexError, Result};
pub use scan::{MatchedFile, Scanner, WalkScanner};

#[cfg(any(test, feature = "test-export-mocks"))]
pub use scan::MockScanner;
