use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{IndexError, Result};

/// Settings that decide which files get listed and how the page looks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Target extension, matched case-insensitively. A leading dot is optional.
    pub extension: String,
    /// File name of the generated page inside the root directory.
    pub output: String,
    pub title: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extension: "pdf".to_string(),
            output: "index.html".to_string(),
            title: "Records".to_string(),
        }
    }
}

impl IndexConfig {
    /// Extension without its leading dot, lower-cased for comparison.
    pub fn normalized_extension(&self) -> String {
        self.extension.trim_start_matches('.').to_lowercase()
    }

    /// `true` when `file_name` ends with `.<extension>`, ignoring case.
    pub fn matches(&self, file_name: &str) -> bool {
        let suffix = format!(".{}", self.normalized_extension());
        file_name.to_lowercase().ends_with(&suffix)
    }

    pub fn validate(&self) -> Result<()> {
        if self.normalized_extension().is_empty() {
            return Err(IndexError::Configuration(
                "extension must not be empty".to_string(),
            ));
        }
        let output = self.output.as_str();
        if output.is_empty()
            || output == "."
            || output == ".."
            || output.contains('/')
            || output.contains('\\')
        {
            return Err(IndexError::Configuration(format!(
                "output must be a plain file name, got {output:?}"
            )));
        }
        Ok(())
    }

    pub fn trace_loaded(&self) {
        info!(
            extension = %self.normalized_extension(),
            output = %self.output,
            "Loaded IndexConfig"
        );
        debug!(?self, "IndexConfig loaded (full debug)");
    }
}
