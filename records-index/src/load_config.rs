/// `load_config` module: reads the optional YAML configuration file and maps it
/// onto the core [`IndexConfig`] plus the root directory to scan.
///
/// A missing file is not an error: every key has a default, so the tool works
/// with no configuration at all. A file that exists but cannot be read or
/// parsed is reported with the path and the parser message.
use anyhow::Result;
use records_index_core::IndexConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Looked up in the program root.
pub const CONFIG_FILE_NAME: &str = "records-index.yaml";

/// Directory scanned when the configuration does not name one.
pub const DEFAULT_ROOT: &str = "records";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StaticConfig {
    #[serde(default)]
    root: Option<PathBuf>,
    #[serde(default)]
    extension: Option<String>,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// Root directory plus the core indexing settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Root to scan, relative to the program root unless absolute.
    pub root: PathBuf,
    pub index: IndexConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            index: IndexConfig::default(),
        }
    }
}

impl From<StaticConfig> for CliConfig {
    fn from(raw: StaticConfig) -> Self {
        let defaults = IndexConfig::default();
        Self {
            root: raw.root.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
            index: IndexConfig {
                extension: raw.extension.unwrap_or(defaults.extension),
                output: raw.output.unwrap_or(defaults.output),
                title: raw.title.unwrap_or(defaults.title),
            },
        }
    }
}

impl CliConfig {
    pub fn resolve_root(&self, program_root: &Path) -> PathBuf {
        if self.root.is_absolute() {
            self.root.clone()
        } else {
            program_root.join(&self.root)
        }
    }
}

/// Loads a YAML config file into a [`CliConfig`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    // An empty file is a valid "all defaults" document.
    if config_content.trim().is_empty() {
        return Ok(CliConfig::default());
    }

    let static_conf: StaticConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML {:?}: {e}", path_ref));
        }
    };

    let config = CliConfig::from(static_conf);
    config.index.trace_loaded();
    info!(root = %config.root.display(), "Config loaded successfully");
    Ok(config)
}

/// Like [`load_config`], but falls back to defaults when the file does not exist.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        info!(config_path = ?path_ref, "No config file found, using defaults");
        let config = CliConfig::default();
        config.index.trace_loaded();
        return Ok(config);
    }
    load_config(path_ref)
}
