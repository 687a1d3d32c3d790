pub mod types;

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "compose-gen.toml";

/// Settings read from the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the rendered compose file goes
    pub path: String,
    /// Overwrite an existing file without asking
    pub overwrite_existing: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: "docker-compose.yml".to_string(),
            overwrite_existing: false,
        }
    }
}

/// Load configuration from file or use defaults. An explicitly named file
/// must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(FileConfig::default());
            }
            default.to_path_buf()
        }
    };

    let raw = fs::read_to_string(&path)
        .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;
    let config =
        toml::from_str(&raw).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;

    log::debug!("loaded configuration from {}", path.display());
    Ok(config)
}
