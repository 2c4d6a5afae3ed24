use crate::error::{MagpieError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_FALLBACK_FILE: &str = "Unsorted";

/// Configuration for magpie, stored in `config.json` next to the data file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MagpieConfig {
    /// File that receives quotes saved without a file name
    #[serde(default = "default_file")]
    pub default_file: String,

    /// Group exported quotes by source page
    #[serde(default = "default_group_exports")]
    pub group_exports: bool,

    /// Directory for exported markdown (current directory when unset)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_file() -> String {
    DEFAULT_FALLBACK_FILE.to_string()
}

fn default_group_exports() -> bool {
    true
}

impl Default for MagpieConfig {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            group_exports: default_group_exports(),
            export_dir: None,
        }
    }
}

impl MagpieConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MagpieError::Io)?;
        let config: MagpieConfig =
            serde_json::from_str(&content).map_err(MagpieError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MagpieError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MagpieError::Serialization)?;
        fs::write(config_path, content).map_err(MagpieError::Io)?;
        Ok(())
    }

    /// Where exports go when the caller does not name a directory
    pub fn export_dir_or_cwd(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
