use crate::error::{CardsError, Result};
use crate::model::PYTHON_KERNEL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 3] = ["output-dir", "pretty", "default-kernel"];

/// Configuration for a deck, stored in .nbcards/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardsConfig {
    /// Directory exported notebooks are written to. Unset means the current
    /// working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Pretty-print exported notebooks
    #[serde(default)]
    pub pretty: bool,

    /// Kernel given to new cards when none is specified
    #[serde(default = "default_kernel")]
    pub default_kernel: String,
}

fn default_kernel() -> String {
    PYTHON_KERNEL.to_string()
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            pretty: false,
            default_kernel: default_kernel(),
        }
    }
}

impl CardsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardsError::Io)?;
        let config: CardsConfig =
            serde_json::from_str(&content).map_err(CardsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CardsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CardsError::Serialization)?;
        fs::write(config_path, content).map_err(CardsError::Io)?;
        Ok(())
    }

    /// Formatted value for a config key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output-dir" => Some(
                self.output_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "pretty" => Some(self.pretty.to_string()),
            "default-kernel" => Some(self.default_kernel.clone()),
            _ => None,
        }
    }

    /// Sets a config key from its string form. An empty `output-dir` unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "output-dir" => {
                self.output_dir = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "pretty" => {
                self.pretty = parse_bool(value)
                    .ok_or_else(|| format!("Invalid value for pretty: {}", value))?;
            }
            "default-kernel" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("default-kernel cannot be empty".to_string());
                }
                self.default_kernel = value.to_string();
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
