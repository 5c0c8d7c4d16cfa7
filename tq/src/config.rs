//! Configuration for the tq command

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Priority for `priority` entries without an explicit `:N`
    #[serde(default = "default_priority")]
    pub default_priority: i32,

    /// Turns for `turns` entries without an explicit `:N` (0 or less is infinite)
    #[serde(default = "default_turns")]
    pub default_turns: i32,

    /// Maximum turns served by `turns` when `--rounds` is not given
    #[serde(default = "default_rounds")]
    pub default_rounds: usize,
}

fn default_priority() -> i32 {
    crate::DEFAULT_PRIORITY
}

fn default_turns() -> i32 {
    crate::DEFAULT_TURNS
}

fn default_rounds() -> usize {
    crate::DEFAULT_ROUNDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_priority: default_priority(),
            default_turns: default_turns(),
            default_rounds: default_rounds(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("turnqueue").join("config.yml")),
            Some(PathBuf::from("turnqueue.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from(path);
            }
        }

        Ok(Config::default())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
