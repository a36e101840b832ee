use crate::core::dirs::get_config_directory;
use crate::core::error::{GitDeckError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// git executable used for plumbing reports
    pub git_binary: String,
    /// List untracked files in status
    pub include_untracked: bool,
    /// Re-query merge commits with first-parent output when listing their files
    pub first_parent_for_merges: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_binary: "git".to_string(),
            include_untracked: true,
            first_parent_for_merges: true,
        }
    }
}

impl Config {
    pub fn load_or_create() -> Result<Self> {
        Self::load_or_create_in(&get_config_directory()?)
    }

    pub fn load_or_create_in(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join(CONFIG_FILE);

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            serde_json::from_str(&content)
                .map_err(|e| GitDeckError::config_parse_failed(&config_file, e))
        } else {
            let config = Self::default();
            config.save_in(config_dir)?;
            log::debug!("Wrote default config to {}", config_file.display());
            Ok(config)
        }
    }

    pub fn save_in(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}
