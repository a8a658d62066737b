use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFILE_FILENAME: &str = "profile.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    pub file_path: Option<String>,
    pub log_level: Option<String>,
}

impl Profile {
    pub fn from_path(profile: &Path) -> anyhow::Result<Option<Self>> {
        if !profile.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(profile).context("Failed to read profile file")?;

        let profile: Self = toml::from_str(&contents).context("Failed to deserialize profile")?;

        Ok(Some(profile))
    }

    #[cfg(test)]
    pub fn save(&self, profile_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string(self).context("Failed to serialize profile")?;

        std::fs::write(profile_path, content).context("Failed to write profile")?;

        Ok(())
    }
}

/// Get the XDG config directory, respecting XDG_CONFIG_HOME
fn get_config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        // XDG_CONFIG_HOME is the base directory, add "todo" subdirectory
        PathBuf::from(xdg_config).join("todo")
    } else {
        directories::ProjectDirs::from("com", "todo", "todo")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn get_profile_path(arg_profile: &Option<String>) -> PathBuf {
    match arg_profile {
        Some(path) => PathBuf::from(path),
        None => get_config_dir().join(DEFAULT_PROFILE_FILENAME),
    }
}
