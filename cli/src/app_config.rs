use std::path::{Path, PathBuf};

use serde::Serialize;
use todo_core::DEFAULT_FILE_NAME;

use crate::{args::ConfigArgs, profile::Profile};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Serialize)]
pub struct AppConfig {
    pub profile_path: String,
    pub file_path: String,
    pub log_level: String,
    pub profile_exists: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            profile_path: "./".to_string(),
            file_path: DEFAULT_FILE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            profile_exists: false,
        }
    }
}

impl AppConfig {
    /// Command line wins over the profile, the profile wins over defaults
    pub fn from_args(args: ConfigArgs, profile_path: &Path, profile: Option<&Profile>) -> Self {
        let defaults = AppConfig::default();

        let file_path = args
            .file
            .or_else(|| profile.and_then(|p| p.file_path.clone()))
            .unwrap_or(defaults.file_path);

        let log_level = profile
            .and_then(|p| p.log_level.clone())
            .unwrap_or(defaults.log_level);

        AppConfig {
            profile_exists: profile.is_some(),
            profile_path: profile_path
                .to_str()
                .map(|p| p.to_string())
                .unwrap_or(defaults.profile_path),
            file_path,
            log_level,
        }
    }

    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.file_path)
    }
}
