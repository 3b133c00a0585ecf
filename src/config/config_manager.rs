use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{RewriteError, RewriteResult};
use crate::structs::config::config::Config;

/// Finds, reads and validates the config file.
pub struct ConfigManager;

impl ConfigManager {
    /// `<config dir>/rewrite/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config file. An explicit path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> RewriteResult<Config> {
        let config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path)?,
                _ => {
                    log::debug!("no config file found, using built-in defaults");
                    Config::default()
                }
            },
        };

        Self::validate_config(&config).map_err(|errors| RewriteError::config_error(&errors.join("; "), None))?;
        Ok(config)
    }

    /// Read and parse one file. Does not validate.
    pub fn load_from(path: &Path) -> RewriteResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| RewriteError::config_file_error(path, &e.to_string()))?;
        Self::parse(&content).map_err(|e| RewriteError::config_file_error(path, &e.to_string()))
    }

    /// Parse TOML text; missing sections and keys take their defaults.
    pub fn parse(content: &str) -> RewriteResult<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Every problem found, not only the first.
    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.global.max_concurrent_files == 0 {
            errors.push("global.max_concurrent_files must be at least 1".to_string());
        }

        for name in config.walk.all_excluded_dirs() {
            if name.is_empty() || name.contains('/') {
                errors.push(format!("walk: '{name}' is not a directory name"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
