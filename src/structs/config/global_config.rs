use serde::{Deserialize, Serialize};
use crate::enums::output_format::OutputFormat;
use crate::helpers::config_helper::ConfigHelper;

/// Run-wide settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Files processed at the same time
    #[serde(default = "ConfigHelper::default_max_concurrent_files")]
    pub max_concurrent_files: usize,

    /// Treat an empty file list as success
    #[serde(default = "ConfigHelper::default_ignore_empty")]
    pub ignore_empty: bool,

    /// Report format when `--format` is not given
    #[serde(default = "ConfigHelper::default_format")]
    pub format: OutputFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_concurrent_files: ConfigHelper::default_max_concurrent_files(),
            ignore_empty: ConfigHelper::default_ignore_empty(),
            format: ConfigHelper::default_format(),
        }
    }
}
