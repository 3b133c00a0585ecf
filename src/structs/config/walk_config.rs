use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Directory walk settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    /// Replaces the built-in list when set
    #[serde(default = "ConfigHelper::default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Added on top of `excluded_dirs`
    #[serde(default)]
    pub extra_excluded_dirs: Vec<String>,
}

impl WalkConfig {
    /// `excluded_dirs` followed by `extra_excluded_dirs`.
    pub fn all_excluded_dirs(&self) -> Vec<String> {
        self.excluded_dirs
            .iter()
            .chain(&self.extra_excluded_dirs)
            .cloned()
            .collect()
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: ConfigHelper::default_excluded_dirs(),
            extra_excluded_dirs: Vec::new(),
        }
    }
}
