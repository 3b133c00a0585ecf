use serde::{Deserialize, Serialize};
use crate::structs::config::global_config::GlobalConfig;
use crate::structs::config::walk_config::WalkConfig;

/// Contents of `config.toml`.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// `[global]`
    #[serde(default)]
    pub global: GlobalConfig,

    /// `[walk]`
    #[serde(default)]
    pub walk: WalkConfig,
}
