/// Whole config file.
pub mod config;
/// `[global]` section.
pub mod global_config;
/// `[walk]` section.
pub mod walk_config;
