/// Locating and parsing `config.toml`.
pub mod config_manager;
/// Fixed defaults and exit codes.
pub mod constants;
