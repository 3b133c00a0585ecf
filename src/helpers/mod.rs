/// Default values for config fields.
pub mod config_helper;
