use crate::config::constants::{DEFAULT_EXCLUDED_DIRS, DEFAULT_MAX_CONCURRENT_FILES};
use crate::enums::output_format::OutputFormat;

/// Serde `default = ...` functions for the config structs.
pub struct ConfigHelper;

impl ConfigHelper {
    /// Version control and build cache directories.
    pub fn default_excluded_dirs() -> Vec<String> {
        DEFAULT_EXCLUDED_DIRS.clone()
    }

    /// See [`DEFAULT_MAX_CONCURRENT_FILES`].
    pub const fn default_max_concurrent_files() -> usize {
        DEFAULT_MAX_CONCURRENT_FILES
    }

    /// Plain text.
    pub const fn default_format() -> OutputFormat {
        OutputFormat::Text
    }

    /// Empty input is an error.
    pub const fn default_ignore_empty() -> bool {
        false
    }
}
