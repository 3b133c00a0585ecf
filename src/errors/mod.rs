use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong in a run.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum RewriteError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    /// Invalid flags or config values
    Configuration {
        /// What is wrong
        message: String,
        /// How to fix it, when there is an obvious fix
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    /// Config file could not be read or parsed
    ConfigurationFile {
        /// Config file location
        path: String,
        /// Underlying I/O or TOML error
        reason: String,
    },
    #[error("No files specified")]
    /// No files given and empty input is not ignored
    NoInput,

    // Pattern errors
    #[error("Invalid pattern '{pattern}': {reason}")]
    /// Search term or path regex does not compile
    Pattern {
        /// The term as the user wrote it
        pattern: String,
        /// Compiler error
        reason: String,
    },

    // File operation errors
    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    /// Reading or writing one file failed
    FileOperation {
        /// File the operation ran on
        file_path: String,
        /// `read` or `write`
        operation: String,
        /// Underlying I/O error
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    /// Anything outside the categories above
    System {
        /// What was being done
        operation: String,
        /// Underlying error
        reason: String,
    },
}

impl RewriteError {
    /// Shorthand for [`RewriteError::Configuration`].
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    /// Shorthand for [`RewriteError::ConfigurationFile`].
    pub fn config_file_error(path: &Path, reason: &str) -> Self {
        Self::ConfigurationFile {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for [`RewriteError::Pattern`].
    pub fn pattern_error(pattern: &str, reason: &str) -> Self {
        Self::Pattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for [`RewriteError::FileOperation`].
    pub fn file_error(file_path: &Path, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            file_path: file_path.display().to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for [`RewriteError::System`].
    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::System {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Errors caused by the command line itself; the caller prints usage text after them.
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::NoInput)
    }

    /// How serious the error is, shown as a colored marker.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::System { .. } => ErrorSeverity::Critical,
            Self::FileOperation { .. } | Self::ConfigurationFile { .. } => ErrorSeverity::High,
            Self::Pattern { .. } => ErrorSeverity::Medium,
            Self::Configuration { .. } | Self::NoInput => ErrorSeverity::Low,
        }
    }

    /// Message for stderr, with a hint where one helps.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { message, suggestion } => {
                let mut msg = message.clone();
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFile { .. } => {
                format!("{self}\n💡 Check file permissions and TOML syntax")
            }
            Self::NoInput => {
                format!("{self}\n💡 Pass files as arguments, use --path, or add --ignore-empty")
            }
            Self::Pattern { .. } => {
                format!("{self}\n💡 Use --regex only for regular expressions, literal terms need no escaping")
            }
            Self::FileOperation { .. } | Self::System { .. } => self.to_string(),
        }
    }

    /// Debug representation for the log.
    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Usage mistakes
    Low,
    /// Bad patterns
    Medium,
    /// File and config file failures
    High,
    /// Everything else
    Critical,
}

impl ErrorSeverity {
    /// Colored marker printed before the message.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    /// Upper-case label used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user facing message to stderr.
    pub fn handle_error(error: &RewriteError) {
        let severity = error.severity();
        log::debug!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("Error: {} {}", severity.emoji(), error.user_message());
    }
}

/// Extension trait for Result to attach the failing operation
pub trait ResultExt<T> {
    /// Map to [`RewriteError::System`] for `operation`.
    fn with_operation(self, operation: &str) -> RewriteResult<T>;
    /// Map to [`RewriteError::FileOperation`] for `operation` on `path`.
    fn with_file(self, path: &Path, operation: &str) -> RewriteResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_operation(self, operation: &str) -> RewriteResult<T> {
        self.map_err(|e| RewriteError::system_error(operation, &e.to_string()))
    }

    fn with_file(self, path: &Path, operation: &str) -> RewriteResult<T> {
        self.map_err(|e| RewriteError::file_error(path, operation, &e.to_string()))
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for RewriteError {
    fn from(error: std::io::Error) -> Self {
        Self::System {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for RewriteError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("invalid TOML: {}", error.message()),
            suggestion: None,
        }
    }
}

impl From<globset::Error> for RewriteError {
    fn from(error: globset::Error) -> Self {
        Self::Configuration {
            message: format!("invalid path pattern: {error}"),
            suggestion: Some("Path patterns are shell globs matched against the file name, e.g. '*.conf'".to_string()),
        }
    }
}
