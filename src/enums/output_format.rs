use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Titled blocks in verbose mode, nothing otherwise
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
