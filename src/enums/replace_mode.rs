use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What a match replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Replace the matched term inside the line
    #[default]
    Replace,
    /// Replace the whole matching line with the replacement
    Line,
    /// Replace the whole matching line, append the replacement if no line matched
    #[value(name = "lineinfile")]
    #[serde(rename = "lineinfile")]
    LineInFile,
}

impl ReplaceMode {
    /// `line` and `lineinfile`.
    pub const fn replaces_whole_line(self) -> bool {
        matches!(self, Self::Line | Self::LineInFile)
    }

    /// Unmatched replacements are appended at the end of the file.
    pub const fn ensures_line(self) -> bool {
        matches!(self, Self::LineInFile)
    }
}
