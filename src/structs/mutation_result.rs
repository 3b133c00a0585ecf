//! Per-file outcome reported back to the command runner.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::enums::mutation_status::MutationStatus;
use crate::errors::RewriteError;

/// Exactly one per processed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResult {
    /// File the result belongs to
    pub path: PathBuf,
    /// Message, would-be content for a dry run, or error text
    pub output: String,
    /// Outcome
    pub status: MutationStatus,
}

impl MutationResult {
    /// Content changed and was written.
    pub fn replaced(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            output: format!("{} found and replaced match", path.display()),
            status: MutationStatus::Replaced,
        }
    }

    /// Nothing matched.
    pub fn no_match(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            output: format!("{} no match", path.display()),
            status: MutationStatus::NoMatch,
        }
    }

    /// Content would change; carries the new content for display.
    pub fn dry_run(path: &Path, content: &[u8]) -> Self {
        Self {
            path: path.to_path_buf(),
            output: String::from_utf8_lossy(content).into_owned(),
            status: MutationStatus::DryRun,
        }
    }

    /// Read or write failed.
    pub fn failed(path: &Path, error: &RewriteError) -> Self {
        Self {
            path: path.to_path_buf(),
            output: error.to_string(),
            status: MutationStatus::Failed,
        }
    }

    /// Anything but a failure.
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
