//! Totals for a whole run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::mutation_status::MutationStatus;
use crate::structs::mutation_result::MutationResult;

/// Counts per status plus run timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Results received
    pub files_processed: usize,
    /// Files written
    pub replaced: usize,
    /// Files without a match
    pub unchanged: usize,
    /// Files that would change
    pub dry_run: usize,
    /// Files that could not be read or written
    pub failed: usize,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Set by [`RunSummary::finish`]
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunSummary {
    /// Empty summary stamped with the current time.
    pub fn start() -> Self {
        Self {
            files_processed: 0,
            replaced: 0,
            unchanged: 0,
            dry_run: 0,
            failed: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Count one result.
    pub fn record(&mut self, result: &MutationResult) {
        self.files_processed += 1;
        match result.status {
            MutationStatus::Replaced => self.replaced += 1,
            MutationStatus::NoMatch => self.unchanged += 1,
            MutationStatus::DryRun => self.dry_run += 1,
            MutationStatus::Failed => self.failed += 1,
        }
    }

    /// Stamp the end time.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Any file failed.
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
