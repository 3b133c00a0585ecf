use serde::{Deserialize, Serialize};

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationStatus {
    /// Content changed and written
    Replaced,
    /// Nothing matched, file untouched
    NoMatch,
    /// Content would change, write withheld
    DryRun,
    /// Read or write failed
    Failed,
}

impl MutationStatus {
    /// Everything except [`MutationStatus::Failed`].
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::Failed)
    }
}
