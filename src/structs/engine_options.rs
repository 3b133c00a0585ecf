//! Options fixed for the lifetime of a mutation engine.

use serde::Serialize;
use crate::enums::replace_mode::ReplaceMode;

/// Immutable settings for the mutation engine. Built only through [`EngineOptions::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EngineOptions {
    mode: ReplaceMode,
    once: bool,
    once_remove_match: bool,
    backreferences: bool,
    dry_run: bool,
}

impl EngineOptions {
    /// `once_remove_match` switches `once` on as well.
    pub const fn new(mode: ReplaceMode, once: bool, once_remove_match: bool, backreferences: bool, dry_run: bool) -> Self {
        Self {
            mode,
            // once_remove_match implies once
            once: once || once_remove_match,
            once_remove_match,
            backreferences,
            dry_run,
        }
    }

    /// What a match replaces.
    pub const fn mode(&self) -> ReplaceMode {
        self.mode
    }

    /// Each changeset rewrites at most its first matching line.
    pub const fn once(&self) -> bool {
        self.once
    }

    /// Lines that still match after the first rewrite are dropped.
    pub const fn once_remove_match(&self) -> bool {
        self.once_remove_match
    }

    /// Replacements may reference capture groups.
    pub const fn backreferences(&self) -> bool {
        self.backreferences
    }

    /// Compute the result without writing it back.
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }
}
