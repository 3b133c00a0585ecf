use std::sync::Arc;
use crate::services::pattern_compiler::Matcher;

/// One search/replace rule plus its match state for a single file.
///
/// Not `Clone`. Copies come from [`Changeset::fork`], which resets the match state.
#[derive(Debug)]
pub struct Changeset {
    matcher: Arc<Matcher>,
    replacement: Arc<[u8]>,
    match_found: bool,
}

impl Changeset {
    /// Template changeset, not yet bound to a file.
    pub fn new(matcher: Matcher, replacement: &str) -> Self {
        Self {
            matcher: Arc::new(matcher),
            replacement: Arc::from(replacement.as_bytes()),
            match_found: false,
        }
    }

    /// Independent copy for one file. The compiled matcher is shared, the flag is not.
    pub fn fork(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
            replacement: Arc::clone(&self.replacement),
            match_found: false,
        }
    }

    /// [`Changeset::fork`] for every changeset, in order.
    pub fn fork_all(changesets: &[Self]) -> Vec<Self> {
        changesets.iter().map(Self::fork).collect()
    }

    /// Compiled search term.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Replacement bytes as given on the command line.
    pub fn replacement(&self) -> &[u8] {
        &self.replacement
    }

    /// Whether this changeset has matched a line of the current file.
    pub const fn match_found(&self) -> bool {
        self.match_found
    }

    /// Record a match in the current file.
    pub fn mark_matched(&mut self) {
        self.match_found = true;
    }
}
