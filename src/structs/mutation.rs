//! Rewritten file content.

/// Output of one pass of the engine over a file's content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mutation {
    /// Content after every changeset ran
    pub content: Vec<u8>,
    /// Whether any line was replaced, dropped or appended
    pub changed: bool,
}
