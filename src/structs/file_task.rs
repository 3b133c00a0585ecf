//! Unit of work handed to one engine task.

use std::path::PathBuf;
use crate::structs::changeset::Changeset;

/// One file and the changesets forked for it.
#[derive(Debug)]
pub struct FileTask {
    /// File to rewrite
    pub path: PathBuf,
    /// This file's own forks of the changesets
    pub changesets: Vec<Changeset>,
}

impl FileTask {
    /// Fork `templates` for `path`.
    pub fn new(path: PathBuf, templates: &[Changeset]) -> Self {
        Self {
            path,
            changesets: Changeset::fork_all(templates),
        }
    }
}
