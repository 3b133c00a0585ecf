//! Filters applied while walking a directory tree.

/// File discovery filters.
#[derive(Debug, Clone, Default)]
pub struct EnumeratorOptions {
    /// Glob matched against the file name only
    pub name_glob: Option<String>,
    /// Regex matched against the full path
    pub path_regex: Option<String>,
    /// Directory names that are never descended into
    pub excluded_dirs: Vec<String>,
}
