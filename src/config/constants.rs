use once_cell::sync::Lazy;

/// Files processed at the same time unless configured otherwise.
pub const DEFAULT_MAX_CONCURRENT_FILES: usize = 64;
/// Results buffered between the file tasks and the reporter.
pub const RESULT_CHANNEL_CAPACITY: usize = 256;

/// Directory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "rewrite";
/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Every file processed.
pub const EXIT_SUCCESS: u8 = 0;
/// Bad flags, config or pattern. No file was touched.
pub const EXIT_USAGE_ERROR: u8 = 1;
/// At least one file failed, the rest were processed.
pub const EXIT_FILE_FAILURES: u8 = 2;

/// Version control and build cache directories that are never walked.
pub static DEFAULT_EXCLUDED_DIRS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "autom4te.cache", "blib", "_build", ".bzr", ".cdv", "cover_db", "CVS", "_darcs",
        "~.dep", "~.dot", ".git", ".hg", "~.nib", ".pc", "~.plst", "RCS", "SCCS",
        "_sgbak", ".svn", "_obj", ".idea",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
});

/// Limits for the up-front DFA behind leftmost-longest matching. Patterns that exceed them
/// are matched with a lazy DFA instead.
pub const POSIX_DFA_SIZE_LIMIT: usize = 2 * (1 << 20);
/// Heap used while building that DFA.
pub const POSIX_DETERMINIZE_SIZE_LIMIT: usize = 2 * (1 << 20);
/// Transition cache of the lazy DFA.
pub const POSIX_LAZY_CACHE_CAPACITY: usize = 2 * (1 << 20);
