use std::path::PathBuf;
use clap::Parser;
use crate::enums::output_format::OutputFormat;
use crate::enums::replace_mode::ReplaceMode;

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[clap(name = "rewrite")]
#[clap(version, about = "Search and replace across many files", long_about = None)]
pub struct Cli {
    /// replacement mode - replace: replace match with term; line: replace line with term;
    /// lineinfile: replace line with term or if not found append term to file
    #[clap(short, long, value_enum, default_value_t = ReplaceMode::Replace)]
    pub mode: ReplaceMode,

    /// search term
    #[clap(short, long, required = true)]
    pub search: Vec<String>,

    /// replacement term
    #[clap(short, long, required = true)]
    pub replace: Vec<String>,

    /// ignore pattern case
    #[clap(short, long)]
    pub ignore_case: bool,

    /// replace search term only once in a file
    #[clap(long)]
    pub once: bool,

    /// replace search term only once in a file and drop later matching lines
    #[clap(long)]
    pub once_remove_match: bool,

    /// treat pattern as regex
    #[clap(long)]
    pub regex: bool,

    /// enable backreferences in replace term
    #[clap(long = "regex-backrefs")]
    pub regex_backrefs: bool,

    /// use leftmost-longest (POSIX) matching
    #[clap(long)]
    pub regex_posix: bool,

    /// use files in this path
    #[clap(long)]
    pub path: Option<PathBuf>,

    /// file pattern (* for wildcard, only basename of file)
    #[clap(long)]
    pub path_pattern: Option<String>,

    /// file pattern (regex, full path)
    #[clap(long)]
    pub path_regex: Option<String>,

    /// ignore empty file list, otherwise this will result in an error
    #[clap(long)]
    pub ignore_empty: bool,

    /// verbose mode
    #[clap(short, long)]
    pub verbose: bool,

    /// dry run mode
    #[clap(long)]
    pub dry_run: bool,

    /// maximum number of files processed at the same time
    #[clap(long)]
    pub concurrency: Option<usize>,

    /// report format
    #[clap(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// configuration file (defaults to <config dir>/rewrite/config.toml)
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// files to process
    pub files: Vec<PathBuf>,
}
