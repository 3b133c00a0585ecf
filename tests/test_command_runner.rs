//! End-to-end runs through the command runner.

use std::path::{Path, PathBuf};
use clap::Parser;
use tempfile::TempDir;

use rewrite_cli::config::constants::{EXIT_FILE_FAILURES, EXIT_SUCCESS, EXIT_USAGE_ERROR};
use rewrite_cli::errors::RewriteError;
use rewrite_cli::structs::cli::Cli;
use rewrite_cli::workers::command_runner::CommandRunner;

use crate::common::{read_file, write_file};

struct Workspace {
    dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new(config: &str) -> Self {
        let dir = TempDir::new().expect("Create temp dir");
        let config = write_file(dir.path(), "settings/config.toml", config);
        Self { dir, config }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn cli(&self, args: &[&str]) -> Cli {
        let config = self.config.to_string_lossy().into_owned();
        let mut argv = vec!["rewrite", "--config", config.as_str()];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }
}

#[tokio::test]
async fn test_replace_under_path_with_glob() {
    let ws = Workspace::new("[walk]\nextra_excluded_dirs = [\"settings\"]\n");
    let txt = write_file(ws.root(), "src/a.txt", "hello world\n");
    let md = write_file(ws.root(), "src/b.md", "hello world\n");
    let hidden = write_file(ws.root(), ".git/c.txt", "hello world\n");
    let root = ws.root().to_string_lossy().into_owned();

    let cli = ws.cli(&["-s", "world", "-r", "there", "--path", &root, "--path-pattern", "*.txt"]);
    let result = CommandRunner::new().run_command(cli).await;

    let summary = result.as_ref().expect("Run succeeds");
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.replaced, 1);
    assert_eq!(CommandRunner::exit_code(&result), EXIT_SUCCESS);
    assert_eq!(read_file(&txt), "hello there\n");
    assert_eq!(read_file(&md), "hello world\n");
    assert_eq!(read_file(&hidden), "hello world\n");
}

#[tokio::test]
async fn test_positional_files_and_multiple_pairs() {
    let ws = Workspace::new("");
    let file = write_file(ws.root(), "app.ini", "port=80\nhost=old\n");
    let path = file.to_string_lossy().into_owned();

    let cli = ws.cli(&[
        "--mode", "lineinfile", "-s", "^port=", "-r", "port=8080", "-s", "^debug=", "-r", "debug=true", "--regex", &path,
    ]);
    let result = CommandRunner::new().run_command(cli).await;

    assert_eq!(CommandRunner::exit_code(&result), EXIT_SUCCESS);
    assert_eq!(read_file(&file), "port=8080\nhost=old\ndebug=true\n");
}

#[tokio::test]
async fn test_unequal_pairs_touch_nothing() {
    let ws = Workspace::new("");
    let file = write_file(ws.root(), "a.txt", "a\n");
    let path = file.to_string_lossy().into_owned();

    let cli = ws.cli(&["-s", "a", "-s", "b", "-r", "x", &path]);
    let result = CommandRunner::new().run_command(cli).await;

    assert!(matches!(result, Err(RewriteError::Configuration { .. })));
    assert_eq!(CommandRunner::exit_code(&result), EXIT_USAGE_ERROR);
    assert_eq!(read_file(&file), "a\n");
}

#[tokio::test]
async fn test_invalid_regex_touches_nothing() {
    let ws = Workspace::new("");
    let file = write_file(ws.root(), "a.txt", "(a\n");
    let path = file.to_string_lossy().into_owned();

    let cli = ws.cli(&["-s", "(a", "-r", "x", "--regex", &path]);
    let result = CommandRunner::new().run_command(cli).await;

    assert!(matches!(result, Err(RewriteError::Pattern { .. })));
    assert_eq!(CommandRunner::exit_code(&result), EXIT_USAGE_ERROR);
    assert_eq!(read_file(&file), "(a\n");
}

#[tokio::test]
async fn test_no_files_found() {
    let ws = Workspace::new("");
    let empty = ws.root().join("empty");
    std::fs::create_dir_all(&empty).expect("Create empty dir");
    let root = empty.to_string_lossy().into_owned();

    let result = CommandRunner::new().run_command(ws.cli(&["-s", "a", "-r", "b", "--path", &root])).await;
    assert!(matches!(result, Err(RewriteError::NoInput)));
    assert_eq!(CommandRunner::exit_code(&result), EXIT_USAGE_ERROR);

    let result = CommandRunner::new()
        .run_command(ws.cli(&["-s", "a", "-r", "b", "--path", &root, "--ignore-empty"]))
        .await;
    let summary = result.as_ref().expect("Empty input ignored");
    assert_eq!(summary.files_processed, 0);
    assert_eq!(CommandRunner::exit_code(&result), EXIT_SUCCESS);
}

#[tokio::test]
async fn test_ignore_empty_from_config() {
    let ws = Workspace::new("[global]\nignore_empty = true\n");
    let empty = ws.root().join("empty");
    std::fs::create_dir_all(&empty).expect("Create empty dir");
    let root = empty.to_string_lossy().into_owned();

    let result = CommandRunner::new().run_command(ws.cli(&["-s", "a", "-r", "b", "--path", &root])).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_missing_file_gives_failure_exit_code() {
    let ws = Workspace::new("");
    let good = write_file(ws.root(), "good.txt", "abc\n");
    let good_path = good.to_string_lossy().into_owned();
    let missing = ws.root().join("gone.txt").to_string_lossy().into_owned();

    let cli = ws.cli(&["-s", "b", "-r", "B", &good_path, &missing, "--format", "json"]);
    let result = CommandRunner::new().run_command(cli).await;

    let summary = result.as_ref().expect("Run completes");
    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.replaced, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(CommandRunner::exit_code(&result), EXIT_FILE_FAILURES);
    assert_eq!(read_file(&good), "aBc\n");
}

#[tokio::test]
async fn test_dry_run_reports_without_writing() {
    let ws = Workspace::new("");
    let file = write_file(ws.root(), "a.txt", "one\ntwo\n");
    let path = file.to_string_lossy().into_owned();

    let cli = ws.cli(&["-s", "two", "-r", "2", "--dry-run", "-v", &path]);
    let result = CommandRunner::new().run_command(cli).await;

    let summary = result.as_ref().expect("Run succeeds");
    assert_eq!(summary.dry_run, 1);
    assert_eq!(summary.replaced, 0);
    assert_eq!(read_file(&file), "one\ntwo\n");
}

#[tokio::test]
async fn test_zero_concurrency_is_rejected() {
    let ws = Workspace::new("");
    let file = write_file(ws.root(), "a.txt", "a\n");
    let path = file.to_string_lossy().into_owned();

    let result = CommandRunner::new()
        .run_command(ws.cli(&["-s", "a", "-r", "b", "--concurrency", "0", &path]))
        .await;

    assert!(matches!(result, Err(RewriteError::Configuration { .. })));
    assert_eq!(read_file(&file), "a\n");
}

#[tokio::test]
async fn test_broken_config_file_is_a_usage_error() {
    let ws = Workspace::new("[global]\nmax_concurrent_files = \"lots\"\n");
    let file = write_file(ws.root(), "a.txt", "a\n");
    let path = file.to_string_lossy().into_owned();

    let result = CommandRunner::new().run_command(ws.cli(&["-s", "a", "-r", "b", &path])).await;

    let err = result.as_ref().unwrap_err();
    assert!(matches!(err, RewriteError::ConfigurationFile { .. }));
    assert_eq!(CommandRunner::exit_code(&result), EXIT_USAGE_ERROR);
}
