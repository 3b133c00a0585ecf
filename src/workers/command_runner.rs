use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{EXIT_FILE_FAILURES, EXIT_SUCCESS, EXIT_USAGE_ERROR};
use crate::errors::{ErrorHandler, RewriteError, RewriteResult, ResultExt};
use crate::logger::result_logger::ResultLogger;
use crate::services::file_enumerator::FileEnumerator;
use crate::services::mutation_engine::MutationEngine;
use crate::services::orchestrator::Orchestrator;
use crate::services::pattern_compiler::PatternCompiler;
use crate::structs::changeset::Changeset;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use crate::structs::engine_options::EngineOptions;
use crate::structs::enumerator_options::EnumeratorOptions;
use crate::structs::pattern_options::PatternOptions;
use crate::structs::run_summary::RunSummary;

/// Runs the replace command and maps its outcome to an exit code.
pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    /// Runner with no timing started.
    pub const fn new() -> Self {
        Self { start_time: None }
    }

    /// Run the whole command and log how long it took.
    pub async fn run_command(&mut self, cli: Cli) -> RewriteResult<RunSummary> {
        self.start_time = Some(Instant::now());

        let result = self.replace_command(cli).await;

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    /// Process exit code for a finished run. Reports the error when there is one.
    pub fn exit_code(result: &RewriteResult<RunSummary>) -> u8 {
        match result {
            Ok(summary) if summary.has_failures() => EXIT_FILE_FAILURES,
            Ok(_) => EXIT_SUCCESS,
            Err(error) => {
                ErrorHandler::handle_error(error);
                EXIT_USAGE_ERROR
            }
        }
    }

    async fn replace_command(&self, cli: Cli) -> RewriteResult<RunSummary> {
        let config = ConfigManager::load(cli.config.as_deref())?;
        let max_concurrent_files = Self::max_concurrent_files(&cli, &config)?;

        let pattern_options = PatternOptions {
            regex: cli.regex,
            ignore_case: cli.ignore_case,
            posix: cli.regex_posix,
        };
        let changesets = Self::build_changesets(&cli.search, &cli.replace, &pattern_options)?;

        let enumerator_options = EnumeratorOptions {
            name_glob: cli.path_pattern.clone(),
            path_regex: cli.path_regex.clone(),
            excluded_dirs: config.walk.all_excluded_dirs(),
        };
        let files = Self::collect_files(cli.files.clone(), cli.path.as_deref(), &enumerator_options)?;

        let ignore_empty = cli.ignore_empty || config.global.ignore_empty;
        let mut summary = RunSummary::start();
        if !Orchestrator::ensure_input(&files, ignore_empty)? {
            summary.finish();
            return Ok(summary);
        }

        let engine = MutationEngine::new(EngineOptions::new(
            cli.mode,
            cli.once,
            cli.once_remove_match,
            cli.regex_backrefs,
            cli.dry_run,
        ));
        let orchestrator = Orchestrator::new(engine, max_concurrent_files);
        let mut reporter = ResultLogger::stdout(cli.format.unwrap_or(config.global.format), cli.verbose);

        let mut receiver = orchestrator.spawn(files, &changesets);
        while let Some(result) = receiver.recv().await {
            summary.record(&result);
            reporter.print_result(&result).with_operation("write report")?;
        }

        summary.finish();
        reporter.print_summary(&summary).with_operation("write report")?;

        Ok(summary)
    }

    /// One changeset per search/replace pair, in the order given.
    pub fn build_changesets(search: &[String], replace: &[String], options: &PatternOptions) -> RewriteResult<Vec<Changeset>> {
        if search.len() != replace.len() {
            return Err(RewriteError::config_error(
                "Unequal numbers of search or replace options",
                Some("Pass exactly one --replace for every --search"),
            ));
        }

        if search.is_empty() {
            return Err(RewriteError::config_error("No search term specified", Some("Add at least one --search/--replace pair")));
        }

        search
            .iter()
            .zip(replace)
            .map(|(term, replacement)| PatternCompiler::compile(term, options).map(|matcher| Changeset::new(matcher, replacement)))
            .collect()
    }

    /// Positional files first, then everything found under `path`.
    pub fn collect_files(mut files: Vec<PathBuf>, path: Option<&Path>, options: &EnumeratorOptions) -> RewriteResult<Vec<PathBuf>> {
        if let Some(root) = path {
            let enumerator = FileEnumerator::new(options)?;
            files.extend(enumerator.enumerate(root));
        }

        Ok(files)
    }

    fn max_concurrent_files(cli: &Cli, config: &Config) -> RewriteResult<usize> {
        match cli.concurrency {
            Some(0) => Err(RewriteError::config_error("--concurrency must be at least 1", None)),
            Some(n) => Ok(n),
            None => Ok(config.global.max_concurrent_files),
        }
    }
}
