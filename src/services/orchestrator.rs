use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinHandle;
use crate::config::constants::RESULT_CHANNEL_CAPACITY;
use crate::errors::{RewriteError, RewriteResult};
use crate::services::mutation_engine::MutationEngine;
use crate::structs::changeset::Changeset;
use crate::structs::file_task::FileTask;
use crate::structs::mutation_result::MutationResult;

/// Runs one engine task per file with bounded concurrency.
pub struct Orchestrator {
    engine: Arc<MutationEngine>,
    max_concurrent_files: usize,
}

impl Orchestrator {
    /// `max_concurrent_files` below 1 is raised to 1.
    pub fn new(engine: MutationEngine, max_concurrent_files: usize) -> Self {
        Self {
            engine: Arc::new(engine),
            max_concurrent_files: max_concurrent_files.max(1),
        }
    }

    /// Fails with [`RewriteError::NoInput`] for an empty file list unless empty input is ignored.
    /// Returns whether there is anything to process.
    pub fn ensure_input(files: &[PathBuf], ignore_empty: bool) -> RewriteResult<bool> {
        if !files.is_empty() {
            return Ok(true);
        }

        if ignore_empty {
            log::info!("📭 No files found, requested to ignore this");
            Ok(false)
        } else {
            Err(RewriteError::NoInput)
        }
    }

    /// Process every file and collect the results in completion order.
    pub async fn run(&self, files: Vec<PathBuf>, templates: &[Changeset], ignore_empty: bool) -> RewriteResult<Vec<MutationResult>> {
        if !Self::ensure_input(&files, ignore_empty)? {
            return Ok(Vec::new());
        }

        let mut receiver = self.spawn(files, templates);
        let mut results = Vec::new();
        while let Some(result) = receiver.recv().await {
            results.push(result);
        }

        Ok(results)
    }

    /// Dispatch one task per file and return the result stream.
    ///
    /// Every task gets its own fork of `templates`. The receiver yields exactly one result per
    /// distinct file and returns `None` once every task has reported.
    pub fn spawn(&self, files: Vec<PathBuf>, templates: &[Changeset]) -> mpsc::Receiver<MutationResult> {
        let (sender, receiver) = mpsc::channel(RESULT_CHANNEL_CAPACITY);
        let templates = Changeset::fork_all(templates);
        let engine = Arc::clone(&self.engine);
        let max_concurrent_files = self.max_concurrent_files;
        let semaphore = Arc::new(Semaphore::new(max_concurrent_files));

        tokio::spawn(async move {
            let paths = Self::unique_paths(files).await;
            log::info!("🚀 Processing {} files (max {} at once)", paths.len(), max_concurrent_files);

            let mut handles: Vec<(PathBuf, JoinHandle<()>)> = Vec::with_capacity(paths.len());

            for path in paths {
                let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                    break;
                };
                let task = FileTask::new(path.clone(), &templates);
                let engine = Arc::clone(&engine);
                let sender = sender.clone();

                let handle = tokio::spawn(async move {
                    let _permit = permit;
                    let result = engine.process(task).await;
                    if sender.send(result).await.is_err() {
                        log::debug!("result receiver dropped before all files reported");
                    }
                });
                handles.push((path, handle));
            }

            Self::supervise(handles, &sender).await;
        });

        receiver
    }

    /// Wait for every task. A task that panicked reports a failed result for its path.
    async fn supervise(handles: Vec<(PathBuf, JoinHandle<()>)>, sender: &mpsc::Sender<MutationResult>) {
        for (path, handle) in handles {
            if let Err(e) = handle.await {
                log::error!("❌ Task for {} crashed: {}", path.display(), e);
                let error = RewriteError::system_error("file task", &e.to_string());
                let _ = sender.send(MutationResult::failed(&path, &error)).await;
            }
        }
    }

    /// Drops every path that names a file already in the list, keeping the first spelling.
    /// Paths that cannot be canonicalized are compared as given.
    pub async fn unique_paths(files: Vec<PathBuf>) -> Vec<PathBuf> {
        let mut seen = HashSet::with_capacity(files.len());
        let mut unique = Vec::with_capacity(files.len());

        for path in files {
            let key = tokio::fs::canonicalize(&path).await.unwrap_or_else(|_| path.clone());
            if seen.insert(key) {
                unique.push(path);
            } else {
                log::debug!("skipping duplicate input {}", path.display());
            }
        }

        unique
    }
}
