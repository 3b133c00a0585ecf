use std::collections::HashSet;
use std::path::{Path, PathBuf};
use globset::{Glob, GlobMatcher};
use regex::Regex;
use walkdir::{DirEntry, WalkDir};
use crate::errors::{RewriteError, RewriteResult};
use crate::structs::enumerator_options::EnumeratorOptions;

/// Walks a directory tree and yields the files that pass the filters.
pub struct FileEnumerator {
    name_glob: Option<GlobMatcher>,
    path_regex: Option<Regex>,
    excluded_dirs: HashSet<String>,
}

impl FileEnumerator {
    /// Compile the filters. An invalid glob is a configuration error, an invalid path regex a
    /// pattern error.
    pub fn new(options: &EnumeratorOptions) -> RewriteResult<Self> {
        let name_glob = options
            .name_glob
            .as_deref()
            .map(|pattern| Glob::new(pattern).map(|glob| glob.compile_matcher()))
            .transpose()?;

        let path_regex = options
            .path_regex
            .as_deref()
            .map(|pattern| Regex::new(pattern).map_err(|e| RewriteError::pattern_error(pattern, &e.to_string())))
            .transpose()?;

        Ok(Self {
            name_glob,
            path_regex,
            excluded_dirs: options.excluded_dirs.iter().cloned().collect(),
        })
    }

    /// All regular files below `root` that pass the filters, in traversal order.
    pub fn enumerate(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded_dir(entry));

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() && self.accepts(entry.path()) => {
                    files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => log::warn!("⚠️ Skipping unreadable entry under {}: {}", root.display(), e),
            }
        }

        log::info!("📁 Found {} files under {}", files.len(), root.display());
        files
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.excluded_dirs.contains(name))
    }

    fn accepts(&self, path: &Path) -> bool {
        if let Some(glob) = &self.name_glob {
            let Some(file_name) = path.file_name() else {
                return false;
            };
            if !glob.is_match(file_name) {
                return false;
            }
        }

        if let Some(regex) = &self.path_regex {
            if !regex.is_match(&path.to_string_lossy()) {
                return false;
            }
        }

        true
    }
}
