use std::borrow::Cow;
use crate::errors::{RewriteResult, ResultExt};
use crate::structs::changeset::Changeset;
use crate::structs::engine_options::EngineOptions;
use crate::structs::file_task::FileTask;
use crate::structs::mutation::Mutation;
use crate::structs::mutation_result::MutationResult;

/// Applies changesets to file content, one line at a time.
pub struct MutationEngine {
    options: EngineOptions,
}

impl MutationEngine {
    /// Engine with fixed options, shared by every file task.
    pub const fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Options the engine was built with.
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Read, rewrite and (unless dry-run) write one file. Always yields exactly one result;
    /// I/O failures become a failed result instead of an error.
    pub async fn process(&self, mut task: FileTask) -> MutationResult {
        match self.try_process(&mut task).await {
            Ok(result) => result,
            Err(error) => MutationResult::failed(&task.path, &error),
        }
    }

    async fn try_process(&self, task: &mut FileTask) -> RewriteResult<MutationResult> {
        let content = tokio::fs::read(&task.path).await.with_file(&task.path, "read")?;
        let mutation = self.apply(&content, &mut task.changesets);

        if !mutation.changed {
            log::debug!("⏭️ {} no match", task.path.display());
            return Ok(MutationResult::no_match(&task.path));
        }

        if self.options.dry_run() {
            log::debug!("🧪 {} would change (dry run)", task.path.display());
            return Ok(MutationResult::dry_run(&task.path, &mutation.content));
        }

        tokio::fs::write(&task.path, &mutation.content).await.with_file(&task.path, "write")?;
        log::debug!("✅ {} rewritten ({} bytes)", task.path.display(), mutation.content.len());

        Ok(MutationResult::replaced(&task.path))
    }

    /// Single pass over `content`. The changesets carry this file's match state and must be
    /// fresh forks.
    pub fn apply(&self, content: &[u8], changesets: &mut [Changeset]) -> Mutation {
        let mut output = Vec::with_capacity(content.len());
        let mut changed = false;

        for raw_line in content.split_inclusive(|&b| b == b'\n') {
            let (line, terminator) = Self::split_terminator(raw_line);

            if let Some(line) = self.apply_line(line, changesets, &mut changed) {
                output.extend_from_slice(&line);
                output.extend_from_slice(terminator);
            }
        }

        if self.options.mode().ensures_line() {
            for changeset in changesets.iter().filter(|c| !c.match_found()) {
                if output.last().is_some_and(|&b| b != b'\n') {
                    output.push(b'\n');
                }
                output.extend_from_slice(changeset.replacement());
                output.push(b'\n');
                changed = true;
            }
        }

        Mutation { content: output, changed }
    }

    /// Runs every changeset over one line in order. `None` means the line is dropped.
    fn apply_line<'l>(&self, line: &'l [u8], changesets: &mut [Changeset], changed: &mut bool) -> Option<Cow<'l, [u8]>> {
        let mut line = Cow::Borrowed(line);

        for changeset in changesets.iter_mut() {
            if self.options.once() && changeset.match_found() {
                if self.options.once_remove_match() && changeset.matcher().is_match(&line) {
                    *changed = true;
                    return None;
                }
                continue;
            }

            if !changeset.matcher().is_match(&line) {
                continue;
            }

            line = if self.options.mode().replaces_whole_line() {
                Cow::Owned(changeset.replacement().to_vec())
            } else {
                let replaced = changeset
                    .matcher()
                    .replace_all(&line, changeset.replacement(), self.options.backreferences())
                    .into_owned();
                Cow::Owned(replaced)
            };

            changeset.mark_matched();
            *changed = true;
        }

        Some(line)
    }

    fn split_terminator(raw_line: &[u8]) -> (&[u8], &[u8]) {
        let content_len = raw_line
            .strip_suffix(b"\r\n".as_slice())
            .or_else(|| raw_line.strip_suffix(b"\n".as_slice()))
            .map_or(raw_line.len(), <[u8]>::len);

        raw_line.split_at(content_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::replace_mode::ReplaceMode;
    use crate::services::pattern_compiler::PatternCompiler;
    use crate::structs::pattern_options::PatternOptions;

    fn changesets(pairs: &[(&str, &str)], regex: bool) -> Vec<Changeset> {
        let options = PatternOptions { regex, ..Default::default() };
        pairs
            .iter()
            .map(|(search, replace)| Changeset::new(PatternCompiler::compile(search, &options).unwrap(), replace))
            .collect()
    }

    fn run(options: EngineOptions, content: &str, pairs: &[(&str, &str)]) -> (String, bool) {
        let mut changesets = changesets(pairs, false);
        let mutation = MutationEngine::new(options).apply(content.as_bytes(), &mut changesets);
        (String::from_utf8(mutation.content).unwrap(), mutation.changed)
    }

    fn mode(mode: ReplaceMode) -> EngineOptions {
        EngineOptions::new(mode, false, false, false, false)
    }

    #[test]
    fn substring_mode_replaces_only_the_match() {
        let (out, changed) = run(mode(ReplaceMode::Replace), "hello world\n", &[("world", "there")]);
        assert!(changed);
        assert_eq!(out, "hello there\n");
    }

    #[test]
    fn line_mode_replaces_the_whole_line() {
        let (out, changed) = run(mode(ReplaceMode::Line), "hello world\n", &[("world", "there")]);
        assert!(changed);
        assert_eq!(out, "there\n");
    }

    #[test]
    fn no_match_keeps_content_identical() {
        let input = "alpha\r\nbeta\n\ngamma";
        let (out, changed) = run(mode(ReplaceMode::Replace), input, &[("delta", "x")]);
        assert!(!changed);
        assert_eq!(out, input);
    }

    #[test]
    fn line_terminators_are_preserved() {
        let (out, _) = run(mode(ReplaceMode::Replace), "a1\r\na2\na3", &[("a", "b")]);
        assert_eq!(out, "b1\r\nb2\nb3");
    }

    #[test]
    fn lineinfile_appends_missing_lines_in_order() {
        let (out, changed) = run(
            mode(ReplaceMode::LineInFile),
            "keep\n",
            &[("first", "first=1"), ("second", "second=2")],
        );
        assert!(changed);
        assert_eq!(out, "keep\nfirst=1\nsecond=2\n");
    }

    #[test]
    fn lineinfile_replaces_existing_and_appends_only_absent() {
        let (out, _) = run(
            mode(ReplaceMode::LineInFile),
            "port=80\nhost=a\n",
            &[("port=", "port=8080"), ("debug=", "debug=true")],
        );
        assert_eq!(out, "port=8080\nhost=a\ndebug=true\n");
    }

    #[test]
    fn lineinfile_terminates_unterminated_last_line_before_appending() {
        let (out, _) = run(mode(ReplaceMode::LineInFile), "last", &[("missing", "added")]);
        assert_eq!(out, "last\nadded\n");
    }

    #[test]
    fn lineinfile_on_empty_file_appends() {
        let (out, changed) = run(mode(ReplaceMode::LineInFile), "", &[("x", "x=1")]);
        assert!(changed);
        assert_eq!(out, "x=1\n");
    }

    #[test]
    fn empty_file_without_lineinfile_is_unchanged() {
        let (out, changed) = run(mode(ReplaceMode::Line), "", &[("x", "x=1")]);
        assert!(!changed);
        assert!(out.is_empty());
    }

    #[test]
    fn once_rewrites_first_match_only() {
        let options = EngineOptions::new(ReplaceMode::Line, true, false, false, false);
        let (out, _) = run(options, "foo 1\nfoo 2\nfoo 3\n", &[("foo", "bar")]);
        assert_eq!(out, "bar\nfoo 2\nfoo 3\n");
    }

    #[test]
    fn once_remove_match_drops_later_matches() {
        let options = EngineOptions::new(ReplaceMode::Line, false, true, false, false);
        assert!(options.once());
        let (out, changed) = run(options, "foo 1\nother\nfoo 2\nfoo 3\n", &[("foo", "bar")]);
        assert!(changed);
        assert_eq!(out, "bar\nother\n");
    }

    #[test]
    fn later_changesets_see_rewritten_line() {
        let (out, _) = run(mode(ReplaceMode::Replace), "a\n", &[("a", "b"), ("b", "c")]);
        assert_eq!(out, "c\n");
    }

    #[test]
    fn dropped_line_stops_later_changesets() {
        let options = EngineOptions::new(ReplaceMode::Replace, false, true, false, false);
        let (out, _) = run(options, "x\nx\n", &[("x", "y"), ("x", "z")]);
        // first line: x -> y by the first changeset, second changeset no longer matches
        // second line: first changeset already matched and still matches, line dropped
        assert_eq!(out, "y\n");
    }

    #[test]
    fn backreferences_expand_in_substring_mode() {
        let mut changesets = changesets(&[(r"(\d+)px", "${1}em")], true);
        let engine = MutationEngine::new(EngineOptions::new(ReplaceMode::Replace, false, false, true, false));
        let mutation = engine.apply(b"width: 10px;\n", &mut changesets);
        assert_eq!(mutation.content, b"width: 10em;\n");
    }

    #[test]
    fn replacement_is_literal_without_backreferences() {
        let mut changesets = changesets(&[(r"(\d+)px", "${1}em")], true);
        let engine = MutationEngine::new(EngineOptions::default());
        let mutation = engine.apply(b"width: 10px;\n", &mut changesets);
        assert_eq!(mutation.content, b"width: ${1}em;\n");
    }

    #[test]
    fn forked_changesets_start_unmatched() {
        let mut templates = changesets(&[("a", "b")], false);
        templates[0].mark_matched();
        let forks = Changeset::fork_all(&templates);
        assert!(!forks[0].match_found());
    }
}
