use std::fs;
use std::path::{Path, PathBuf};
use rewrite_cli::services::pattern_compiler::PatternCompiler;
use rewrite_cli::structs::changeset::Changeset;
use rewrite_cli::structs::pattern_options::PatternOptions;

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Create parent dir");
    }
    fs::write(&path, content).expect("Write test file");
    path
}

pub fn read_file(path: &Path) -> String {
    fs::read_to_string(path).expect("Read test file")
}

pub fn literal_changesets(pairs: &[(&str, &str)]) -> Vec<Changeset> {
    changesets(pairs, &PatternOptions::default())
}

pub fn changesets(pairs: &[(&str, &str)], options: &PatternOptions) -> Vec<Changeset> {
    pairs
        .iter()
        .map(|(search, replace)| {
            let matcher = PatternCompiler::compile(search, options).expect("Compile pattern");
            Changeset::new(matcher, replace)
        })
        .collect()
}
