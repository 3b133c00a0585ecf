/// Recursive file discovery.
pub mod file_enumerator;
/// Line-by-line rewriting of one file.
pub mod mutation_engine;
/// Concurrent dispatch of file tasks.
pub mod orchestrator;
/// Search terms to matchers.
pub mod pattern_compiler;
