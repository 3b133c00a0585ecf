/// Search/replace rule with per-file state.
pub mod changeset;
/// Command line definition.
pub mod cli;
/// Config file sections.
pub mod config;
pub mod engine_options;
pub mod enumerator_options;
pub mod file_task;
pub mod mutation;
pub mod mutation_result;
pub mod pattern_options;
pub mod run_summary;
