/// Outcome of one file.
pub mod mutation_status;
/// Report format.
pub mod output_format;
/// What a match replaces.
pub mod replace_mode;
