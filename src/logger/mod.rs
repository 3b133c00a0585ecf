/// Per-file and summary output.
pub mod result_logger;
