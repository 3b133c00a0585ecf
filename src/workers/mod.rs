/// Runs one replace command end to end.
pub mod command_runner;
