//! Integration tests for rewrite-cli.

mod common;
mod test_command_runner;
