//! `rewrite` command line entry point.

use std::process::ExitCode;
use clap::{CommandFactory, Parser};
use rewrite_cli::structs::cli::Cli;
use rewrite_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut runner = CommandRunner::new();
    let result = runner.run_command(cli).await;
    let code = CommandRunner::exit_code(&result);

    if let Err(error) = &result {
        if error.is_usage_error() {
            println!();
            let _ = Cli::command().print_help();
        }
    }

    ExitCode::from(code)
}
