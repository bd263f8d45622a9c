mod cli_args;
mod error;

use clap::Parser;
use cli_args::CliArgs;
use std::process::ExitCode;
use yarn_dedupe_diagnostics::enable_tracing_by_env;

pub use error::CliError;

pub fn run_cli() -> miette::Result<ExitCode> {
    enable_tracing_by_env();
    CliArgs::parse().run()
}
