use std::process::ExitCode;
use yarn_dedupe_diagnostics::Result;

pub fn main() -> Result<ExitCode> {
    yarn_dedupe_cli::run_cli()
}
