use derive_more::{Display, Error};
use miette::Diagnostic;
use std::{io, path::PathBuf};

/// Failure to access the lockfile on disk.
#[derive(Debug, Display, Error, Diagnostic)]
#[non_exhaustive]
pub enum CliError {
    #[display("Failed to read {path:?}: {error}")]
    #[diagnostic(code(yarn_dedupe_cli::read_lockfile))]
    ReadLockfile {
        path: PathBuf,
        #[error(source)]
        error: io::Error,
    },

    #[display("Failed to write {path:?}: {error}")]
    #[diagnostic(code(yarn_dedupe_cli::write_lockfile))]
    WriteLockfile {
        path: PathBuf,
        #[error(source)]
        error: io::Error,
    },
}
