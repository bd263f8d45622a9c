use crate::ParseDescriptorError;
use derive_more::{Display, Error};
use miette::Diagnostic;
use node_semver::SemverError;

/// Structural defect found while parsing a lockfile.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedKind {
    #[display("indented line outside of any entry")]
    OrphanLine,
    #[display("entry header must end with a colon")]
    MissingColon,
    #[display("entry header is not followed by any field")]
    UnterminatedEntry,
    #[display("unterminated quote in entry header")]
    UnterminatedQuote,
    #[display("unexpected characters after a quoted descriptor")]
    TrailingCharacters,
    #[display("empty descriptor in entry header")]
    EmptyDescriptor,
    #[display("entry has no version field")]
    MissingVersion,
    #[display("descriptor {descriptor:?} was already declared at line {first_line}")]
    DuplicateDescriptor { descriptor: String, first_line: usize },
}

/// Error when parsing a [`Lockfile`](crate::Lockfile) from text.
///
/// Line numbers are 1-based.
#[derive(Debug, Display, Error, Diagnostic)]
#[non_exhaustive]
pub enum ParseLockfileError {
    #[display("Malformed lockfile at line {line}: {kind}")]
    #[diagnostic(code(yarn_dedupe_lockfile::malformed_lockfile))]
    MalformedLockfile { line: usize, kind: MalformedKind },

    #[display("Unparsable descriptor {descriptor:?} at line {line}: {error}")]
    #[diagnostic(code(yarn_dedupe_lockfile::unparsable_descriptor))]
    UnparsableDescriptor {
        line: usize,
        descriptor: String,
        #[error(source)]
        error: ParseDescriptorError,
    },

    #[display("Unparsable version {version:?} at line {line}: {error}")]
    #[diagnostic(code(yarn_dedupe_lockfile::unparsable_version))]
    UnparsableVersion {
        line: usize,
        version: String,
        #[error(source)]
        error: SemverError,
    },
}

impl ParseLockfileError {
    /// Line of the lockfile where the error was found.
    pub fn line(&self) -> usize {
        match self {
            ParseLockfileError::MalformedLockfile { line, .. }
            | ParseLockfileError::UnparsableDescriptor { line, .. }
            | ParseLockfileError::UnparsableVersion { line, .. } => *line,
        }
    }
}
