use derive_more::{Display, Error};
use miette::Diagnostic;
use yarn_dedupe_lockfile::ParseLockfileError;

/// Options that cannot be honored, rejected before any lockfile text is read.
#[derive(Debug, Display, Error, Diagnostic, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidConfigurationError {
    #[display("Please specify either scopes or packages, not both")]
    #[diagnostic(code(yarn_dedupe::scopes_and_packages))]
    ScopesAndPackages,

    #[display("Invalid strategy {strategy:?}")]
    #[diagnostic(
        code(yarn_dedupe::unknown_strategy),
        help("Valid strategies are highest, fewer, fewerHighest and mostCommon")
    )]
    UnknownStrategy { strategy: String },
}

/// Error type of [`list_duplicates`](crate::list_duplicates) and [`fix_duplicates`](crate::fix_duplicates).
#[derive(Debug, Display, Error, Diagnostic)]
#[non_exhaustive]
pub enum DedupeError {
    #[diagnostic(transparent)]
    InvalidConfiguration(#[error(source)] InvalidConfigurationError),

    #[diagnostic(transparent)]
    ParseLockfile(#[error(source)] ParseLockfileError),
}
