use derive_more::{Display, Error};
use pipe_trait::Pipe;
use split_first_char::SplitFirstChar;
use std::{fmt, str::FromStr};

/// Name of an npm package, as used to group descriptors.
///
/// Unscoped names order before scoped ones, then by scope and name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PkgName {
    /// Scope without the `@` prefix, e.g. `babel` for `@babel/core`.
    pub scope: Option<String>,
    /// Name without the scope.
    pub name: String,
}

/// Error when parsing [`PkgName`] from a string input.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ParsePkgNameError {
    #[display("Missing name part of the scoped package")]
    MissingName,
    #[display("Scope is empty")]
    EmptyScope,
    #[display("Name is empty")]
    EmptyName,
}

impl PkgName {
    /// Parse `name` or `@scope/name`.
    pub fn parse(input: &str) -> Result<Self, ParsePkgNameError> {
        let Some((first, rest)) = input.split_first_char() else {
            return Err(ParsePkgNameError::EmptyName);
        };
        if first != '@' {
            return PkgName { scope: None, name: input.to_string() }.pipe(Ok);
        }
        match rest.split_once('/') {
            None => Err(ParsePkgNameError::MissingName),
            Some(("", _)) => Err(ParsePkgNameError::EmptyScope),
            Some((_, "")) => Err(ParsePkgNameError::MissingName),
            Some((scope, name)) => {
                PkgName { scope: Some(scope.to_string()), name: name.to_string() }.pipe(Ok)
            }
        }
    }

    /// Whether the package lives under `scope`.
    ///
    /// `scope` may be written with or without the leading `@` and trailing `/`.
    pub fn is_in_scope(&self, scope: &str) -> bool {
        let scope = scope.strip_prefix('@').unwrap_or(scope);
        let scope = scope.strip_suffix('/').unwrap_or(scope);
        self.scope.as_deref() == Some(scope)
    }
}

impl FromStr for PkgName {
    type Err = ParsePkgNameError;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        PkgName::parse(input)
    }
}

impl fmt::Display for PkgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "@{scope}/{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
