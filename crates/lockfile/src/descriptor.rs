use crate::{ParsePkgNameError, PkgName};
use derive_more::{Display, Error};
use split_first_char::SplitFirstChar;
use std::str::FromStr;

/// Protocol prefix of an aliased dependency (`alias@npm:target@range`).
const NPM_ALIAS_PROTOCOL: &str = "npm:";

/// Syntax: `{name}@{range}`
///
/// Examples: `left-pad@^1.0.0`, `@babel/core@>=7.0.0 <8`, `string-width-cjs@npm:string-width@^4.2.0`
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
#[display("{name}@{range}")]
pub struct Descriptor {
    /// The name the package was requested under.
    pub name: PkgName,
    /// The range part, verbatim. An omitted or empty range is `*`.
    pub range: String,
}

/// Error when parsing [`Descriptor`] from a string.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ParseDescriptorError {
    #[display("Input is empty")]
    EmptyInput,
    #[display("Failed to parse package name: {_0}")]
    ParseNameFailure(#[error(source)] ParsePkgNameError),
}

impl Descriptor {
    /// The package this descriptor actually resolves to.
    ///
    /// Equals [`Descriptor::name`] except for `npm:` aliases, where it is the alias target.
    pub fn package(&self) -> PkgName {
        match self.alias() {
            Some((target, _)) => target,
            None => self.name.clone(),
        }
    }

    /// The range that constrains the resolved version.
    ///
    /// Equals [`Descriptor::range`] except for `npm:` aliases, where it is the alias's inner range.
    pub fn version_range(&self) -> &str {
        match self.range.strip_prefix(NPM_ALIAS_PROTOCOL) {
            Some(aliased) if self.alias().is_some() => split_name_range(aliased).1,
            _ => &self.range,
        }
    }

    /// Target package and inner range of an `npm:` alias.
    fn alias(&self) -> Option<(PkgName, &str)> {
        let aliased = self.range.strip_prefix(NPM_ALIAS_PROTOCOL)?;
        let (name, range) = split_name_range(aliased);
        let target = PkgName::parse(name).ok()?;
        Some((target, range))
    }
}

/// Split `{name}@{range}` at the first `@` that is not the scope marker.
fn split_name_range(input: &str) -> (&str, &str) {
    let search_from = match input.split_first_char() {
        Some(('@', _)) => 1,
        _ => 0,
    };
    match input[search_from..].find('@') {
        Some(index) => {
            let (name, range) = input.split_at(search_from + index);
            let range = &range[1..];
            (name, if range.is_empty() { "*" } else { range })
        }
        None => (input, "*"),
    }
}

impl FromStr for Descriptor {
    type Err = ParseDescriptorError;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(ParseDescriptorError::EmptyInput);
        }
        let (name, range) = split_name_range(value);
        let name = PkgName::parse(name).map_err(ParseDescriptorError::ParseNameFailure)?;
        let range = range.to_string();
        Ok(Descriptor { name, range })
    }
}
