use crate::InvalidConfigurationError;
use serde::Deserialize;
use std::collections::BTreeSet;
use yarn_dedupe_lockfile::PkgName;

/// Policy that picks the version a descriptor is merged onto.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Strategy {
    /// The highest version that satisfies the range.
    Highest,
    /// The version that satisfies the most ranges of the package, the lower one on a tie.
    Fewer,
    /// The version that satisfies the most ranges of the package, the higher one on a tie.
    #[default]
    FewerHighest,
    /// The version most descriptors are already resolved to, the higher one on a tie.
    MostCommon,
}

impl Strategy {
    /// Look a strategy up by its name (`highest`, `fewer`, `fewerHighest`, `mostCommon`).
    pub fn from_name(name: &str) -> Result<Self, InvalidConfigurationError> {
        name.parse().map_err(|_: strum::ParseError| InvalidConfigurationError::UnknownStrategy {
            strategy: name.to_string(),
        })
    }
}

/// Configuration of a deduplication run.
///
/// Empty sets mean the option was not supplied. Field names deserialize in camelCase
/// (`includeScopes`, `excludePackages`, ...).
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DedupeOptions {
    /// How the winning version is chosen.
    pub strategy: Strategy,
    /// Only deduplicate packages under these scopes (`@babel` or `babel`).
    pub include_scopes: BTreeSet<String>,
    /// Only deduplicate these packages.
    pub include_packages: BTreeSet<String>,
    /// Never deduplicate these packages.
    pub exclude_packages: BTreeSet<String>,
    /// Never deduplicate packages under these scopes.
    pub exclude_scopes: BTreeSet<String>,
    /// Let pre-release versions satisfy ranges that do not mention a pre-release.
    pub include_prerelease: bool,
}

impl DedupeOptions {
    /// Reject option combinations that have no meaning.
    pub fn validate(&self) -> Result<(), InvalidConfigurationError> {
        if !self.include_scopes.is_empty() && !self.include_packages.is_empty() {
            return Err(InvalidConfigurationError::ScopesAndPackages);
        }
        Ok(())
    }

    /// Whether the package takes part in deduplication.
    pub fn is_eligible(&self, package: &PkgName) -> bool {
        let in_any_scope = |scopes: &BTreeSet<String>| {
            scopes.iter().any(|scope| package.is_in_scope(scope))
        };
        let name = package.to_string();

        let included = if !self.include_packages.is_empty() {
            self.include_packages.contains(&name)
        } else if !self.include_scopes.is_empty() {
            in_any_scope(&self.include_scopes)
        } else {
            true
        };

        included && !self.exclude_packages.contains(&name) && !in_any_scope(&self.exclude_scopes)
    }
}
