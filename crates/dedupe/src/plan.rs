use crate::{
    group_by_package_name, has_fixable_duplicates, version_usage, DedupeOptions, Selector,
};
use yarn_dedupe_lockfile::{Lockfile, Reassignment};

/// A descriptor that should move to another version of its package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    /// Package the descriptor resolves to.
    pub package: String,
    /// Descriptor text as listed on the entry header.
    pub descriptor: String,
    /// Requested range, the inner one for `npm:` aliases.
    pub range: String,
    /// Version it currently resolves to.
    pub current: String,
    /// Version it should resolve to.
    pub winner: String,
    /// Index of the entry that answers for [`Duplicate::winner`].
    pub target: usize,
}

impl Duplicate {
    /// Human-readable description of the duplicate.
    pub fn describe(&self) -> String {
        let Duplicate { package, range, current, winner, .. } = self;
        format!(r#"Package "{package}" wants {range} and could get {winner}, but got {current}"#)
    }
}

impl From<Duplicate> for Reassignment {
    fn from(duplicate: Duplicate) -> Self {
        Reassignment { descriptor: duplicate.descriptor, target: duplicate.target }
    }
}

/// Find every descriptor of an eligible package that the strategy would move.
///
/// Ordered by package name, then by position in the lockfile.
pub fn find_duplicates(lockfile: &Lockfile, options: &DedupeOptions) -> Vec<Duplicate> {
    let groups = group_by_package_name(lockfile);
    let eligible = groups.values().filter(|group| options.is_eligible(&group.name)).collect::<Vec<_>>();
    let usage = version_usage(eligible.iter().copied());

    let mut duplicates = Vec::new();
    for group in eligible {
        let fixable = has_fixable_duplicates(group, options.include_prerelease);
        tracing::debug!(
            target: "yarn_dedupe::plan",
            package = %group.name,
            descriptors = group.requests.len(),
            versions = group.versions.len(),
            fixable,
            "Examine package"
        );
        if !fixable {
            continue;
        }

        let selector = Selector::new(options.strategy, options.include_prerelease, group, &usage);
        for request in &group.requests {
            let Some(winner) = selector.select(request) else {
                continue;
            };
            if winner.raw == request.raw_version {
                continue;
            }
            duplicates.push(Duplicate {
                package: group.name.to_string(),
                descriptor: request.key.text.clone(),
                range: request.key.descriptor.version_range().to_string(),
                current: request.raw_version.to_string(),
                winner: winner.raw.to_string(),
                target: winner.entry,
            });
        }
    }
    duplicates
}
