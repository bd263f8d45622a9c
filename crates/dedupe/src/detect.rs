use crate::PackageGroup;

/// Whether some descriptor of the group could be answered by a version other than
/// the one it currently resolves to.
///
/// A group with a single distinct version never has duplicates, and descriptors
/// whose ranges only their own version satisfies (e.g. `^1` next to `^2`) never
/// make a group fixable.
pub fn has_fixable_duplicates(group: &PackageGroup<'_>, include_prerelease: bool) -> bool {
    if group.versions.len() < 2 {
        return false;
    }
    group.requests.iter().any(|request| {
        group.versions.iter().any(|version| {
            version.raw != request.raw_version
                && request.range.satisfies(version.version, include_prerelease)
        })
    })
}
