use itertools::Itertools;
use node_semver::{Range, Version};

/// Version constraint of a descriptor.
#[derive(Debug, Clone)]
pub enum VersionRange {
    /// A semver range such as `^1.0.0` or `>=1.2 <2 || 3.x`.
    Semver { raw: String, range: Range },
    /// Anything that is not a semver range: dist-tags, git URLs, `file:` paths, ...
    ///
    /// Nothing satisfies it, so descriptors carrying one keep their resolution.
    Opaque,
}

impl VersionRange {
    /// Interpret a descriptor's range. Never fails: unknown syntax is [`VersionRange::Opaque`].
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Range>() {
            Ok(range) => VersionRange::Semver { raw: raw.to_string(), range },
            Err(_) => VersionRange::Opaque,
        }
    }

    /// Whether `version` satisfies the range.
    ///
    /// Pre-release versions only satisfy a range that mentions a pre-release of the same
    /// `major.minor.patch`, unless `include_prerelease` is set, in which case they have to
    /// fall within the range's bounds and so does their release.
    ///
    /// The release check keeps `2.0.0-alpha` out of `^1.0.0`: it sorts below `2.0.0`, but
    /// a pre-release of the next major is not part of the range.
    pub fn satisfies(&self, version: &Version, include_prerelease: bool) -> bool {
        let VersionRange::Semver { raw, range } = self else {
            return false;
        };
        if version.satisfies(range) {
            return true;
        }
        if !include_prerelease || version.pre_release.is_empty() {
            return false;
        }
        let release = Version { pre_release: Vec::new(), build: Vec::new(), ..version.clone() };
        release.satisfies(range)
            && with_prerelease_floor(raw, version).is_some_and(|widened| version.satisfies(&widened))
    }
}

/// Intersect every comparator set of `raw` with `>=major.minor.patch-0` of `version`.
///
/// The intersection does not exclude `version`, but gives each comparator set a lower bound
/// that is a pre-release of `version`'s own `major.minor.patch`, which lifts the pre-release
/// restriction for exactly that tuple.
fn with_prerelease_floor(raw: &str, version: &Version) -> Option<Range> {
    let Version { major, minor, patch, .. } = version;
    let floor = format!(">={major}.{minor}.{patch}-0");
    raw.split("||")
        .map(|comparators| format!("{} {floor}", comparators.trim()))
        .join(" || ")
        .parse()
        .ok()
}
