use crate::{PackageGroup, Request, ResolvedVersion, Strategy};
use std::{cmp::Ordering, collections::BTreeMap};

/// Number of descriptors resolved to each raw version string, across every eligible package.
pub type VersionUsage<'a> = BTreeMap<&'a str, usize>;

/// Count descriptors per resolved version string over `groups`.
pub fn version_usage<'a, 'g, Groups>(groups: Groups) -> VersionUsage<'a>
where
    'a: 'g,
    Groups: IntoIterator<Item = &'g PackageGroup<'a>>,
{
    let mut usage = VersionUsage::new();
    for request in groups.into_iter().flat_map(|group| &group.requests) {
        *usage.entry(request.raw_version).or_default() += 1;
    }
    usage
}

/// Picks the winning version of each descriptor of one package.
#[derive(Debug)]
pub struct Selector<'s, 'a> {
    strategy: Strategy,
    include_prerelease: bool,
    group: &'s PackageGroup<'a>,
    /// Per entry of `group.versions`: descriptors it satisfies or already answers.
    coverage: Vec<usize>,
    /// Per entry of `group.versions`: descriptors of the group resolved to it.
    local_usage: Vec<usize>,
    global_usage: &'s VersionUsage<'a>,
}

impl<'s, 'a> Selector<'s, 'a> {
    /// Compute the per-group statistics once.
    pub fn new(
        strategy: Strategy,
        include_prerelease: bool,
        group: &'s PackageGroup<'a>,
        global_usage: &'s VersionUsage<'a>,
    ) -> Self {
        let coverage = group
            .versions
            .iter()
            .map(|version| {
                group
                    .requests
                    .iter()
                    .filter(|request| accepts(request, version, include_prerelease))
                    .count()
            })
            .collect();
        let local_usage = group
            .versions
            .iter()
            .map(|version| {
                group.requests.iter().filter(|request| request.raw_version == version.raw).count()
            })
            .collect();
        Selector { strategy, include_prerelease, group, coverage, local_usage, global_usage }
    }

    /// The version `request` should resolve to.
    ///
    /// Only versions already present in the group are considered, and the current
    /// resolution is always a candidate, so a descriptor that nothing else satisfies
    /// keeps its version.
    pub fn select(&self, request: &Request<'a>) -> Option<&'s ResolvedVersion<'a>> {
        let group = self.group;
        group
            .versions
            .iter()
            .enumerate()
            .filter(|(_, version)| accepts(request, version, self.include_prerelease))
            .max_by(|(a_index, a), (b_index, b)| self.rank(*a_index, a, *b_index, b))
            .map(|(_, version)| version)
    }

    /// Order two candidates so that the preferred one is the greater.
    fn rank(
        &self,
        a_index: usize,
        a: &ResolvedVersion<'a>,
        b_index: usize,
        b: &ResolvedVersion<'a>,
    ) -> Ordering {
        let coverage = || self.coverage[a_index].cmp(&self.coverage[b_index]);
        let global = |version: &ResolvedVersion<'a>| {
            self.global_usage.get(version.raw).copied().unwrap_or_default()
        };
        match self.strategy {
            Strategy::Highest => a.precedence(b),
            Strategy::Fewer => coverage().then_with(|| b.precedence(a)),
            Strategy::FewerHighest => coverage().then_with(|| a.precedence(b)),
            Strategy::MostCommon => global(a)
                .cmp(&global(b))
                .then_with(|| self.local_usage[a_index].cmp(&self.local_usage[b_index]))
                .then_with(|| a.precedence(b)),
        }
    }
}

fn accepts(request: &Request<'_>, version: &ResolvedVersion<'_>, include_prerelease: bool) -> bool {
    request.raw_version == version.raw || request.range.satisfies(version.version, include_prerelease)
}
