use crate::VersionRange;
use node_semver::Version;
use std::{cmp::Ordering, collections::BTreeMap};
use yarn_dedupe_lockfile::{EntryKey, Lockfile, PkgName};

/// A descriptor together with the entry that currently answers it.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    /// The descriptor as listed on the entry header.
    pub key: &'a EntryKey,
    /// Index of the answering entry in [`Lockfile::entries`].
    pub entry: usize,
    /// Interpreted range of the descriptor.
    pub range: VersionRange,
    /// Raw version string of the answering entry.
    pub raw_version: &'a str,
}

/// A distinct version resolved somewhere in a [`PackageGroup`].
#[derive(Debug, Clone, Copy)]
pub struct ResolvedVersion<'a> {
    /// The version as written in the lockfile. Distinct versions are told apart by it.
    pub raw: &'a str,
    /// Parsed version.
    pub version: &'a Version,
    /// First entry (in file order) of the group that resolves to this version.
    pub entry: usize,
}

impl ResolvedVersion<'_> {
    /// Semver precedence, then the raw string so that the order is total.
    pub fn precedence(&self, other: &Self) -> Ordering {
        self.version.cmp(other.version).then_with(|| self.raw.cmp(other.raw))
    }
}

/// All descriptors of one package, with the distinct versions they resolve to.
#[derive(Debug, Clone)]
pub struct PackageGroup<'a> {
    pub name: PkgName,
    /// Descriptors in file order.
    pub requests: Vec<Request<'a>>,
    /// Distinct versions, lowest first.
    pub versions: Vec<ResolvedVersion<'a>>,
}

impl<'a> PackageGroup<'a> {
    fn new(name: PkgName) -> Self {
        PackageGroup { name, requests: Vec::new(), versions: Vec::new() }
    }

    /// The distinct version a request is currently resolved to.
    pub fn current(&self, request: &Request<'a>) -> Option<&ResolvedVersion<'a>> {
        self.versions.iter().find(|version| version.raw == request.raw_version)
    }
}

/// Bucket every descriptor of the lockfile by the package it resolves to.
///
/// Aliased descriptors (`alias@npm:target@range`) belong to their target package.
pub fn group_by_package_name(lockfile: &Lockfile) -> BTreeMap<PkgName, PackageGroup<'_>> {
    let mut groups = BTreeMap::<PkgName, PackageGroup<'_>>::new();

    for (index, entry) in lockfile.entries().iter().enumerate() {
        let raw_version = entry.raw_version();
        for key in entry.keys() {
            let package = key.descriptor.package();
            let group =
                groups.entry(package.clone()).or_insert_with(|| PackageGroup::new(package));

            if !group.versions.iter().any(|version| version.raw == raw_version) {
                group.versions.push(ResolvedVersion {
                    raw: raw_version,
                    version: entry.version(),
                    entry: index,
                });
            }

            group.requests.push(Request {
                key,
                entry: index,
                range: VersionRange::parse(key.descriptor.version_range()),
                raw_version,
            });
        }
    }

    for group in groups.values_mut() {
        group.versions.sort_by(ResolvedVersion::precedence);
    }

    groups
}
