//! Collapse compatible descriptors of a yarn v1 lockfile onto a single version.
//!
//! The entry points are [`list_duplicates`] and [`fix_duplicates`]. Both take the
//! lockfile text and a [`DedupeOptions`], perform no I/O and keep no state between calls.

mod detect;
mod error;
mod fix;
mod group;
mod options;
mod plan;
mod range;
mod report;
mod select;

pub use detect::has_fixable_duplicates;
pub use error::{DedupeError, InvalidConfigurationError};
pub use fix::fix_duplicates;
pub use group::{group_by_package_name, PackageGroup, Request, ResolvedVersion};
pub use options::{DedupeOptions, Strategy};
pub use plan::{find_duplicates, Duplicate};
pub use range::VersionRange;
pub use report::list_duplicates;
pub use select::{version_usage, Selector, VersionUsage};
