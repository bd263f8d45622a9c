use crate::{find_duplicates, DedupeError, DedupeOptions};
use yarn_dedupe_lockfile::Lockfile;

/// Describe every descriptor that [`fix_duplicates`](crate::fix_duplicates) would move,
/// one line each, without changing anything.
///
/// An empty list means the lockfile has no fixable duplicates.
pub fn list_duplicates(text: &str, options: &DedupeOptions) -> Result<Vec<String>, DedupeError> {
    options.validate().map_err(DedupeError::InvalidConfiguration)?;
    let lockfile = Lockfile::parse(text).map_err(DedupeError::ParseLockfile)?;
    let lines = find_duplicates(&lockfile, options).iter().map(|duplicate| duplicate.describe()).collect();
    Ok(lines)
}
