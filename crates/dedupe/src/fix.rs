use crate::{find_duplicates, DedupeError, DedupeOptions};
use yarn_dedupe_lockfile::{Lockfile, Reassignment};

/// Merge every fixable duplicate and return the new lockfile text.
///
/// Reassignments are planned and applied in passes until a pass finds nothing left to
/// move, so the result is already deduplicated under the same options. When the first
/// pass is empty, `text` is returned as is.
pub fn fix_duplicates(text: &str, options: &DedupeOptions) -> Result<String, DedupeError> {
    options.validate().map_err(DedupeError::InvalidConfiguration)?;
    let mut lockfile = Lockfile::parse(text).map_err(DedupeError::ParseLockfile)?;

    let max_passes = lockfile.entries().iter().map(|entry| entry.keys().len()).sum::<usize>() + 1;
    let mut changed = false;
    for pass in 1..=max_passes {
        let duplicates = find_duplicates(&lockfile, options);
        if duplicates.is_empty() {
            tracing::debug!(target: "yarn_dedupe::fix", pass, "Nothing left to move");
            break;
        }
        for duplicate in &duplicates {
            tracing::info!(
                target: "yarn_dedupe::fix",
                package = %duplicate.package,
                descriptor = %duplicate.descriptor,
                from = %duplicate.current,
                to = %duplicate.winner,
                "Move descriptor"
            );
        }
        let moved = lockfile.reassign(duplicates.into_iter().map(Reassignment::from));
        tracing::info!(target: "yarn_dedupe::fix", pass, moved, "Finish pass");
        if moved == 0 {
            break;
        }
        changed = true;
        if pass == max_passes {
            tracing::warn!(target: "yarn_dedupe::fix", max_passes, "Stop before reaching a fixed point");
        }
    }

    if !changed {
        return Ok(text.to_string());
    }
    Ok(lockfile.to_string())
}
