use crate::Lockfile;
use std::{collections::HashMap, mem};

/// Request to move a descriptor onto another entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    /// Descriptor text as listed on the header, e.g. `left-pad@^1.0.0`.
    pub descriptor: String,
    /// Index into [`Lockfile::entries`] of the entry that should answer it.
    pub target: usize,
}

impl Lockfile {
    /// Move descriptors to other entries and drop every entry left without descriptors.
    ///
    /// Entries that neither lose nor gain a descriptor are untouched, header included.
    /// An entry that gains descriptors lists all of its descriptors sorted. Reassignments
    /// naming an unknown descriptor or entry are ignored.
    ///
    /// Returns the number of descriptors that moved.
    pub fn reassign<Reassignments>(&mut self, reassignments: Reassignments) -> usize
    where
        Reassignments: IntoIterator<Item = Reassignment>,
    {
        let entry_count = self.entries.len();
        let targets: HashMap<String, usize> = reassignments
            .into_iter()
            .filter(|reassignment| reassignment.target < entry_count)
            .map(|Reassignment { descriptor, target }| (descriptor, target))
            .collect();
        if targets.is_empty() {
            return 0;
        }

        let mut incoming = vec![Vec::new(); entry_count];
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let (leaving, staying): (Vec<_>, Vec<_>) =
                mem::take(&mut entry.keys).into_iter().partition(|key| {
                    targets.get(&key.text).is_some_and(|&target| target != index)
                });
            entry.keys = staying;
            if leaving.is_empty() {
                continue;
            }
            entry.header = None;
            for key in leaving {
                let target = targets[&key.text];
                tracing::debug!(
                    target: "yarn_dedupe_lockfile::rewrite",
                    descriptor = %key.text,
                    from = %entry.raw_version,
                    "Leave entry"
                );
                incoming[target].push(key);
            }
        }

        let mut moved = 0;
        for (entry, keys) in self.entries.iter_mut().zip(incoming) {
            if keys.is_empty() {
                continue;
            }
            moved += keys.len();
            entry.keys.extend(keys);
            entry.keys.sort_by(|a, b| a.text.cmp(&b.text));
            entry.header = None;
        }

        let before = self.entries.len();
        self.entries.retain(|entry| !entry.keys.is_empty());
        tracing::info!(
            target: "yarn_dedupe_lockfile::rewrite",
            moved,
            dropped = before - self.entries.len(),
            "Reassigned descriptors"
        );
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use text_block_macros::text_block_fnl;

    const LOCKFILE: &str = text_block_fnl! {
        "# yarn lockfile v1"
        ""
        ""
        "left-pad@^1.0.0:"
        "  version \"1.0.1\""
        "  resolved \"https://registry.yarnpkg.com/left-pad/-/left-pad-1.0.1.tgz\""
        ""
        "left-pad@^1.1.0:"
        "  version \"1.1.0\""
        "  resolved \"https://registry.yarnpkg.com/left-pad/-/left-pad-1.1.0.tgz\""
        ""
        "right-pad@^1.0.0:"
        "  version \"1.0.0\""
    };

    fn reassignment(descriptor: &str, target: usize) -> Reassignment {
        Reassignment { descriptor: descriptor.to_string(), target }
    }

    #[test]
    fn merge_onto_existing_entry() {
        let mut lockfile = Lockfile::parse(LOCKFILE).unwrap();
        let moved = lockfile.reassign([reassignment("left-pad@^1.0.0", 1)]);
        assert_eq!(moved, 1);

        let expected = text_block_fnl! {
            "# yarn lockfile v1"
            ""
            ""
            "left-pad@^1.0.0, left-pad@^1.1.0:"
            "  version \"1.1.0\""
            "  resolved \"https://registry.yarnpkg.com/left-pad/-/left-pad-1.1.0.tgz\""
            ""
            "right-pad@^1.0.0:"
            "  version \"1.0.0\""
        };
        assert_eq!(lockfile.to_string(), expected);
    }

    #[test]
    fn merge_keeps_separator_of_surviving_entry() {
        let mut lockfile = Lockfile::parse(LOCKFILE).unwrap();
        lockfile.reassign([reassignment("left-pad@^1.1.0", 0)]);

        let expected = text_block_fnl! {
            "# yarn lockfile v1"
            ""
            ""
            "left-pad@^1.0.0, left-pad@^1.1.0:"
            "  version \"1.0.1\""
            "  resolved \"https://registry.yarnpkg.com/left-pad/-/left-pad-1.0.1.tgz\""
            ""
            "right-pad@^1.0.0:"
            "  version \"1.0.0\""
        };
        assert_eq!(lockfile.to_string(), expected);
    }

    #[test]
    fn ignore_noop_and_unknown() {
        let mut lockfile = Lockfile::parse(LOCKFILE).unwrap();
        let moved = lockfile.reassign([
            reassignment("left-pad@^1.0.0", 0),
            reassignment("left-pad@^9.0.0", 1),
            reassignment("left-pad@^1.1.0", 42),
        ]);
        assert_eq!(moved, 0);
        assert_eq!(lockfile.to_string(), LOCKFILE);
    }

    #[test]
    fn keep_crlf() {
        let input = LOCKFILE.replace('\n', "\r\n");
        let mut lockfile = Lockfile::parse(&input).unwrap();
        lockfile.reassign([reassignment("left-pad@^1.0.0", 1)]);
        let output = lockfile.to_string();
        assert!(output.contains("left-pad@^1.0.0, left-pad@^1.1.0:\r\n"));
        assert!(!output.replace("\r\n", "").contains('\n'));
    }
}
