//! Model of a yarn v1 lockfile (`yarn.lock`) that can be rewritten without
//! disturbing the entries it does not touch.

mod descriptor;
mod entry;
mod error;
mod header;
mod layout;
mod parse;
mod pkg_name;
mod rewrite;
mod serialize;

pub use descriptor::{Descriptor, ParseDescriptorError};
pub use entry::{Entry, EntryKey};
pub use error::{MalformedKind, ParseLockfileError};
pub use layout::{Layout, LineEnding};
pub use pkg_name::{ParsePkgNameError, PkgName};
pub use rewrite::Reassignment;

/// Parsed `yarn.lock`.
///
/// Owns every [`Entry`] in source order together with the surrounding trivia
/// (comments and blank lines) so that [`ToString::to_string`] reproduces the
/// input byte for byte until [`Lockfile::reassign`] changes something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
    prelude: Vec<String>,
    entries: Vec<Entry>,
    epilogue: Vec<String>,
    layout: Layout,
}

impl Lockfile {
    /// Base file name of a yarn lockfile.
    pub const FILE_NAME: &'static str = "yarn.lock";

    /// Entries in source order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Formatting conventions detected on parse.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
