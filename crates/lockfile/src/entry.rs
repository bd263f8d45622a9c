use crate::{header::write_key, Descriptor};
use node_semver::Version;
use std::borrow::Cow;

/// A descriptor listed on an entry's header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryKey {
    /// The descriptor string without quotes, e.g. `@babel/core@^7.0.0`.
    pub text: String,
    /// Whether the header wrote it between double quotes.
    pub quoted: bool,
    /// The parsed form of [`EntryKey::text`].
    pub descriptor: Descriptor,
}

/// A lockfile record: one or more descriptors resolved to a single version.
///
/// The metadata block under the header (`version`, `resolved`, `integrity`,
/// `dependencies`, ...) is kept verbatim and never interpreted beyond the
/// `version` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) keys: Vec<EntryKey>,
    /// Header line as read, dropped as soon as [`Entry::keys`] changes.
    pub(crate) header: Option<String>,
    pub(crate) version: Version,
    pub(crate) raw_version: String,
    pub(crate) body: Vec<String>,
    /// Blank and comment lines between the previous entry and this one.
    pub(crate) separator: Vec<String>,
    pub(crate) line: usize,
}

impl Entry {
    /// Descriptors answered by this entry, in header order.
    pub fn keys(&self) -> &[EntryKey] {
        &self.keys
    }

    /// Resolved version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Resolved version exactly as written in the lockfile.
    pub fn raw_version(&self) -> &str {
        &self.raw_version
    }

    /// Metadata lines under the header, indentation included.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// 1-based line number of the header in the parsed text.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The header line, regenerated when the descriptor set has changed.
    pub fn header(&self) -> Cow<'_, str> {
        match &self.header {
            Some(header) => Cow::Borrowed(header),
            None => Cow::Owned(render_header(&self.keys)),
        }
    }
}

fn render_header(keys: &[EntryKey]) -> String {
    let mut header = String::new();
    for (index, key) in keys.iter().enumerate() {
        if index > 0 {
            header.push_str(", ");
        }
        write_key(&mut header, &key.text, key.quoted);
    }
    header.push(':');
    header
}
