use crate::{
    header::parse_header, layout::split_lines, Entry, EntryKey, Lockfile, MalformedKind,
    ParseLockfileError,
};
use node_semver::Version;
use std::{collections::HashMap, mem, str::FromStr};

impl Lockfile {
    /// Parse lockfile text.
    ///
    /// Fails on the first structural defect, descriptor or version that cannot be read,
    /// so a lockfile is either fully understood or not at all.
    pub fn parse(text: &str) -> Result<Self, ParseLockfileError> {
        let (lines, mut layout) = split_lines(text);
        let mut prelude = Vec::new();
        let mut trivia = Vec::new();
        let mut entries = Vec::new();
        let mut indent: Option<String> = None;
        let mut declared_at = HashMap::<String, usize>::new();

        let mut index = 0;
        while index < lines.len() {
            let line = lines[index];
            let line_number = index + 1;

            if is_trivia(line) {
                trivia.push(line.to_string());
                index += 1;
                continue;
            }

            let malformed = |line, kind| ParseLockfileError::MalformedLockfile { line, kind };

            if is_indented(line) {
                return Err(malformed(line_number, MalformedKind::OrphanLine));
            }

            let raw_keys = parse_header(line).map_err(|kind| malformed(line_number, kind))?;

            let body_start = index + 1;
            let body_end = lines[body_start..]
                .iter()
                .position(|line| !is_body_line(line))
                .map_or(lines.len(), |offset| body_start + offset);
            let body = &lines[body_start..body_end];
            let Some(first_body_line) = body.first() else {
                return Err(malformed(line_number, MalformedKind::UnterminatedEntry));
            };

            let indent: &str =
                indent.get_or_insert_with(|| leading_whitespace(first_body_line).to_string());
            let (version_offset, raw_version) = body
                .iter()
                .enumerate()
                .find_map(|(offset, line)| {
                    version_field(line, indent).map(|version| (offset, version))
                })
                .ok_or_else(|| malformed(line_number, MalformedKind::MissingVersion))?;
            let version = raw_version.parse::<Version>().map_err(|error| {
                ParseLockfileError::UnparsableVersion {
                    line: body_start + version_offset + 1,
                    version: raw_version.to_string(),
                    error,
                }
            })?;

            let mut keys = Vec::with_capacity(raw_keys.len());
            for raw_key in raw_keys {
                if let Some(&first_line) = declared_at.get(&raw_key.text) {
                    let kind =
                        MalformedKind::DuplicateDescriptor { descriptor: raw_key.text, first_line };
                    return Err(malformed(line_number, kind));
                }
                let descriptor = raw_key.text.parse().map_err(|error| {
                    ParseLockfileError::UnparsableDescriptor {
                        line: line_number,
                        descriptor: raw_key.text.clone(),
                        error,
                    }
                })?;
                declared_at.insert(raw_key.text.clone(), line_number);
                keys.push(EntryKey { text: raw_key.text, quoted: raw_key.quoted, descriptor });
            }

            let separator = mem::take(&mut trivia);
            let separator = if entries.is_empty() {
                prelude = separator;
                Vec::new()
            } else {
                separator
            };

            entries.push(Entry {
                keys,
                header: Some(line.to_string()),
                version,
                raw_version: raw_version.to_string(),
                body: body.iter().map(|line| line.to_string()).collect(),
                separator,
                line: line_number,
            });

            index = body_end;
        }

        let epilogue = if entries.is_empty() {
            prelude = trivia;
            Vec::new()
        } else {
            trivia
        };

        if let Some(indent) = indent {
            layout.indent = indent;
        }

        Ok(Lockfile { prelude, entries, epilogue, layout })
    }
}

impl FromStr for Lockfile {
    type Err = ParseLockfileError;
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Lockfile::parse(text)
    }
}

fn is_trivia(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

fn is_indented(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

fn is_body_line(line: &str) -> bool {
    is_indented(line) && !line.trim().is_empty()
}

fn leading_whitespace(line: &str) -> &str {
    let content = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - content.len()]
}

/// Value of the `version` field if `line` is that field at the top level of an entry.
///
/// Accepts `version "1.0.0"`, `version 1.0.0` and `version: 1.0.0`.
fn version_field<'a>(line: &'a str, indent: &str) -> Option<&'a str> {
    let field = line.strip_prefix(indent)?;
    if is_indented(field) {
        return None;
    }
    let (key, value) = field.split_once([' ', ':'])?;
    if key.trim_matches('"') != "version" {
        return None;
    }
    let value = value.trim_start_matches(':').trim();
    Some(value.strip_prefix('"').and_then(|value| value.strip_suffix('"')).unwrap_or(value))
}
