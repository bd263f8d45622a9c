use crate::MalformedKind;

/// A descriptor as it appears on a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawKey {
    pub text: String,
    pub quoted: bool,
}

/// Split a header line (`"a@^1", b@^2:`) into its descriptors.
pub(crate) fn parse_header(line: &str) -> Result<Vec<RawKey>, MalformedKind> {
    let content = line.trim_end().strip_suffix(':').ok_or(MalformedKind::MissingColon)?;
    let mut keys = Vec::new();
    let mut chars = content.chars().peekable();

    loop {
        while chars.next_if(|char| *char == ' ').is_some() {}

        let key = if chars.next_if_eq(&'"').is_some() {
            let mut text = String::new();
            loop {
                match chars.next() {
                    None => return Err(MalformedKind::UnterminatedQuote),
                    Some('"') => break,
                    Some('\\') => text.push(chars.next().ok_or(MalformedKind::UnterminatedQuote)?),
                    Some(char) => text.push(char),
                }
            }
            while chars.next_if(|char| *char == ' ').is_some() {}
            if !matches!(chars.peek(), None | Some(',')) {
                return Err(MalformedKind::TrailingCharacters);
            }
            RawKey { text, quoted: true }
        } else {
            let mut text = String::new();
            while let Some(char) = chars.next_if(|char| *char != ',') {
                text.push(char);
            }
            let text = text.trim_end().to_string();
            RawKey { text, quoted: false }
        };

        if key.text.is_empty() {
            return Err(MalformedKind::EmptyDescriptor);
        }
        keys.push(key);

        if chars.next().is_none() {
            return Ok(keys);
        }
    }
}

/// Write a descriptor back the way it was written.
pub(crate) fn write_key(out: &mut String, text: &str, quoted: bool) {
    if !quoted {
        out.push_str(text);
        return;
    }
    out.push('"');
    for char in text.chars() {
        if matches!(char, '"' | '\\') {
            out.push('\\');
        }
        out.push(char);
    }
    out.push('"');
}
