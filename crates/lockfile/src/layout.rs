use derive_more::Display;

/// Line terminator of a lockfile.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    #[display("\n")]
    Lf,
    #[display("\r\n")]
    CrLf,
}

impl LineEnding {
    /// Detect the line ending from the first line break of `text`.
    ///
    /// Text without any line break is treated as [`LineEnding::Lf`].
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(index) if text[..index].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/// Formatting conventions of a lockfile that are reproduced on serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Line terminator used when joining lines.
    pub line_ending: LineEnding,
    /// Whether the last line is followed by a line terminator.
    pub trailing_newline: bool,
    /// Leading whitespace of one level of indentation inside entries.
    pub indent: String,
}

impl Default for Layout {
    fn default() -> Self {
        Layout { line_ending: LineEnding::Lf, trailing_newline: true, indent: "  ".to_string() }
    }
}

/// Split `text` into logical lines and detect its [`Layout`].
///
/// The indentation unit is left at its default, it is only known once entries are parsed.
pub(crate) fn split_lines(text: &str) -> (Vec<&str>, Layout) {
    let line_ending = LineEnding::detect(text);
    let trailing_newline = text.ends_with('\n');
    let body = text.strip_suffix('\n').unwrap_or(text);
    let lines = if text.is_empty() {
        Vec::new()
    } else {
        body.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect()
    };
    let layout = Layout { line_ending, trailing_newline, ..Layout::default() };
    (lines, layout)
}
