use crate::Lockfile;
use std::{borrow::Cow, fmt};

impl Lockfile {
    /// Logical lines of the lockfile as they would be written, without line terminators.
    pub fn lines(&self) -> Vec<Cow<'_, str>> {
        fn borrow(line: &String) -> Cow<'_, str> {
            Cow::Borrowed(line.as_str())
        }
        let mut lines: Vec<Cow<'_, str>> = self.prelude.iter().map(borrow).collect();
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                lines.extend(entry.separator.iter().map(borrow));
            }
            lines.push(entry.header());
            lines.extend(entry.body.iter().map(borrow));
        }
        lines.extend(self.epilogue.iter().map(borrow));
        lines
    }
}

/// Serialize with the line terminator and final newline detected on parse.
impl fmt::Display for Lockfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_ending = self.layout.line_ending;
        let lines = self.lines();
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                write!(f, "{line_ending}")?;
            }
            write!(f, "{line}")?;
        }
        if self.layout.trailing_newline && !lines.is_empty() {
            write!(f, "{line_ending}")?;
        }
        Ok(())
    }
}
