/// Number of text lines the status screen can show.
pub const LINE_COUNT: usize = 7;

/// The seven text lines painted under the status color.
///
/// Lines are numbered from 1. An empty string means the line was not
/// supplied and is left blank on the panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLines {
    lines: [String; LINE_COUNT],
}

impl TextLines {
    /// Creates a set of lines with every line empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns line `number` (1-based), or `None` outside `1..=7`.
    pub fn get(&self, number: usize) -> Option<&str> {
        let index = number.checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }

    /// Replaces line `number` (1-based). Numbers outside `1..=7` are ignored.
    pub fn set(&mut self, number: usize, value: impl Into<String>) {
        if let Some(slot) = number.checked_sub(1).and_then(|i| self.lines.get_mut(i)) {
            *slot = value.into();
        }
    }

    /// Iterates the lines in order, starting with line 1.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// True when no line carries text.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }
}

impl<S: Into<String>> From<[S; LINE_COUNT]> for TextLines {
    fn from(lines: [S; LINE_COUNT]) -> Self {
        Self {
            lines: lines.map(Into::into),
        }
    }
}
