//! Sequential line cursor with lookahead.

/// A forward-only cursor over the lines of one document.
///
/// Reads past either end return an empty string instead of failing, which
/// keeps lookahead in the block parsers free of bounds checks. The position
/// never moves backwards.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    index: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor positioned at the first line.
    pub fn new(lines: Vec<&'a str>) -> Self {
        Self { lines, index: 0 }
    }

    /// Returns the current line, or `""` at the end.
    pub fn current(&self) -> &'a str {
        self.lines.get(self.index).copied().unwrap_or("")
    }

    /// Returns the line `offset` positions ahead, or `""` when out of range.
    pub fn peek(&self, offset: usize) -> &'a str {
        self.index
            .checked_add(offset)
            .and_then(|i| self.lines.get(i))
            .copied()
            .unwrap_or("")
    }

    /// Moves to the next line.
    pub fn advance(&mut self) {
        if self.index < self.lines.len() {
            self.index += 1;
        }
    }

    /// Returns true when every line has been consumed.
    pub fn at_end(&self) -> bool {
        self.index >= self.lines.len()
    }

    /// Returns the 0-based index of the current line.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Returns the number of lines in the document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
