/// A position within parsed text, with dual column tracking.
///
/// All values are 0-based:
/// - `line`: 0 = first line
/// - `col_utf8`: character count within the current line
/// - `col_utf16`: UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole text
///
/// Normalized schema text is always a single line, but positions are still
/// tracked per line so that raw (un-normalized) text handed straight to the
/// parser produces useful diagnostics.
///
/// For ASCII text both columns are equal. Characters outside the Basic
/// Multilingual Plane advance `col_utf8` by 1 and `col_utf16` by 2.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the very first character of a text.
    pub fn start_of_input() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    ///
    /// Prefer this when talking to editors over LSP.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of the text.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
