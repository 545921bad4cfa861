/// Compact byte-offset span attached to every syntax tree node.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// text that was parsed. Both offsets are 0-based.
///
/// Shape declarations are small (a single object or enum block), so `u32`
/// offsets are plenty; the parser rejects text that outgrows them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ByteSpan {
    /// Offset of the first byte of the node (inclusive).
    pub start: u32,
    /// Offset one past the last byte of the node (exclusive).
    pub end: u32,
}

impl ByteSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the slice of `source` this span covers, or `None` if the span
    /// is out of bounds or does not fall on char boundaries.
    pub fn source_slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start as usize..self.end as usize)
    }
}
