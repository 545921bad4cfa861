use crate::ByteSpan;
use crate::SourcePosition;

/// A span of parsed text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self {
            start_inclusive: pos.clone(),
            end_exclusive: pos,
        }
    }

    /// Extracts a compact [`ByteSpan`], discarding line/column information.
    ///
    /// Offsets past `u32::MAX` saturate; use [`try_byte_span()`] to detect
    /// them.
    ///
    /// [`try_byte_span()`]: GraphQLSourceSpan::try_byte_span
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan {
            start: u32::try_from(self.start_inclusive.byte_offset()).unwrap_or(u32::MAX),
            end: u32::try_from(self.end_exclusive.byte_offset()).unwrap_or(u32::MAX),
        }
    }

    /// Like [`byte_span()`](GraphQLSourceSpan::byte_span), but `None` when
    /// either offset does not fit in a `u32`.
    pub fn try_byte_span(&self) -> Option<ByteSpan> {
        Some(ByteSpan {
            start: u32::try_from(self.start_inclusive.byte_offset()).ok()?,
            end: u32::try_from(self.end_exclusive.byte_offset()).ok()?,
        })
    }
}
