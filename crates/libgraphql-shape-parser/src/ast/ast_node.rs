use crate::ByteSpan;

/// Behaviour shared by all syntax tree nodes.
pub trait AstNode {
    /// The bytes of the parsed text this node covers.
    fn span(&self) -> ByteSpan;

    /// Appends the node's original source text to `sink`.
    ///
    /// Does nothing if `source` is not the text the node was parsed from
    /// (i.e. the span is out of bounds).
    fn append_source(&self, sink: &mut String, source: &str) {
        if let Some(slice) = self.span().source_slice(source) {
            sink.push_str(slice);
        }
    }
}
