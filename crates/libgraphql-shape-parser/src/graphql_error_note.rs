use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// Additional context attached to a [`GraphQLParseError`](crate::GraphQLParseError)
/// or to a lexer error token.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// Optional span pointing at a related location (for example where an
    /// unclosed delimiter was opened).
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Most errors carry 0-2 notes, so these live inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
