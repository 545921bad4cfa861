use crate::GraphQLErrorNotes;
use std::borrow::Cow;

/// The kind of a token in shape schema text.
///
/// Only the punctuation the block grammar uses is recognised. Anything else
/// surfaces as an [`Error`](Self::Error) token so the parser can reject the
/// block with a precise location.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    /// A name matching `[_A-Za-z][_0-9A-Za-z]*`.
    ///
    /// Borrowed from the source text by `StrGraphQLTokenSource`.
    Name(Cow<'src, str>),

    /// End of input. Its token carries any trailing trivia.
    Eof,

    /// A lexer error. The parser turns the first one it meets into a
    /// [`GraphQLParseError`](crate::GraphQLParseError).
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the name's text if this is a `Name` token.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            GraphQLTokenKind::Name(name) => Some(name.as_ref()),
            _ => None,
        }
    }

    /// `true` for `}`, `)` and `]`.
    pub fn is_closing_delimiter(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::CurlyBraceClose
                | GraphQLTokenKind::ParenClose
                | GraphQLTokenKind::SquareBracketClose
        )
    }

    /// Maps a punctuator character to its token kind.
    ///
    /// This is the one table of punctuators shared by the lexer and
    /// [`normalize()`](crate::normalize()).
    pub fn punctuator_from_char(ch: char) -> Option<GraphQLTokenKind<'static>> {
        match ch {
            '!' => Some(GraphQLTokenKind::Bang),
            ':' => Some(GraphQLTokenKind::Colon),
            ',' => Some(GraphQLTokenKind::Comma),
            '{' => Some(GraphQLTokenKind::CurlyBraceOpen),
            '}' => Some(GraphQLTokenKind::CurlyBraceClose),
            '(' => Some(GraphQLTokenKind::ParenOpen),
            ')' => Some(GraphQLTokenKind::ParenClose),
            '[' => Some(GraphQLTokenKind::SquareBracketOpen),
            ']' => Some(GraphQLTokenKind::SquareBracketClose),
            _ => None,
        }
    }

    /// Human-readable rendering used in error messages.
    pub fn display(&self) -> String {
        match self {
            GraphQLTokenKind::Bang => "!".to_string(),
            GraphQLTokenKind::Colon => ":".to_string(),
            GraphQLTokenKind::Comma => ",".to_string(),
            GraphQLTokenKind::CurlyBraceClose => "}".to_string(),
            GraphQLTokenKind::CurlyBraceOpen => "{".to_string(),
            GraphQLTokenKind::ParenClose => ")".to_string(),
            GraphQLTokenKind::ParenOpen => "(".to_string(),
            GraphQLTokenKind::SquareBracketClose => "]".to_string(),
            GraphQLTokenKind::SquareBracketOpen => "[".to_string(),
            GraphQLTokenKind::Name(name) => name.to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => {
                format!("tokenization error: {message}")
            },
        }
    }

    /// Compares variants, ignoring payloads (`Name("a")` matches `Name("b")`).
    pub fn same_kind_as(&self, other: &GraphQLTokenKind<'_>) -> bool {
        match self {
            GraphQLTokenKind::Name(_) => matches!(other, GraphQLTokenKind::Name(_)),
            GraphQLTokenKind::Error { .. } => {
                matches!(other, GraphQLTokenKind::Error { .. })
            },
            GraphQLTokenKind::Bang => matches!(other, GraphQLTokenKind::Bang),
            GraphQLTokenKind::Colon => matches!(other, GraphQLTokenKind::Colon),
            GraphQLTokenKind::Comma => matches!(other, GraphQLTokenKind::Comma),
            GraphQLTokenKind::CurlyBraceClose => {
                matches!(other, GraphQLTokenKind::CurlyBraceClose)
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                matches!(other, GraphQLTokenKind::CurlyBraceOpen)
            },
            GraphQLTokenKind::ParenClose => {
                matches!(other, GraphQLTokenKind::ParenClose)
            },
            GraphQLTokenKind::ParenOpen => {
                matches!(other, GraphQLTokenKind::ParenOpen)
            },
            GraphQLTokenKind::SquareBracketClose => {
                matches!(other, GraphQLTokenKind::SquareBracketClose)
            },
            GraphQLTokenKind::SquareBracketOpen => {
                matches!(other, GraphQLTokenKind::SquareBracketOpen)
            },
            GraphQLTokenKind::Eof => matches!(other, GraphQLTokenKind::Eof),
        }
    }
}
