/// Categorizes malformed-schema errors for programmatic handling.
///
/// Every kind rejects the whole schema block. The `#[error(...)]` messages
/// are terse; the full human-readable text lives in
/// [`GraphQLParseError::message()`](crate::GraphQLParseError::message).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// ```text
    /// {a Int}
    ///    ^^^ expected `:`, found `Int`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The text ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer rejected a character or token (e.g. `{a: In$t}` or a name
    /// that starts with a digit). The lexer's message and notes are carried
    /// on the parent error.
    #[error("lexer error")]
    LexerError,

    /// A `{`, `[` or `(` was opened but the input ended first.
    ///
    /// The error's notes point at the opening delimiter.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A closing delimiter that does not match the innermost open one.
    ///
    /// ```text
    /// {a: [Int}
    ///         ^ expected `]`, found `}`
    /// ```
    #[error("mismatched delimiter")]
    MismatchedDelimiter {
        expected: String,
        found: String,
    },

    /// Two declarations were written back to back without a separator.
    ///
    /// ```text
    /// {a:[Int]b:Int}
    ///         ^ expected a separator before `b`
    /// ```
    #[error("missing separator before `{found}`")]
    MissingSeparator {
        found: String,
    },

    /// A construct that must not be empty, e.g. a `()` parameter list.
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// Input continues after the schema block was closed.
    #[error("trailing input after schema block")]
    TrailingInput,

    /// Syntax problems without a dedicated variant (e.g. nesting that
    /// exceeds the parser's recursion limit).
    #[error("invalid syntax")]
    InvalidSyntax,
}
