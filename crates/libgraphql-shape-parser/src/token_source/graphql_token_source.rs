use crate::token::GraphQLToken;

/// Marker trait for lexers: iterators that produce [`GraphQLToken`]s.
///
/// Lookahead and buffering are handled by
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream); implementors only need
/// to:
/// - attach separator trivia (whitespace, `;`) to the following token
/// - emit [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   tokens for text they cannot lex
/// - finish with exactly one
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof) token
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
