//! Various test utils.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use smallvec::smallvec;

/// Creates a mock token with the given kind and a zero-width span.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    GraphQLToken {
        kind,
        preceding_trivia: smallvec![],
        span: GraphQLSourceSpan::empty_at(SourcePosition::start_of_input()),
    }
}

pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

pub fn mock_eof_token() -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::Eof)
}

/// A token source that replays a fixed list of tokens.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

pub(super) fn parse(source: &str) -> Result<ast::SchemaBlock<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse_schema_block()
}

/// Parses `source` and asserts it is an object block.
pub(super) fn parse_object(source: &str) -> ast::ObjectBlock<'_> {
    match parse(source) {
        Ok(ast::SchemaBlock::Object(block)) => block,
        Ok(other) => panic!("expected an object block, got: {other:?}"),
        Err(error) => panic!("failed to parse `{source}`:\n{}", error.format_detailed(Some(source))),
    }
}

/// Parses `source` and asserts it is an enum block.
pub(super) fn parse_enum(source: &str) -> ast::EnumBlock<'_> {
    match parse(source) {
        Ok(ast::SchemaBlock::Enum(block)) => block,
        Ok(other) => panic!("expected an enum block, got: {other:?}"),
        Err(error) => panic!("failed to parse `{source}`:\n{}", error.format_detailed(Some(source))),
    }
}

/// Parses `source` and asserts that it fails.
pub(super) fn parse_error(source: &str) -> GraphQLParseError {
    match parse(source) {
        Ok(block) => panic!("expected `{source}` to be rejected, got: {block:?}"),
        Err(error) => error,
    }
}

pub(super) fn parse_error_kind(source: &str) -> GraphQLParseErrorKind {
    parse_error(source).kind().clone()
}
