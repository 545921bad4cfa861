//! Tests for GraphQLTokenStream.

use crate::tests::utils;
use crate::token::GraphQLTokenKind;
use crate::GraphQLTokenStream;

#[test]
fn peek_does_not_consume() {
    let tokens = vec![
        utils::mock_name_token("a"),
        utils::mock_name_token("b"),
        utils::mock_eof_token(),
    ];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));

    let first = stream.peek().map(|t| t.kind.clone());
    let second = stream.peek().map(|t| t.kind.clone());
    assert_eq!(first, second);
    assert_eq!(first, Some(GraphQLTokenKind::name_borrowed("a")));

    let consumed = stream.consume().map(|t| t.kind);
    assert_eq!(consumed, first);
}

#[test]
fn peek_nth_buffers_only_what_it_needs() {
    let tokens = vec![
        utils::mock_name_token("a"),
        utils::mock_name_token("b"),
        utils::mock_name_token("c"),
        utils::mock_eof_token(),
    ];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));
    assert_eq!(stream.current_buffer_len(), 0);

    let third = stream.peek_nth(2).map(|t| t.kind.clone());
    assert_eq!(third, Some(GraphQLTokenKind::name_borrowed("c")));
    assert_eq!(stream.current_buffer_len(), 3);

    stream.consume();
    assert_eq!(stream.current_buffer_len(), 2);
}

#[test]
fn peek_past_end_returns_none() {
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(vec![
        utils::mock_eof_token(),
    ]));
    assert!(stream.peek_nth(5).is_none());
    assert!(stream.is_at_end());
    assert!(stream.consume().is_some());
    assert!(stream.consume().is_none());
    assert!(stream.is_at_end());
}

#[test]
fn is_at_end_false_before_eof() {
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(vec![
        utils::mock_token(GraphQLTokenKind::CurlyBraceOpen),
        utils::mock_eof_token(),
    ]));
    assert!(!stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
}
