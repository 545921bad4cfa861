//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str`.
//!
//! Names borrow directly from the input (`Cow::Borrowed`). Positions are
//! tracked as line, UTF-8 column, UTF-16 column and byte offset.
//!
//! ```rust
//! use libgraphql_shape_parser::token::GraphQLTokenKind;
//! use libgraphql_shape_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{a:Int!}")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::name_borrowed("a"),
//!     GraphQLTokenKind::Colon,
//!     GraphQLTokenKind::name_borrowed("Int"),
//!     GraphQLTokenKind::Bang,
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

/// Lexer over a `&str`. See the module documentation.
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,
    curr_col_utf8: usize,
    curr_col_utf16: usize,

    /// Set after `\r` so that a following `\n` does not count as a second
    /// line break.
    last_char_was_cr: bool,

    /// Separator trivia accumulated before the next token.
    pending_trivia: GraphQLTriviaTokenVec,

    /// Whether the `Eof` token has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes one character, advancing line/column/byte tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn make_token(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        span: GraphQLSourceSpan,
    ) -> GraphQLToken<'src> {
        GraphQLToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    pub(crate) fn is_whitespace(ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}')
    }

    fn is_name_start(ch: char) -> bool {
        ch == '_' || ch.is_ascii_alphabetic()
    }

    fn is_name_continue(ch: char) -> bool {
        ch == '_' || ch.is_ascii_alphanumeric()
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            let start = self.curr_position();

            let punctuator = match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    return self.make_token(GraphQLTokenKind::Eof, span);
                },

                Some(ch) if Self::is_whitespace(ch) => {
                    self.skip_whitespace();
                    let span = self.make_span(start);
                    self.pending_trivia
                        .push(GraphQLTriviaToken::Whitespace { span });
                    continue;
                },

                Some(';') => {
                    self.consume();
                    let span = self.make_span(start);
                    self.pending_trivia
                        .push(GraphQLTriviaToken::Semicolon { span });
                    continue;
                },

                Some(ch) => match GraphQLTokenKind::punctuator_from_char(ch) {
                    Some(kind) => kind,
                    None if Self::is_name_start(ch) => {
                        return self.lex_name(start);
                    },
                    None if ch.is_ascii_digit() => {
                        return self.lex_digit_prefixed_name(start);
                    },
                    None => {
                        return self.lex_invalid_character(start, ch);
                    },
                },
            };

            self.consume();
            let span = self.make_span(start);
            return self.make_token(punctuator, span);
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !Self::is_whitespace(ch) {
                break;
            }
            self.consume();
        }
    }

    /// Consumes `[_0-9A-Za-z]*` and returns the consumed slice.
    fn consume_name_chars(&mut self) -> &'src str {
        let start_offset = self.curr_byte_offset;
        while let Some(ch) = self.peek_char() {
            if !Self::is_name_continue(ch) {
                break;
            }
            self.consume();
        }
        &self.source[start_offset..self.curr_byte_offset]
    }

    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name = self.consume_name_chars();
        log::trace!("lexed name `{name}` at byte {}", start.byte_offset());
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::name_borrowed(name), span)
    }

    /// Names cannot start with a digit. The whole alphanumeric run is
    /// consumed so the error underlines the full would-be name.
    fn lex_digit_prefixed_name(
        &mut self,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        let text = self.consume_name_chars();
        let span = self.make_span(start);
        let kind = GraphQLTokenKind::error(
            format!("invalid name `{text}`"),
            smallvec![GraphQLErrorNote::help(
                "names must start with a letter or `_`",
            )],
        );
        self.make_token(kind, span)
    }

    fn lex_invalid_character(
        &mut self,
        start: SourcePosition,
        ch: char,
    ) -> GraphQLToken<'src> {
        self.consume();
        let span = self.make_span(start);
        let mut notes = smallvec![];
        if ch == '#' {
            notes.push(GraphQLErrorNote::general(
                "comments are not supported in shape declarations",
            ));
        } else if ch == '@' {
            notes.push(GraphQLErrorNote::general(
                "directives are not supported in shape declarations",
            ));
        } else if ch == '=' {
            notes.push(GraphQLErrorNote::general(
                "default values are not supported in shape declarations",
            ));
        }
        let kind = GraphQLTokenKind::error(
            format!("unexpected character `{}`", ch.escape_debug()),
            notes,
        );
        self.make_token(kind, span)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}
