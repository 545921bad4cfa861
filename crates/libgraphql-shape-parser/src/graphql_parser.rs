//! Recursive descent parser for shape schema text.
//!
//! [`GraphQLParser`] works over any token source implementing
//! [`GraphQLTokenSource`]. Each grammar rule has a `parse_*` method returning
//! `Result<Node, GraphQLParseError>`:
//!
//! ```text
//! Schema     ::= '{' Content? '}' | 'enum' '{' EnumContent? '}'
//! Content    ::= Field (SEP Field)*
//! Field      ::= Name ('(' ParamList ')')? ':' TypeExpr
//! ParamList  ::= Param (',' Param)*
//! Param      ::= Name ':' TypeExpr
//! TypeExpr   ::= '[' TypeExpr ']' '!'? | Name '!'?
//! EnumContent::= Name (SEP Name)*
//! ```
//!
//! `SEP` is whitespace or `;` (see [`normalize()`](crate::normalize())).
//!
//! The first structural error aborts the parse. A stack of open delimiters
//! is kept so that unclosed and mismatched delimiter errors can point back
//! at the opener.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::ByteSpan;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;
use smallvec::SmallVec;

type ParseOutcome<T> = Result<T, GraphQLParseError>;

// =============================================================================
// Delimiter tracking
// =============================================================================

/// What a delimiter was opened for.
#[derive(Debug, Clone, Copy)]
enum DelimiterContext {
    /// `{ field ... }`
    ObjectBlock,
    /// `enum{ VALUE ... }`
    EnumBlock,
    /// `(name: Type, ...)` after a field name
    ParameterDefinitions,
    /// `[Type]`
    ListType,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::ObjectBlock => "object block",
            DelimiterContext::EnumBlock => "enum block",
            DelimiterContext::ParameterDefinitions => "parameter list",
            DelimiterContext::ListType => "list type",
        }
    }

    fn opening_display(&self) -> &'static str {
        match self {
            DelimiterContext::ObjectBlock | DelimiterContext::EnumBlock => "{",
            DelimiterContext::ParameterDefinitions => "(",
            DelimiterContext::ListType => "[",
        }
    }

    fn closing_kind(&self) -> GraphQLTokenKind<'static> {
        match self {
            DelimiterContext::ObjectBlock | DelimiterContext::EnumBlock => {
                GraphQLTokenKind::CurlyBraceClose
            },
            DelimiterContext::ParameterDefinitions => GraphQLTokenKind::ParenClose,
            DelimiterContext::ListType => GraphQLTokenKind::SquareBracketClose,
        }
    }
}

#[derive(Debug, Clone)]
struct OpenDelimiter {
    span: GraphQLSourceSpan,
    context: DelimiterContext,
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for object and enum blocks.
///
/// ```
/// use libgraphql_shape_parser::ast;
/// use libgraphql_shape_parser::GraphQLParser;
///
/// let block = GraphQLParser::new("{roll(numRolls:Int!):[Int]}")
///     .parse_schema_block()
///     .unwrap();
///
/// let ast::SchemaBlock::Object(object) = block else {
///     panic!("expected an object block");
/// };
/// assert_eq!(object.fields[0].name.as_str(), "roll");
/// assert_eq!(object.fields[0].parameters.len(), 1);
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Open delimiters, innermost last.
    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Nesting depth of `parse_type_annotation` calls.
    recursion_depth: usize,

    /// End of the most recently consumed token. Anchors end-of-input errors
    /// and node spans.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over a string-like source (`&str`, `&String`, ...).
    ///
    /// Syntax tree spans use `u32` byte offsets, so text reaching past
    /// `u32::MAX` bytes is rejected with
    /// [`GraphQLParseErrorKind::InvalidSyntax`].
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum list nesting depth (`[[[...]]]`).
    ///
    /// Keeps adversarial input like a few thousand `[` from overflowing the
    /// stack. Real shapes rarely nest lists more than two or three deep.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    // =========================================================================
    // Public API
    // =========================================================================

    /// Parses a complete schema text: exactly one object or enum block and
    /// nothing after it.
    pub fn parse_schema_block(mut self) -> ParseOutcome<ast::SchemaBlock<'src>> {
        let block =
            if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
                ast::SchemaBlock::Object(self.parse_object_block()?)
            } else if self.peek_is_enum_keyword() {
                ast::SchemaBlock::Enum(self.parse_enum_block()?)
            } else {
                return Err(self.unexpected_error(&["`{`", "`enum{`"]));
            };

        self.expect_end_of_input()?;
        Ok(block)
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    fn parse_object_block(&mut self) -> ParseOutcome<ast::ObjectBlock<'src>> {
        let open_token = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let start = self.byte_span_of(&open_token.span)?.start;
        self.push_delimiter(open_token.span, DelimiterContext::ObjectBlock);

        let mut fields: Vec<ast::FieldDefinition<'src>> = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
                break;
            }
            if !self.peek_is_name() {
                return Err(self.unexpected_error(&["field name", "`}`"]));
            }
            if !fields.is_empty() {
                self.expect_separator("fields")?;
            }

            let field = self.parse_field_definition()?;
            log::trace!(
                "parsed field `{}` ({} parameters)",
                field.name.as_str(),
                field.parameters.len(),
            );
            fields.push(field);
        }

        self.expect_closing_delimiter()?;
        log::debug!("parsed object block with {} field declarations", fields.len());

        Ok(ast::ObjectBlock {
            fields,
            span: ByteSpan::new(start, self.last_end_byte()?),
        })
    }

    fn parse_enum_block(&mut self) -> ParseOutcome<ast::EnumBlock<'src>> {
        let keyword = self.expect_name("`enum`")?;
        let start = keyword.span.start;

        let open_token = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open_token.span, DelimiterContext::EnumBlock);

        let mut values: Vec<ast::EnumValueDefinition<'src>> = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
                break;
            }
            if !self.peek_is_name() {
                return Err(self.unexpected_error(&["enum value", "`}`"]));
            }
            if !values.is_empty() {
                self.expect_separator("enum values")?;
            }

            let name = self.expect_name("enum value")?;
            values.push(ast::EnumValueDefinition { name });
        }

        self.expect_closing_delimiter()?;
        log::debug!("parsed enum block with {} values", values.len());

        Ok(ast::EnumBlock {
            values,
            span: ByteSpan::new(start, self.last_end_byte()?),
        })
    }

    // =========================================================================
    // Fields and parameters
    // =========================================================================

    fn parse_field_definition(&mut self) -> ParseOutcome<ast::FieldDefinition<'src>> {
        let name = self.expect_name("field name")?;

        let parameters =
            if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                self.parse_parameter_definitions()?
            } else {
                Vec::new()
            };

        self.expect_colon_after(&name)?;
        let field_type = self.parse_type_annotation()?;

        Ok(ast::FieldDefinition {
            span: ByteSpan::new(name.span.start, self.last_end_byte()?),
            name,
            parameters,
            field_type,
        })
    }

    /// Parses `(name: Type, ...)`. An empty `()` is rejected.
    fn parse_parameter_definitions(
        &mut self,
    ) -> ParseOutcome<Vec<ast::ParameterDefinition<'src>>> {
        let open_token = self.expect(&GraphQLTokenKind::ParenOpen)?;
        let open_span = open_token.span.clone();
        self.push_delimiter(open_token.span, DelimiterContext::ParameterDefinitions);

        if let Some(close_token) = self.consume_if(&GraphQLTokenKind::ParenClose) {
            let mut error = GraphQLParseError::new(
                "parameter list cannot be empty",
                GraphQLSourceSpan::new(
                    open_span.start_inclusive,
                    close_token.span.end_exclusive,
                ),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "parameter list".to_string(),
                },
            );
            error.add_help("omit the parentheses for a field without parameters");
            return Err(error);
        }

        let mut parameters = Vec::new();
        loop {
            parameters.push(self.parse_parameter_definition()?);

            if self.consume_if(&GraphQLTokenKind::Comma).is_some() {
                continue;
            }
            if self.peek_is(&GraphQLTokenKind::ParenClose) {
                break;
            }

            let mut error = self.unexpected_error(&["`,`", "`)`"]);
            if self.peek_is_name() {
                error.add_help("separate parameters with `,`");
            }
            return Err(error);
        }

        self.expect_closing_delimiter()?;
        Ok(parameters)
    }

    fn parse_parameter_definition(
        &mut self,
    ) -> ParseOutcome<ast::ParameterDefinition<'src>> {
        let name = self.expect_name("parameter name")?;
        self.expect_colon_after(&name)?;
        let value_type = self.parse_type_annotation()?;

        Ok(ast::ParameterDefinition {
            span: ByteSpan::new(name.span.start, self.last_end_byte()?),
            name,
            value_type,
        })
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    fn parse_type_annotation(&mut self) -> ParseOutcome<ast::TypeAnnotation<'src>> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(
        &mut self,
    ) -> ParseOutcome<ast::TypeAnnotation<'src>> {
        if let Some(open_token) = self.consume_if(&GraphQLTokenKind::SquareBracketOpen) {
            let start = self.byte_span_of(&open_token.span)?.start;
            self.push_delimiter(open_token.span, DelimiterContext::ListType);

            let element_type = self.parse_type_annotation()?;
            self.expect_closing_delimiter()?;
            let nullability = self.parse_nullability()?;

            return Ok(ast::TypeAnnotation::List(ast::ListTypeAnnotation {
                element_type: Box::new(element_type),
                nullability,
                span: ByteSpan::new(start, self.last_end_byte()?),
            }));
        }

        let name = self.expect_name("type name")?;
        let nullability = self.parse_nullability()?;
        Ok(ast::TypeAnnotation::Named(ast::NamedTypeAnnotation {
            span: ByteSpan::new(name.span.start, self.last_end_byte()?),
            name,
            nullability,
        }))
    }

    fn parse_nullability(&mut self) -> ParseOutcome<ast::Nullability> {
        match self.consume_if(&GraphQLTokenKind::Bang) {
            Some(bang) => Ok(ast::Nullability::NonNull {
                bang_span: self.byte_span_of(&bang.span)?,
            }),
            None => Ok(ast::Nullability::Nullable),
        }
    }

    fn enter_recursion(&mut self) -> ParseOutcome<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let span = self.current_span();
            return Err(GraphQLParseError::new(
                "maximum nesting depth exceeded",
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Consumes the next token if it has the given kind (payload ignored).
    fn consume_if(
        &mut self,
        kind: &GraphQLTokenKind<'_>,
    ) -> Option<GraphQLToken<'src>> {
        if self.peek_is(kind) {
            self.consume_token()
        } else {
            None
        }
    }

    fn expect(
        &mut self,
        expected_kind: &GraphQLTokenKind<'_>,
    ) -> ParseOutcome<GraphQLToken<'src>> {
        match self.consume_if(expected_kind) {
            Some(token) => Ok(token),
            None => {
                let expected = format!("`{}`", expected_kind.display());
                Err(self.unexpected_error(&[expected.as_str()]))
            },
        }
    }

    /// Expects a name token. `what` describes the name's role in errors
    /// (e.g. "type name").
    fn expect_name(&mut self, what: &str) -> ParseOutcome<ast::Name<'src>> {
        if !self.peek_is_name() {
            return Err(self.unexpected_error(&[what]));
        }

        match self.consume_token() {
            Some(GraphQLToken {
                kind: GraphQLTokenKind::Name(value),
                span,
                ..
            }) => Ok(ast::Name {
                span: self.byte_span_of(&span)?,
                value,
            }),
            _ => Err(self.unexpected_error(&[what])),
        }
    }

    fn expect_colon_after(&mut self, name: &ast::Name<'src>) -> ParseOutcome<()> {
        if self.consume_if(&GraphQLTokenKind::Colon).is_some() {
            return Ok(());
        }

        let mut error = self.unexpected_error(&["`:`"]);
        if matches!(error.kind(), GraphQLParseErrorKind::UnexpectedToken { .. }) {
            error.add_help(format!(
                "declarations need a `:` between the name and its type, e.g. \
                `{}: Type`",
                name.as_str(),
            ));
        }
        Err(error)
    }

    /// Requires the upcoming declaration to be preceded by whitespace or `;`.
    fn expect_separator(&mut self, declarations: &str) -> ParseOutcome<()> {
        let Some(token) = self.token_stream.peek() else {
            return Ok(());
        };
        if token.is_preceded_by_separator() {
            return Ok(());
        }

        let found = token.kind.display();
        let span = token.span.clone();
        let mut error = GraphQLParseError::new(
            format!("expected a separator before `{found}`"),
            span,
            GraphQLParseErrorKind::MissingSeparator { found },
        );
        error.add_help(format!("separate {declarations} with a space"));
        Err(error)
    }

    /// Consumes the closing delimiter matching the innermost open one.
    fn expect_closing_delimiter(&mut self) -> ParseOutcome<GraphQLToken<'src>> {
        let closing_kind = self
            .delimiter_stack
            .last()
            .map(|open| open.context.closing_kind());
        let Some(closing_kind) = closing_kind else {
            return Err(GraphQLParseError::new(
                "no delimiter is open",
                self.current_span(),
                GraphQLParseErrorKind::InvalidSyntax,
            ));
        };

        let token = self.expect(&closing_kind)?;
        self.pop_delimiter();
        Ok(token)
    }

    fn expect_end_of_input(&mut self) -> ParseOutcome<()> {
        let Some(token) = self.token_stream.peek().cloned() else {
            return Ok(());
        };

        match token.kind {
            GraphQLTokenKind::Eof => Ok(()),
            GraphQLTokenKind::Error { message, error_notes } => Err(
                GraphQLParseError::from_lexer_error(message, token.span, error_notes),
            ),
            kind => {
                let mut error = GraphQLParseError::new(
                    format!(
                        "unexpected `{}` after the end of the schema block",
                        kind.display(),
                    ),
                    token.span,
                    GraphQLParseErrorKind::TrailingInput,
                );
                error.add_note("schema text holds exactly one object or enum block");
                Err(error)
            },
        }
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        match self.token_stream.peek() {
            Some(token) => token.kind.same_kind_as(kind),
            None => false,
        }
    }

    fn peek_is_name(&mut self) -> bool {
        matches!(
            self.token_stream.peek().map(|token| &token.kind),
            Some(GraphQLTokenKind::Name(_)),
        )
    }

    fn peek_is_enum_keyword(&mut self) -> bool {
        matches!(
            self.token_stream.peek().and_then(|token| token.kind.as_name()),
            Some("enum"),
        )
    }

    // =========================================================================
    // Error construction
    // =========================================================================

    /// Builds the error for "the next token is not one of `expected`".
    ///
    /// Picks the most specific kind available: lexer errors, end of input
    /// (reported as an unclosed delimiter when one is open), closing
    /// delimiters that do not match the innermost opener, and finally a
    /// plain unexpected token.
    fn unexpected_error(&mut self, expected: &[&str]) -> GraphQLParseError {
        let expected: Vec<String> =
            expected.iter().map(|s| s.to_string()).collect();

        let Some(token) = self.token_stream.peek().cloned() else {
            return self.eof_error(expected);
        };

        match token.kind {
            GraphQLTokenKind::Eof => self.eof_error(expected),

            GraphQLTokenKind::Error { message, error_notes } => {
                GraphQLParseError::from_lexer_error(message, token.span, error_notes)
            },

            kind => {
                let found = kind.display();
                if kind.is_closing_delimiter()
                    && let Some(open) = self.delimiter_stack.last()
                    && !open.context.closing_kind().same_kind_as(&kind)
                {
                    let expected_close = open.context.closing_kind().display();
                    let mut error = GraphQLParseError::new(
                        format!("expected `{expected_close}`, found `{found}`"),
                        token.span,
                        GraphQLParseErrorKind::MismatchedDelimiter {
                            expected: expected_close,
                            found,
                        },
                    );
                    error.add_note_with_span(
                        format!(
                            "{} opened with `{}` here",
                            open.context.description(),
                            open.context.opening_display(),
                        ),
                        open.span.clone(),
                    );
                    return error;
                }

                GraphQLParseError::new(
                    format!("expected {}, found `{found}`", expected.join(" or ")),
                    token.span,
                    GraphQLParseErrorKind::UnexpectedToken { expected, found },
                )
            },
        }
    }

    fn eof_error(&self, expected: Vec<String>) -> GraphQLParseError {
        let span = self.eof_span();

        if let Some(open) = self.delimiter_stack.last() {
            let delimiter = open.context.opening_display();
            let mut error = GraphQLParseError::new(
                format!("unclosed `{delimiter}`"),
                span,
                GraphQLParseErrorKind::UnclosedDelimiter {
                    delimiter: delimiter.to_string(),
                },
            );
            error.add_note_with_span(
                format!("{} opened here", open.context.description()),
                open.span.clone(),
            );
            return error;
        }

        GraphQLParseError::new(
            format!("expected {}, found end of input", expected.join(" or ")),
            span,
            GraphQLParseErrorKind::UnexpectedEof { expected },
        )
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn push_delimiter(&mut self, span: GraphQLSourceSpan, context: DelimiterContext) {
        self.delimiter_stack.push(OpenDelimiter { span, context });
    }

    fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Consumes the next token, remembering where it ended.
    fn consume_token(&mut self) -> Option<GraphQLToken<'src>> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive.clone());
        }
        token
    }

    fn last_end_byte(&self) -> ParseOutcome<u32> {
        let Some(pos) = &self.last_end_position else {
            return Ok(0);
        };
        let span = GraphQLSourceSpan::empty_at(pos.clone());
        Ok(self.byte_span_of(&span)?.end)
    }

    /// Compacts `span` into a [`ByteSpan`], rejecting offsets past
    /// `u32::MAX`.
    fn byte_span_of(&self, span: &GraphQLSourceSpan) -> ParseOutcome<ByteSpan> {
        span.try_byte_span().ok_or_else(|| {
            let mut error = GraphQLParseError::new(
                "schema text is too large",
                span.clone(),
                GraphQLParseErrorKind::InvalidSyntax,
            );
            error.add_note(format!(
                "byte offsets past {} cannot be represented",
                u32::MAX,
            ));
            error
        })
    }

    /// Zero-width span at the end of the last consumed token.
    fn eof_span(&self) -> GraphQLSourceSpan {
        GraphQLSourceSpan::empty_at(
            self.last_end_position
                .clone()
                .unwrap_or_else(SourcePosition::start_of_input),
        )
    }

    /// Span of the next token, or the EOF span when none remain.
    fn current_span(&mut self) -> GraphQLSourceSpan {
        match self.token_stream.peek() {
            Some(token) => token.span.clone(),
            None => self.eof_span(),
        }
    }
}
