use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A malformed-schema error with location information and contextual notes.
///
/// Returned whenever schema text violates the block grammar. The parse that
/// produced it is abandoned: callers never receive a partially-built block
/// alongside this error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary message, e.g. "expected `:`, found `Int`".
    message: String,

    /// Where the error was detected.
    ///
    /// - For unexpected tokens: the offending token.
    /// - For end-of-input errors: the end of the last consumed token.
    span: GraphQLSourceSpan,

    kind: GraphQLParseErrorKind,

    /// Context and suggestions, optionally pointing at related locations.
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Converts a lexer `Error` token into a parse error, keeping the lexer's
    /// message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self::with_notes(
            message,
            span,
            GraphQLParseErrorKind::LexerError,
            lexer_notes,
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Returns the slice of `source` that the primary span covers.
    ///
    /// Zero-width spans (end-of-input errors) yield `Some("")`.
    pub fn offending_text<'a>(&self, source: &'a str) -> Option<&'a str> {
        self.span.byte_span().source_slice(source)
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    pub fn add_note_with_span(
        &mut self,
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Formats this error as a multi-line diagnostic.
    ///
    /// ```text
    /// error: expected `:`, found `Int`
    ///   --> <input>:1:4
    ///    |
    ///  1 | {a Int}
    ///    |    ^^^
    ///    = help: declarations need a `:` between the name and its type, e.g. `a: Type`
    /// ```
    ///
    /// When `source` is `None` the snippet is omitted but the line/column is
    /// still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        output.push_str(&format!("  --> <input>:{line}:{column}\n"));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!(
                "   = {}: {}\n",
                note.kind.prefix(),
                note.message,
            ));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = Self::format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single line:
    ///
    /// ```text
    /// <input>:1:4: error: expected `:`, found `Int`
    /// ```
    pub fn format_oneline(&self) -> String {
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        format!("<input>:{line}:{column}: error: {}", self.message)
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_num = self.span.start_inclusive.line();
        let line_content = source.lines().nth(line_num)?;
        let display_line_num = line_num + 1;
        let width = display_line_num.to_string().len().max(2);

        let col_start = self.span.start_inclusive.col_utf8();
        let col_end =
            if self.span.end_exclusive.line() == line_num {
                self.span.end_exclusive.col_utf8()
            } else {
                col_start + 1
            };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", ""));
        output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
        output.push_str(&format!(
            "{:>width$} | {:>col_start$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
        ));
        Some(output)
    }

    fn format_note_snippet(
        source: &str,
        span: &GraphQLSourceSpan,
    ) -> Option<String> {
        let line_num = span.start_inclusive.line();
        let line_content = source.lines().nth(line_num)?;
        let display_line_num = line_num + 1;
        let width = display_line_num.to_string().len().max(2);
        let col_start = span.start_inclusive.col_utf8();

        let mut output = String::new();
        output.push_str(&format!(
            "     {display_line_num:>width$} | {line_content}\n"
        ));
        output.push_str(&format!(
            "     {:>width$} | {:>col_start$}-\n",
            "",
            "",
        ));
        Some(output)
    }
}
