use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// Most tokens are preceded by at most one trivia run.
pub type GraphQLTriviaTokenVec = SmallVec<[GraphQLTriviaToken; 1]>;

/// A token with its source span and any trivia that preceded it.
///
/// Trivia is attached to the *following* token so the parser can decide
/// whether two declarations were separated without tracking whitespace
/// itself.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub preceding_trivia: GraphQLTriviaTokenVec,
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }

    /// Whether a declaration separator (whitespace or `;`) came directly
    /// before this token.
    pub fn is_preceded_by_separator(&self) -> bool {
        !self.preceding_trivia.is_empty()
    }
}
