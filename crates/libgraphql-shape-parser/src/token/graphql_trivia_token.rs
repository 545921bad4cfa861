use crate::GraphQLSourceSpan;

/// Text between tokens that carries no meaning of its own beyond separating
/// declarations.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken {
    /// A run of spaces, tabs, or line breaks.
    Whitespace {
        span: GraphQLSourceSpan,
    },

    /// A `;`, accepted as an explicit declaration separator.
    Semicolon {
        span: GraphQLSourceSpan,
    },
}

impl GraphQLTriviaToken {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Self::Whitespace { span } | Self::Semicolon { span } => span,
        }
    }
}
