use crate::ast::AstNode;
use crate::ast::Name;
use crate::ByteSpan;
use inherent::inherent;

/// Whether a type expression carried a trailing `!`.
///
/// Nullability is flattened onto each annotation node rather than modeled as
/// a wrapping variant, so redundant wrapping like `Int!!` is
/// unrepresentable. `[Int!]!` is a non-null list whose element annotation
/// is itself non-null.
#[derive(Clone, Debug, PartialEq)]
pub enum Nullability {
    NonNull {
        /// The `!` token's span.
        bang_span: ByteSpan,
    },
    Nullable,
}

impl Nullability {
    pub fn is_nullable(&self) -> bool {
        matches!(self, Nullability::Nullable)
    }
}

/// A type expression: `Name`, `Name!`, `[TypeExpr]` or `[TypeExpr]!`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    List(ListTypeAnnotation<'src>),
    Named(NamedTypeAnnotation<'src>),
}

impl<'src> TypeAnnotation<'src> {
    pub fn nullability(&self) -> &Nullability {
        match self {
            TypeAnnotation::List(list) => &list.nullability,
            TypeAnnotation::Named(named) => &named.nullability,
        }
    }

    /// Unwraps list nesting down to the named leaf.
    pub fn innermost_named(&self) -> &NamedTypeAnnotation<'src> {
        match self {
            TypeAnnotation::List(list) => list.element_type.innermost_named(),
            TypeAnnotation::Named(named) => named,
        }
    }

    /// Number of list levels wrapping the named leaf.
    pub fn list_depth(&self) -> usize {
        match self {
            TypeAnnotation::List(list) => 1 + list.element_type.list_depth(),
            TypeAnnotation::Named(_) => 0,
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation<'_> {
    pub fn span(&self) -> ByteSpan {
        match self {
            TypeAnnotation::List(list) => list.span,
            TypeAnnotation::Named(named) => named.span,
        }
    }
}

/// A named type reference (`Int`, `Character!`). The span includes the `!`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation<'src> {
    pub name: Name<'src>,
    pub nullability: Nullability,
    pub span: ByteSpan,
}

/// A list type reference (`[Int]`, `[Int!]!`). The span covers both
/// brackets and the trailing `!`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation<'src> {
    pub element_type: Box<TypeAnnotation<'src>>,
    pub nullability: Nullability,
    pub span: ByteSpan,
}
