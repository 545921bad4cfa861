use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// The resolved type of a field or parameter.
///
/// Nullability is carried on every level: `[Int!]` is a nullable
/// [`List`](Self::List) whose inner annotation is a non-null
/// [`Named`](Self::Named) `Int`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation<H> {
    List(ListTypeAnnotation<H>),
    Named(NamedTypeAnnotation<H>),
}

impl<H> TypeAnnotation<H> {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation<H>> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation<H>> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation<H> {
        match self {
            TypeAnnotation::List(list_annot) => list_annot
                .inner_type_annotation
                .innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot) => named_annot,
        }
    }

    /// Whether the outermost level is nullable.
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(list_annot) => list_annot.nullable,
            TypeAnnotation::Named(named_annot) => named_annot.nullable,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeAnnotation::List(_))
    }

    /// Check if two type annotations are structurally equal.
    ///
    /// Two type annotations are equivalent if they have:
    /// - Same structure (Named vs List) at every level
    /// - Same nullability at each level
    /// - Same innermost type name
    ///
    /// Resolutions are ignored, so annotations resolved against different
    /// environments (even with different handle types) can be compared.
    pub fn is_equivalent_to<H2>(&self, other: &TypeAnnotation<H2>) -> bool {
        match (self, other) {
            (Self::List(self_list), TypeAnnotation::List(other_list)) => {
                self_list.is_equivalent_to(other_list)
            },
            (Self::Named(self_named), TypeAnnotation::Named(other_named)) => {
                self_named.is_equivalent_to(other_named)
            },
            _ => false,
        }
    }
}

impl<H> From<ListTypeAnnotation<H>> for TypeAnnotation<H> {
    fn from(value: ListTypeAnnotation<H>) -> Self {
        Self::List(value)
    }
}

impl<H> From<NamedTypeAnnotation<H>> for TypeAnnotation<H> {
    fn from(value: NamedTypeAnnotation<H>) -> Self {
        Self::Named(value)
    }
}

/// Renders schema syntax, e.g. `[Int!]!`.
impl<H> std::fmt::Display for TypeAnnotation<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
