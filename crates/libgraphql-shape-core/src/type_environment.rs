use crate::GraphQLParseError;
use crate::ScalarType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// A read-only mapping from type name to a caller-chosen handle.
///
/// The resolver consults the environment for every type name that is not a
/// built-in scalar, by exact name. Returning `None` yields
/// [`TypeResolution::Unresolved`](crate::TypeResolution::Unresolved) for
/// that occurrence; it never fails the parse.
///
/// Handles are cloned into the model once per occurrence. For cyclic or
/// self-referential shapes use a handle that can exist before the shape it
/// names is built, such as the [`NamedTypeRef`](crate::NamedTypeRef)s of a
/// [`TypeRegistry`](crate::TypeRegistry).
pub trait TypeEnvironment {
    type Handle: Clone + std::fmt::Debug;

    fn lookup(&self, name: &str) -> Option<Self::Handle>;
}

impl<H, S> TypeEnvironment for HashMap<String, H, S>
where
    H: Clone + std::fmt::Debug,
    S: BuildHasher,
{
    type Handle = H;

    fn lookup(&self, name: &str) -> Option<H> {
        self.get(name).cloned()
    }
}

impl<H, S> TypeEnvironment for IndexMap<String, H, S>
where
    H: Clone + std::fmt::Debug,
    S: BuildHasher,
{
    type Handle = H;

    fn lookup(&self, name: &str) -> Option<H> {
        self.get(name).cloned()
    }
}

impl<E: TypeEnvironment + ?Sized> TypeEnvironment for &E {
    type Handle = E::Handle;

    fn lookup(&self, name: &str) -> Option<Self::Handle> {
        (**self).lookup(name)
    }
}

/// An environment with no entries: only built-in scalars resolve.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyTypeEnvironment;

impl TypeEnvironment for EmptyTypeEnvironment {
    type Handle = std::convert::Infallible;

    fn lookup(&self, _name: &str) -> Option<Self::Handle> {
        None
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TypeEnvironmentError {
    #[error("`{0}` is a built-in scalar and cannot be redefined")]
    ShadowsBuiltinScalar(String),

    #[error("`{0}` is not a valid type name")]
    InvalidTypeName(String),

    #[error(transparent)]
    Parse(#[from] GraphQLParseError),
}

/// Checks that `name` could be written as a type in schema text and does
/// not collide with a built-in scalar.
pub(crate) fn validate_type_name(name: &str) -> Result<(), TypeEnvironmentError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|ch| ch == '_' || ch.is_ascii_alphabetic());
    if !valid_start || !chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric()) {
        return Err(TypeEnvironmentError::InvalidTypeName(name.to_string()));
    }

    if ScalarType::is_builtin_name(name) {
        return Err(TypeEnvironmentError::ShadowsBuiltinScalar(name.to_string()));
    }

    Ok(())
}
