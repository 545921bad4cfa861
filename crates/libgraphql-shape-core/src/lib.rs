//! Resolution of shape declarations into typed models.
//!
//! [`parse_schema()`] parses a schema text in any spacing with
//! [`libgraphql_shape_parser`] and resolves every type name it mentions:
//!
//! 1. against the built-in scalar table ([`ScalarType`]),
//! 2. then against a caller-supplied [`TypeEnvironment`],
//! 3. and otherwise to [`TypeResolution::Unresolved`].
//!
//! The result is a [`Model`]: an [`ObjectModel`] of
//! [`FieldDescriptor`]s or an [`EnumModel`].
//!
//! Types that refer to each other (or to themselves) are built through a
//! [`TypeRegistry`], whose handles are forward-declared [`NamedTypeRef`]s
//! dereferenced on demand.

mod model_resolver;
mod named_ref;
mod scalar_type;
mod type_environment;
mod type_registry;
pub mod types;
mod types_map;

pub use libgraphql_shape_parser::is_normalized;
pub use libgraphql_shape_parser::normalize;
pub use libgraphql_shape_parser::GraphQLParseError;
pub use libgraphql_shape_parser::GraphQLParseErrorKind;
pub use model_resolver::parse_normalized;
pub use model_resolver::parse_schema;
pub use model_resolver::ModelResolver;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use scalar_type::ScalarType;
pub use type_environment::EmptyTypeEnvironment;
pub use type_environment::TypeEnvironment;
pub use type_environment::TypeEnvironmentError;
pub use type_registry::NamedTypeRef;
pub use type_registry::TypeRegistry;
pub use types::EnumModel;
pub use types::FieldDescriptor;
pub use types::Model;
pub use types::ObjectModel;
pub use types::Parameter;
pub use types::TypeAnnotation;
pub use types::TypeResolution;
pub use types_map::TypesMap;

#[cfg(test)]
mod tests;
