//! The resolved model of a schema text.

mod enum_model;
mod field_descriptor;
mod list_type_annotation;
mod model;
mod named_type_annotation;
mod object_model;
mod parameter;
mod type_annotation;
mod type_resolution;

pub use enum_model::EnumModel;
pub use field_descriptor::FieldDescriptor;
pub use list_type_annotation::ListTypeAnnotation;
pub use model::Model;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_model::ObjectModel;
pub use parameter::Parameter;
pub use type_annotation::TypeAnnotation;
pub use type_resolution::TypeResolution;
