//! Syntax tree produced by [`GraphQLParser`](crate::GraphQLParser).
//!
//! Every node records a [`ByteSpan`](crate::ByteSpan) into the parsed text.
//! Names borrow from that text where possible.

mod ast_node;
mod enum_block;
mod field_definition;
mod name;
mod object_block;
mod parameter_definition;
mod schema_block;
mod type_annotation;

pub use ast_node::AstNode;
pub use enum_block::EnumBlock;
pub use enum_block::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use name::Name;
pub use object_block::ObjectBlock;
pub use parameter_definition::ParameterDefinition;
pub use schema_block::SchemaBlock;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::Nullability;
pub use type_annotation::TypeAnnotation;
