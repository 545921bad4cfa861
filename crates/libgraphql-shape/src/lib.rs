//! Compact, GraphQL-like shape declarations for describing typed values.
//!
//! A schema text is either an object block or an enum block:
//!
//! ```
//! use libgraphql_shape::parse_schema;
//! use libgraphql_shape::EmptyTypeEnvironment;
//!
//! let model = parse_schema("{
//!     id: ID!
//!     roll(numRolls: Int!, sides: Int): [Int]
//! }", &EmptyTypeEnvironment).unwrap();
//!
//! let roll = model.as_object().unwrap().field("roll").unwrap();
//! assert!(roll.is_parameterized());
//! assert_eq!(roll.type_annotation().to_string(), "[Int]");
//!
//! let episode = parse_schema("enum{NEWHOPE EMPIRE JEDI}", &EmptyTypeEnvironment).unwrap();
//! assert!(episode.as_enum().unwrap().contains("JEDI"));
//! ```
//!
//! Type names other than the built-in scalars are looked up in a
//! [`TypeEnvironment`]. Shapes that refer to one another are easiest to
//! build with a [`TypeRegistry`].
//!
//! The lexer, parser and syntax tree are available under [`parser`].

pub use libgraphql_shape_core::*;

/// Normalizer, lexer, recursive descent parser and syntax tree for schema
/// text, independent of any type environment.
pub mod parser {
    pub use libgraphql_shape_parser::*;
}

#[cfg(test)]
mod tests;
