//! A parser for compact, GraphQL-like shape declarations.
//!
//! Two kinds of schema text are understood:
//!
//! - Object blocks: `{id: ID! friends: [Character] roll(numRolls: Int!): [Int]}`
//! - Enum blocks: `enum{NEWHOPE EMPIRE JEDI}`
//!
//! [`normalize()`] canonicalizes raw text into a single line.
//! [`GraphQLParser`] accepts either form and produces an
//! [`ast::SchemaBlock`] whose spans point into the text it was given. Any structural
//! problem rejects the whole block with a [`GraphQLParseError`]; no partial
//! syntax tree is ever returned.
//!
//! This crate knows nothing about type environments. Resolving type names to
//! scalars or caller-supplied handles happens in `libgraphql-shape-core`.

pub mod ast;
mod byte_span;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_token_stream;
mod normalize;
mod source_position;
pub mod token;
pub mod token_source;

pub use byte_span::ByteSpan;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_token_stream::GraphQLTokenStream;
pub use normalize::is_normalized;
pub use normalize::normalize;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
