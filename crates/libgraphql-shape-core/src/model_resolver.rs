use crate::types::EnumModel;
use crate::types::FieldDescriptor;
use crate::types::ListTypeAnnotation;
use crate::types::Model;
use crate::types::NamedTypeAnnotation;
use crate::types::ObjectModel;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::TypeResolution;
use crate::GraphQLParseError;
use crate::ScalarType;
use crate::TypeEnvironment;
use libgraphql_shape_parser::ast;
use libgraphql_shape_parser::GraphQLParser;

/// Parses schema text in any spacing and resolves it against `env`.
///
/// ```
/// use libgraphql_shape_core::parse_schema;
/// use libgraphql_shape_core::ScalarType;
/// use libgraphql_shape_core::TypesMap;
///
/// let env = TypesMap::new().with("Character", "character-handle").unwrap();
/// let model = parse_schema("{
///     name: String!
///     friends: [Character]
/// }", &env).unwrap();
///
/// let object = model.as_object().unwrap();
/// let name = object.field("name").unwrap();
/// assert!(!name.nullable());
/// assert_eq!(
///     name.type_annotation().innermost_named_type_annotation().scalar(),
///     Some(ScalarType::String),
/// );
///
/// let friends = object.field("friends").unwrap();
/// assert!(friends.is_list());
/// assert_eq!(
///     friends.type_annotation().innermost_named_type_annotation().handle(),
///     Some(&"character-handle"),
/// );
/// ```
///
/// The parser accepts every spacing
/// [`normalize()`](libgraphql_shape_parser::normalize()) folds, so the raw text
/// is parsed as given and the result equals parsing `normalize(text)`.
/// Error positions refer to `text`.
pub fn parse_schema<E: TypeEnvironment + ?Sized>(
    text: &str,
    env: &E,
) -> Result<Model<E::Handle>, GraphQLParseError> {
    log::trace!("parsing {} bytes of schema text", text.len());
    let block = GraphQLParser::new(text).parse_schema_block()?;
    Ok(ModelResolver::new(env).resolve_block(&block))
}

/// Parses already-normalized schema text and resolves it against `env`.
///
/// Same as [`parse_schema()`]; error positions refer to `normalized_text`
/// exactly as given.
pub fn parse_normalized<E: TypeEnvironment + ?Sized>(
    normalized_text: &str,
    env: &E,
) -> Result<Model<E::Handle>, GraphQLParseError> {
    parse_schema(normalized_text, env)
}

/// Turns a parsed [`ast::SchemaBlock`] into a [`Model`].
///
/// Every type name occurrence is looked up exactly once: first in the
/// built-in scalar table, then in the environment. Referenced types are
/// never expanded, so self-referential and mutually-referential shapes
/// resolve like any other.
pub struct ModelResolver<'env, E: TypeEnvironment + ?Sized> {
    env: &'env E,
}

impl<'env, E: TypeEnvironment + ?Sized> ModelResolver<'env, E> {
    pub fn new(env: &'env E) -> Self {
        Self { env }
    }

    pub fn resolve_block(&self, block: &ast::SchemaBlock<'_>) -> Model<E::Handle> {
        match block {
            ast::SchemaBlock::Enum(enum_block) => {
                Model::Enum(self.resolve_enum_block(enum_block))
            },
            ast::SchemaBlock::Object(object_block) => {
                Model::Object(self.resolve_object_block(object_block))
            },
        }
    }

    pub fn resolve_object_block(
        &self,
        block: &ast::ObjectBlock<'_>,
    ) -> ObjectModel<E::Handle> {
        let mut model = ObjectModel::default();

        for field_def in &block.fields {
            let field = self.resolve_field(field_def);
            let replacement_type = field.type_annotation().to_string();
            if let Some(previous) = model.insert_field(field) {
                log::warn!(
                    "field `{}` is declared more than once; type `{}` replaces `{}`",
                    previous.name(),
                    replacement_type,
                    previous.type_annotation(),
                );
            }
        }

        let unresolved = model.unresolved_type_names();
        if unresolved.is_empty() {
            log::debug!("resolved object block with {} fields", model.len());
        } else {
            log::debug!(
                "resolved object block with {} fields; unresolved types: {}",
                model.len(),
                unresolved.join(", "),
            );
        }
        model
    }

    pub fn resolve_enum_block(&self, block: &ast::EnumBlock<'_>) -> EnumModel {
        let model = EnumModel::new(block.values.iter().map(|value| value.name.as_str()));
        if model.len() != block.values.len() {
            log::debug!(
                "enum block lists {} values, {} of them distinct",
                block.values.len(),
                model.len(),
            );
        }
        model
    }

    fn resolve_field(
        &self,
        field_def: &ast::FieldDefinition<'_>,
    ) -> FieldDescriptor<E::Handle> {
        let parameters = field_def
            .parameters
            .iter()
            .map(|param_def| {
                Parameter::new(
                    param_def.name.as_str(),
                    self.resolve_type_annotation(&param_def.value_type),
                )
            })
            .collect();

        let type_annotation = self.resolve_type_annotation(&field_def.field_type);
        log::trace!("resolved field `{}: {type_annotation}`", field_def.name.as_str());

        FieldDescriptor::new(field_def.name.as_str(), type_annotation, parameters)
    }

    pub fn resolve_type_annotation(
        &self,
        annotation: &ast::TypeAnnotation<'_>,
    ) -> TypeAnnotation<E::Handle> {
        match annotation {
            ast::TypeAnnotation::List(list) => ListTypeAnnotation::new(
                self.resolve_type_annotation(&list.element_type),
                list.nullability.is_nullable(),
            )
            .into(),

            ast::TypeAnnotation::Named(named) => NamedTypeAnnotation::new(
                named.name.as_str(),
                named.nullability.is_nullable(),
                self.resolve_type_name(named.name.as_str()),
            )
            .into(),
        }
    }

    /// Resolves one type name occurrence.
    ///
    /// Built-in scalar names never reach the environment.
    pub fn resolve_type_name(&self, name: &str) -> TypeResolution<E::Handle> {
        if let Some(scalar) = ScalarType::from_name(name) {
            return TypeResolution::Scalar(scalar);
        }

        match self.env.lookup(name) {
            Some(handle) => TypeResolution::Environment(handle),
            None => {
                log::trace!("type `{name}` is not in the type environment");
                TypeResolution::Unresolved
            },
        }
    }
}
