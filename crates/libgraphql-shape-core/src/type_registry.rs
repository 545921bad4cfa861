use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::parse_schema;
use crate::type_environment::validate_type_name;
use crate::types::Model;
use crate::TypeEnvironment;
use crate::TypeEnvironmentError;
use indexmap::IndexMap;

/// A handle to a model owned by a [`TypeRegistry`].
///
/// Created by [`TypeRegistry::declare()`] before the model exists, which is
/// what lets a shape refer to itself or to a shape defined later.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct NamedTypeRef(NamedRef<TypeRegistry, Model<NamedTypeRef>>);

impl NamedTypeRef {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Model::<NamedTypeRef>::named_ref(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Looks the referenced model up in `registry`.
    pub fn deref<'a>(
        &self,
        registry: &'a TypeRegistry,
    ) -> Result<&'a Model<NamedTypeRef>, DerefByNameError> {
        self.0.deref(registry)
    }
}

/// Owns a set of named models that may refer to one another.
///
/// ```
/// use libgraphql_shape_core::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// registry.declare("Episode").unwrap();
/// registry.parse_and_define("Character", "{
///     name: String!
///     friends: [Character]
///     appearsIn: [Episode]
/// }").unwrap();
/// registry.parse_and_define("Episode", "enum{NEWHOPE EMPIRE JEDI}").unwrap();
///
/// let character = registry.get("Character").unwrap().as_object().unwrap();
/// let friend_ref = character
///     .field("friends")
///     .unwrap()
///     .type_annotation()
///     .innermost_named_type_annotation()
///     .handle()
///     .unwrap();
/// assert_eq!(friend_ref.deref(&registry).unwrap(), registry.get("Character").unwrap());
/// assert!(registry.undefined_names().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeRegistry {
    /// `None` for names that are declared but not yet defined.
    types: IndexMap<String, Option<Model<NamedTypeRef>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `name` resolvable and returns a handle to it, whether or not a
    /// model has been defined for it yet.
    pub fn declare(&mut self, name: &str) -> Result<NamedTypeRef, TypeEnvironmentError> {
        validate_type_name(name)?;
        if !self.types.contains_key(name) {
            log::trace!("declared type `{name}`");
            self.types.insert(name.to_string(), None);
        }
        Ok(NamedTypeRef::new(name))
    }

    /// Stores `model` under `name`, returning the model it replaced.
    pub fn define(
        &mut self,
        name: &str,
        model: Model<NamedTypeRef>,
    ) -> Result<Option<Model<NamedTypeRef>>, TypeEnvironmentError> {
        validate_type_name(name)?;
        let previous = self.types.insert(name.to_string(), Some(model)).flatten();
        if previous.is_some() {
            log::warn!("type `{name}` was redefined; the earlier definition is replaced");
        }
        Ok(previous)
    }

    /// Declares `name`, then parses `text` against this registry and stores
    /// the result under `name`.
    ///
    /// Because `name` is declared first, the text may refer to itself. If
    /// parsing fails `name` stays declared.
    pub fn parse_and_define(
        &mut self,
        name: &str,
        text: &str,
    ) -> Result<&Model<NamedTypeRef>, TypeEnvironmentError> {
        self.declare(name)?;
        let model = parse_schema(text, &*self)?;

        let slot = self.types.entry(name.to_string()).or_default();
        if slot.is_some() {
            log::warn!("type `{name}` was redefined; the earlier definition is replaced");
        }
        let model: &Model<NamedTypeRef> = slot.insert(model);
        Ok(model)
    }

    pub fn get(&self, name: &str) -> Option<&Model<NamedTypeRef>> {
        self.types.get(name).and_then(Option::as_ref)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Declared names with no model yet, in declaration order.
    pub fn undefined_names(&self) -> Vec<&str> {
        self.types
            .iter()
            .filter(|(_, model)| model.is_none())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// All declared names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeEnvironment for TypeRegistry {
    type Handle = NamedTypeRef;

    /// Declared names resolve even before they are defined.
    fn lookup(&self, name: &str) -> Option<NamedTypeRef> {
        self.is_declared(name).then(|| NamedTypeRef::new(name))
    }
}

impl DerefByName for Model<NamedTypeRef> {
    type Source = TypeRegistry;

    fn deref_name<'a>(
        source: &'a TypeRegistry,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        source
            .get(name)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
