use crate::type_environment::validate_type_name;
use crate::TypeEnvironment;
use crate::TypeEnvironmentError;
use indexmap::IndexMap;
use inherent::inherent;

/// An insertion-ordered [`TypeEnvironment`] that refuses entries a schema
/// text could never look up.
///
/// Unlike a plain `HashMap`, inserting a built-in scalar name (which the
/// resolver would never consult) or a malformed name is an error.
///
/// ```
/// use libgraphql_shape_core::TypesMap;
///
/// let mut types = TypesMap::new();
/// types.insert("Episode", 1u32).unwrap();
/// assert!(types.insert("Int", 2u32).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypesMap<H> {
    types: IndexMap<String, H>,
}

impl<H> TypesMap<H> {
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Binds `name` to `handle`, returning the handle it replaced.
    pub fn insert(
        &mut self,
        name: impl AsRef<str>,
        handle: H,
    ) -> Result<Option<H>, TypeEnvironmentError> {
        let name = name.as_ref();
        validate_type_name(name)?;

        let previous = self.types.insert(name.to_string(), handle);
        if previous.is_some() {
            log::debug!("replaced type environment entry `{name}`");
        }
        Ok(previous)
    }

    /// Builder-style [`insert()`](Self::insert).
    pub fn with(
        mut self,
        name: impl AsRef<str>,
        handle: H,
    ) -> Result<Self, TypeEnvironmentError> {
        self.insert(name, handle)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&H> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<H> {
        self.types.shift_remove(name)
    }

    /// Type names in insertion order.
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

impl<H> Default for TypesMap<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[inherent]
impl<H: Clone + std::fmt::Debug> TypeEnvironment for TypesMap<H> {
    type Handle = H;

    pub fn lookup(&self, name: &str) -> Option<H> {
        self.types.get(name).cloned()
    }
}
