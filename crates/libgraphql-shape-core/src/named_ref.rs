use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store (`TSource`), without
/// holding a reference to the data-store itself. Dereferencing is done via
/// [`NamedRef::deref()`] by handing over the `TSource` explicitly.
///
/// [`TypeRegistry`](crate::TypeRegistry) uses this to let models refer to
/// each other (or to themselves) by name: a field whose type is `Character`
/// stores a [`NamedTypeRef`](crate::NamedTypeRef) rather than the
/// `Character` model, so the registry owns every model exactly once and no
/// reference cycles are needed.
///
/// Serializes as the bare name.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(transparent, bound = "")]
pub struct NamedRef<TSource, TResource> {
    name: String,

    #[serde(skip)]
    phantom: PhantomData<fn() -> (TSource, TResource)>,
}

impl<TSource, TResource> NamedRef<TSource, TResource> {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl<TSource, TResource> NamedRef<TSource, TResource>
where
    TResource: DerefByName<Source = TSource>,
{
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

// `TSource` and `TResource` only appear behind `PhantomData`, so these are
// implemented by hand to avoid bounding either on the trait.
impl<TSource, TResource> Clone for NamedRef<TSource, TResource> {
    fn clone(&self) -> Self {
        Self::new(&self.name)
    }
}

impl<TSource, TResource> std::fmt::Debug for NamedRef<TSource, TResource> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NamedRef").field(&self.name).finish()
    }
}

impl<TSource, TResource> PartialEq for NamedRef<TSource, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<TSource, TResource> Eq for NamedRef<TSource, TResource> {}

impl<TSource, TResource> std::hash::Hash for NamedRef<TSource, TResource> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Implement this trait for any type that can be looked up by name in some
/// `Source`. This enables [`NamedRef`]s to that type.
pub trait DerefByName: Sized {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError>;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> {
        NamedRef::new(name)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    /// The name was never defined in the source (it may have been
    /// forward-declared).
    #[error("dangling reference to `{0}`")]
    DanglingReference(String),
}
