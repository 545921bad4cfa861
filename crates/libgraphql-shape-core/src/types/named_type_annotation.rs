use crate::types::TypeResolution;
use crate::ScalarType;

/// A named leaf of a type annotation (`Int`, `Character!`) together with
/// what the name resolved to.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation<H> {
    pub(crate) type_name: String,
    pub(crate) nullable: bool,
    pub(crate) resolution: TypeResolution<H>,
}

impl<H> NamedTypeAnnotation<H> {
    pub fn new(
        type_name: impl Into<String>,
        nullable: bool,
        resolution: TypeResolution<H>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            nullable,
            resolution,
        }
    }

    /// The name as written in schema text.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn resolution(&self) -> &TypeResolution<H> {
        &self.resolution
    }

    pub fn scalar(&self) -> Option<ScalarType> {
        self.resolution.as_scalar()
    }

    pub fn handle(&self) -> Option<&H> {
        self.resolution.as_handle()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.is_resolved()
    }

    /// Two named annotations are equivalent if they have the same type name
    /// and nullability. Handles are not compared.
    pub fn is_equivalent_to<H2>(&self, other: &NamedTypeAnnotation<H2>) -> bool {
        self.nullable == other.nullable && self.type_name == other.type_name
    }
}
