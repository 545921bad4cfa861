use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation<H> {
    pub(crate) inner_type_annotation: Box<TypeAnnotation<H>>,
    pub(crate) nullable: bool,
}

impl<H> ListTypeAnnotation<H> {
    pub fn new(inner_type_annotation: TypeAnnotation<H>, nullable: bool) -> Self {
        Self {
            inner_type_annotation: Box::new(inner_type_annotation),
            nullable,
        }
    }

    /// The annotation of the list's elements.
    pub fn inner_type_annotation(&self) -> &TypeAnnotation<H> {
        &self.inner_type_annotation
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_equivalent_to<H2>(&self, other: &ListTypeAnnotation<H2>) -> bool {
        self.nullable == other.nullable
            && self
                .inner_type_annotation
                .is_equivalent_to(&other.inner_type_annotation)
    }
}
