use crate::types::Parameter;
use crate::types::TypeAnnotation;

/// The resolved declaration of one field of an object block.
///
/// A descriptor with parameters describes a callable accessor, e.g.
/// `roll(numRolls: Int!, sides: Int): [Int]`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDescriptor<H> {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation<H>,
    pub(crate) parameters: Vec<Parameter<H>>,
}

impl<H> FieldDescriptor<H> {
    pub fn new(
        name: impl Into<String>,
        type_annotation: TypeAnnotation<H>,
        parameters: Vec<Parameter<H>>,
    ) -> Self {
        Self {
            name: name.into(),
            type_annotation,
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The field's value type.
    pub fn type_annotation(&self) -> &TypeAnnotation<H> {
        &self.type_annotation
    }

    /// `false` if the field's outermost type carries a `!`.
    ///
    /// For list fields this is the nullability of the list itself; element
    /// nullability lives on the inner annotation.
    pub fn nullable(&self) -> bool {
        self.type_annotation.nullable()
    }

    pub fn is_list(&self) -> bool {
        self.type_annotation.is_list()
    }

    /// Parameters in declaration order. Empty for plain fields.
    pub fn parameters(&self) -> &[Parameter<H>] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter<H>> {
        self.parameters.iter().find(|param| param.name == name)
    }

    pub fn is_parameterized(&self) -> bool {
        !self.parameters.is_empty()
    }
}
