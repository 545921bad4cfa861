use crate::types::TypeAnnotation;

/// One entry of a parameterized field's parameter list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter<H> {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation<H>,
}

impl<H> Parameter<H> {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation<H>) -> Self {
        Self {
            name: name.into(),
            type_annotation,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation<H> {
        &self.type_annotation
    }
}
