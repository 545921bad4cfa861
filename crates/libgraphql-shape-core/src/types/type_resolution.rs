use crate::ScalarType;

/// What a type name in schema text resolved to.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeResolution<H> {
    /// One of the built-in scalars.
    Scalar(ScalarType),

    /// The environment's handle for the name.
    Environment(H),

    /// Neither a built-in scalar nor present in the environment.
    Unresolved,
}

impl<H> TypeResolution<H> {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, TypeResolution::Unresolved)
    }

    pub fn as_scalar(&self) -> Option<ScalarType> {
        if let Self::Scalar(scalar) = self {
            Some(*scalar)
        } else {
            None
        }
    }

    pub fn as_handle(&self) -> Option<&H> {
        if let Self::Environment(handle) = self {
            Some(handle)
        } else {
            None
        }
    }
}
