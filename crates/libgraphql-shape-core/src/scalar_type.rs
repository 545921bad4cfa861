/// The built-in scalar types.
///
/// These names always resolve to their scalar, ahead of any
/// [`TypeEnvironment`](crate::TypeEnvironment) lookup.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum ScalarType {
    Boolean,
    Float,
    ID,
    Int,
    String,
}

impl ScalarType {
    pub const ALL: [ScalarType; 5] = [
        ScalarType::Boolean,
        ScalarType::Float,
        ScalarType::ID,
        ScalarType::Int,
        ScalarType::String,
    ];

    /// Looks up a built-in scalar by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Boolean" => Some(ScalarType::Boolean),
            "Float" => Some(ScalarType::Float),
            "ID" => Some(ScalarType::ID),
            "Int" => Some(ScalarType::Int),
            "String" => Some(ScalarType::String),
            _ => None,
        }
    }

    pub fn is_builtin_name(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// The name used in schema text.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Boolean => "Boolean",
            ScalarType::Float => "Float",
            ScalarType::ID => "ID",
            ScalarType::Int => "Int",
            ScalarType::String => "String",
        }
    }

    /// The Rust type values of this scalar are represented as.
    ///
    /// `ID` is an opaque identifier and is carried as a `String`.
    pub fn native_type_name(&self) -> &'static str {
        match self {
            ScalarType::Boolean => "bool",
            ScalarType::Float => "f64",
            ScalarType::ID | ScalarType::String => "String",
            ScalarType::Int => "i64",
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
