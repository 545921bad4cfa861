use indexmap::IndexSet;

/// The permitted literals of an enum block.
///
/// Iteration follows declaration order, but equality does not: two enum
/// models with the same values in a different order are equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct EnumModel {
    pub(crate) values: IndexSet<String>,
}

impl EnumModel {
    /// Builds a model from literal values. Repeated values are kept once.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
