use crate::types::FieldDescriptor;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// The fields of an object block keyed by name, in declaration order.
///
/// Field names are unique: when a block declares the same name twice the
/// later declaration wins, keeping the position of the first.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectModel<H> {
    pub(crate) fields: IndexMap<String, FieldDescriptor<H>>,
}

impl<H> ObjectModel<H> {
    /// Builds a model from fields in declaration order. Later fields replace
    /// earlier ones of the same name.
    pub fn new(fields: impl IntoIterator<Item = FieldDescriptor<H>>) -> Self {
        let mut model = Self::default();
        for field in fields {
            model.insert_field(field);
        }
        model
    }

    /// Adds `field`, replacing any earlier field of the same name in place.
    /// Returns the replaced field.
    pub fn insert_field(
        &mut self,
        field: FieldDescriptor<H>,
    ) -> Option<FieldDescriptor<H>> {
        self.fields.insert(field.name.clone(), field)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<H>> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor<H>> {
        self.fields.values()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Every distinct type name that resolved to
    /// [`TypeResolution::Unresolved`](crate::TypeResolution::Unresolved),
    /// from field and parameter types, in order of first appearance.
    pub fn unresolved_type_names(&self) -> Vec<&str> {
        let mut names: IndexSet<&str> = IndexSet::new();
        for field in self.fields.values() {
            for param in &field.parameters {
                collect_unresolved(&param.type_annotation, &mut names);
            }
            collect_unresolved(&field.type_annotation, &mut names);
        }
        names.into_iter().collect()
    }
}

impl<H> Default for ObjectModel<H> {
    fn default() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }
}

fn collect_unresolved<'a, H>(
    annotation: &'a TypeAnnotation<H>,
    names: &mut IndexSet<&'a str>,
) {
    let named = annotation.innermost_named_type_annotation();
    if !named.is_resolved() {
        names.insert(named.type_name());
    }
}
