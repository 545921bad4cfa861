//! Various test utils.

use crate::types::FieldDescriptor;
use crate::types::Model;
use crate::types::ObjectModel;
use crate::TypeEnvironment;
use std::cell::RefCell;
use std::collections::HashMap;

/// An environment that records every name it is asked about.
#[derive(Default)]
pub struct RecordingEnvironment {
    pub handles: HashMap<String, u32>,
    pub lookups: RefCell<Vec<String>>,
}

impl RecordingEnvironment {
    pub fn with(entries: &[(&str, u32)]) -> Self {
        Self {
            handles: entries
                .iter()
                .map(|(name, handle)| (name.to_string(), *handle))
                .collect(),
            lookups: RefCell::new(vec![]),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl TypeEnvironment for RecordingEnvironment {
    type Handle = u32;

    fn lookup(&self, name: &str) -> Option<u32> {
        self.lookups.borrow_mut().push(name.to_string());
        self.handles.get(name).copied()
    }
}

pub fn expect_object<H: std::fmt::Debug>(model: Model<H>) -> ObjectModel<H> {
    match model {
        Model::Object(object) => object,
        other => panic!("expected an object model, got: {other:?}"),
    }
}

pub fn expect_field<'a, H>(object: &'a ObjectModel<H>, name: &str) -> &'a FieldDescriptor<H> {
    match object.field(name) {
        Some(field) => field,
        None => panic!(
            "no field `{name}`; fields are: {:?}",
            object.field_names().collect::<Vec<_>>(),
        ),
    }
}
