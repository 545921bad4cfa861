use crate::types::EnumModel;
use crate::types::ObjectModel;

/// The resolved form of one schema text.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Model<H> {
    Enum(EnumModel),
    Object(ObjectModel<H>),
}

impl<H> Model<H> {
    pub fn as_object(&self) -> Option<&ObjectModel<H>> {
        if let Self::Object(object) = self {
            Some(object)
        } else {
            None
        }
    }

    pub fn as_enum(&self) -> Option<&EnumModel> {
        if let Self::Enum(enum_model) = self {
            Some(enum_model)
        } else {
            None
        }
    }

    pub fn into_object(self) -> Option<ObjectModel<H>> {
        if let Self::Object(object) = self {
            Some(object)
        } else {
            None
        }
    }

    pub fn into_enum(self) -> Option<EnumModel> {
        if let Self::Enum(enum_model) = self {
            Some(enum_model)
        } else {
            None
        }
    }
}

impl<H> From<ObjectModel<H>> for Model<H> {
    fn from(value: ObjectModel<H>) -> Self {
        Self::Object(value)
    }
}

impl<H> From<EnumModel> for Model<H> {
    fn from(value: EnumModel) -> Self {
        Self::Enum(value)
    }
}
