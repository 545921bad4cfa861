use crate::ast::AstNode;
use crate::ast::EnumBlock;
use crate::ast::ObjectBlock;
use crate::ByteSpan;
use inherent::inherent;

/// The root of a parsed schema text: either an object block or an enum
/// block.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaBlock<'src> {
    Enum(EnumBlock<'src>),
    Object(ObjectBlock<'src>),
}

impl<'src> SchemaBlock<'src> {
    pub fn as_object(&self) -> Option<&ObjectBlock<'src>> {
        if let Self::Object(block) = self {
            Some(block)
        } else {
            None
        }
    }

    pub fn as_enum(&self) -> Option<&EnumBlock<'src>> {
        if let Self::Enum(block) = self {
            Some(block)
        } else {
            None
        }
    }
}

#[inherent]
impl AstNode for SchemaBlock<'_> {
    pub fn span(&self) -> ByteSpan {
        match self {
            Self::Enum(block) => block.span,
            Self::Object(block) => block.span,
        }
    }
}
