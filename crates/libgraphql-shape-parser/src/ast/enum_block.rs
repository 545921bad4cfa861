use crate::ast::AstNode;
use crate::ast::Name;
use crate::ByteSpan;
use inherent::inherent;

/// `enum{ VALUE ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumBlock<'src> {
    pub values: Vec<EnumValueDefinition<'src>>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for EnumBlock<'_> {
    pub fn span(&self) -> ByteSpan {
        self.span
    }
}

/// A single literal in an enum block. No interpretation beyond its name.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for EnumValueDefinition<'_> {
    pub fn span(&self) -> ByteSpan {
        self.name.span
    }
}
