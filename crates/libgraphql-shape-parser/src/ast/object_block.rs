use crate::ast::AstNode;
use crate::ast::FieldDefinition;
use crate::ByteSpan;
use inherent::inherent;

/// `{ field ... }`
///
/// Fields are kept in source order, duplicates included. Collapsing
/// duplicates (last one wins) is the resolver's job.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectBlock<'src> {
    pub fields: Vec<FieldDefinition<'src>>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for ObjectBlock<'_> {
    pub fn span(&self) -> ByteSpan {
        self.span
    }
}
