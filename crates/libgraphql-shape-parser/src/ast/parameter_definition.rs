use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::TypeAnnotation;
use crate::ByteSpan;
use inherent::inherent;

/// One `name: TypeExpr` entry of a field's parameter list.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterDefinition<'src> {
    pub name: Name<'src>,
    pub value_type: TypeAnnotation<'src>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for ParameterDefinition<'_> {
    pub fn span(&self) -> ByteSpan {
        self.span
    }
}
