use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::ParameterDefinition;
use crate::ast::TypeAnnotation;
use crate::ByteSpan;
use inherent::inherent;

/// A field declaration: `name: TypeExpr` or
/// `name(param: TypeExpr, ...): TypeExpr`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub name: Name<'src>,

    /// Empty unless the declaration had a parenthesized parameter list.
    /// The grammar rejects an empty `()`.
    pub parameters: Vec<ParameterDefinition<'src>>,

    pub field_type: TypeAnnotation<'src>,
    pub span: ByteSpan,
}

impl FieldDefinition<'_> {
    pub fn is_parameterized(&self) -> bool {
        !self.parameters.is_empty()
    }
}

#[inherent]
impl AstNode for FieldDefinition<'_> {
    pub fn span(&self) -> ByteSpan {
        self.span
    }
}
