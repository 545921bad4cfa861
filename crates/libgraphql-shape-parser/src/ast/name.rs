use crate::ast::AstNode;
use crate::ByteSpan;
use inherent::inherent;
use std::borrow::Cow;

/// A name (identifier) used for fields, parameters, type references and
/// enum values.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub span: ByteSpan,
    pub value: Cow<'src, str>,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        self.value.as_ref()
    }
}

#[inherent]
impl AstNode for Name<'_> {
    pub fn span(&self) -> ByteSpan {
        self.span
    }
}
