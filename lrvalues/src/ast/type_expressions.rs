//! Type expressions are kept apart from "usual" expressions: they only ever appear in
//! declarations.

use crate::ast::Identifier;
use crate::source::InputSpan;

#[derive(Clone, Debug)]
pub enum TypeExpr {
    Int(InputSpan),
    Bool(InputSpan),
    Named(Identifier),
    Array(ArrayTypeExpr),
    Pointer(PointerTypeExpr),
}

impl TypeExpr {
    pub fn span(&self) -> InputSpan {
        use TypeExpr::*;
        match self {
            Int(span) => *span,
            Bool(span) => *span,
            Named(name) => name.span,
            Array(type_expr) => type_expr.span,
            Pointer(type_expr) => type_expr.span,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ArrayTypeExpr {
    pub element: Box<TypeExpr>,
    pub length: usize,

    pub span: InputSpan,
}

#[derive(Clone, Debug)]
pub struct PointerTypeExpr {
    pub target: Box<TypeExpr>,
    pub target_is_const: bool,

    pub span: InputSpan,
}
