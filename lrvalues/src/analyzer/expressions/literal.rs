use crate::ast;
use crate::program::{self, Literal, LiteralExpr};
use crate::source::SourceOrigin;

pub fn compile_int_literal_expr(expression: &ast::IntLiteralExpr) -> program::Expression {
    program::Expression::new(LiteralExpr {
        value: Literal::Int(expression.value),
        location: SourceOrigin::Plain(expression.span),
    })
}

pub fn compile_bool_literal_expr(expression: &ast::BoolLiteralExpr) -> program::Expression {
    program::Expression::new(LiteralExpr {
        value: Literal::Bool(expression.value),
        location: SourceOrigin::Plain(expression.span),
    })
}
