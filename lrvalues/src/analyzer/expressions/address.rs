use super::compile_expression;
use crate::analyzer::Classifier;
use crate::ast;
use crate::errors::{self, ClassificationError};
use crate::program::{self, AddressExpr};
use crate::source::SourceOrigin;

pub fn compile_address_expr(
    expression: &ast::AddressExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let target = compile_expression(&expression.target, classifier)?;

    if !target.is_lvalue() {
        return Err(errors::address_of_rvalue(target.location()));
    }

    if !target.type_().type_.is_object() {
        return Err(errors::address_of_function(target.location()));
    }

    Ok(program::Expression::new(AddressExpr {
        target: Box::new(target),
        location: SourceOrigin::Plain(expression.span),
    }))
}
