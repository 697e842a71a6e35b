use super::{check_type, compile_expression, compile_rvalue};
use crate::analyzer::{check_assignable, Classifier};
use crate::ast;
use crate::errors::{ClassificationError, TypeMismatchContext};
use crate::program::{self, AssignExpr};
use crate::source::SourceOrigin;

/// The target is classified and checked before the value.
pub fn compile_assign_expr(
    expression: &ast::AssignExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let target = compile_expression(&expression.target, classifier)?;
    check_assignable(&target, classifier.dialect())?;

    let value = compile_rvalue(&expression.value, classifier)?;
    check_type(TypeMismatchContext::Assignment, &target.type_().type_, &value)?;

    Ok(program::Expression::new(AssignExpr {
        target: Box::new(target),
        value: Box::new(value),
        dialect: classifier.dialect(),
        location: SourceOrigin::Plain(expression.span),
    }))
}
