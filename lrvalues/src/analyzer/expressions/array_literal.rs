use super::{check_type, compile_rvalue};
use crate::analyzer::Classifier;
use crate::ast;
use crate::errors::{self, ClassificationError, TypeMismatchContext};
use crate::program::{self, ArrayLiteralExpr};
use crate::source::SourceOrigin;

/// The element type is taken from the first element; every other element must match it.
pub fn compile_array_literal_expr(
    expression: &ast::ArrayLiteralExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let location = SourceOrigin::Plain(expression.span);

    let mut elements = Vec::with_capacity(expression.elements.len());
    for element in &expression.elements {
        elements.push(compile_rvalue(element, classifier)?);
    }

    let element_type = match elements.first() {
        Some(first) => first.type_().type_.clone(),
        None => return Err(errors::cannot_infer_empty_array_type(location)),
    };

    for element in &elements[1..] {
        check_type(TypeMismatchContext::ArrayElement, &element_type, element)?;
    }

    Ok(program::Expression::new(ArrayLiteralExpr {
        element_type,
        elements,
        dialect: classifier.dialect(),
        location,
    }))
}
