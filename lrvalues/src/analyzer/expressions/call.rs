use super::{check_type, compile_expression, compile_rvalue};
use crate::analyzer::Classifier;
use crate::ast;
use crate::errors::{self, ClassificationError, TypeMismatchContext};
use crate::program::{self, CallExpr, ExpressionKind};
use crate::source::SourceOrigin;
use std::rc::Rc;

pub fn compile_call_expr(
    expression: &ast::CallExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let callee = compile_expression(&expression.callee, classifier)?;
    let function = match callee.kind() {
        ExpressionKind::Function(designator) => Rc::clone(&designator.function),
        _ => {
            let error = errors::call_target_not_function(
                &callee.type_().type_,
                callee.location(),
            );
            return Err(error);
        }
    };

    let location = SourceOrigin::Plain(expression.span);
    let parameters = &function.type_.parameters;
    if parameters.len() != expression.arguments.len() {
        let error = errors::call_wrong_number_of_arguments(
            &function,
            expression.arguments.len(),
            location,
        );
        return Err(error);
    }

    let mut arguments = Vec::with_capacity(parameters.len());
    for (argument, parameter) in expression.arguments.iter().zip(parameters) {
        let argument = compile_rvalue(argument, classifier)?;
        check_type(TypeMismatchContext::Argument, parameter, &argument)?;
        arguments.push(argument);
    }

    Ok(program::Expression::new(CallExpr {
        function,
        arguments,
        location,
    }))
}
