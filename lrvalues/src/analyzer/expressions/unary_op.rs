use super::compile_rvalue;
use crate::analyzer::Classifier;
use crate::ast::{self, UnaryOperator};
use crate::errors::{self, ClassificationError};
use crate::program::{self, UnaryOpExpr};
use crate::source::SourceOrigin;

pub fn compile_unary_op_expr(
    expression: &ast::UnaryOperatorExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let operand = compile_rvalue(&expression.operand, classifier)?;
    let location = SourceOrigin::Plain(expression.span);

    let operand_type = &operand.type_().type_;
    let supported = match expression.operator {
        UnaryOperator::Negate => operand_type.is_int(),
        UnaryOperator::LogicalNot => operand_type.is_bool(),
    };
    if !supported {
        let error = errors::unary_operator_unsupported_type(
            expression.operator,
            operand_type,
            location,
        );
        return Err(error);
    }

    Ok(program::Expression::new(UnaryOpExpr {
        operator: expression.operator,
        operand: Box::new(operand),
        location,
    }))
}
