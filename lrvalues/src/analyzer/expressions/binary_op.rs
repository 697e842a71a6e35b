use super::compile_rvalue;
use crate::analyzer::Classifier;
use crate::ast::{self, BinaryOperator};
use crate::errors::{self, ClassificationError};
use crate::program::{self, BinaryOpExpr, Type};
use crate::source::SourceOrigin;

pub fn compile_binary_op_expr(
    expression: &ast::BinaryOperatorExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let lhs = compile_rvalue(&expression.lhs, classifier)?;
    let rhs = compile_rvalue(&expression.rhs, classifier)?;
    let location = SourceOrigin::Plain(expression.span);

    let lhs_type = &lhs.type_().type_;
    let rhs_type = &rhs.type_().type_;
    if !operands_supported(expression.operator, lhs_type, rhs_type) {
        let error = errors::binary_operator_unsupported_types(
            expression.operator,
            lhs_type,
            rhs_type,
            location,
        );
        return Err(error);
    }

    Ok(program::Expression::new(BinaryOpExpr {
        operator: expression.operator,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        location,
    }))
}

fn operands_supported(operator: BinaryOperator, lhs: &Type, rhs: &Type) -> bool {
    use BinaryOperator::*;
    match operator {
        Add | Sub | Mul | Less | Greater | LessEq | GreaterEq => lhs.is_int() && rhs.is_int(),
        LogicalAnd | LogicalOr => lhs.is_bool() && rhs.is_bool(),
        Eq | NotEq => {
            let comparable = match lhs {
                Type::Int | Type::Bool | Type::Pointer(_) => true,
                _ => false,
            };
            comparable && (lhs.accepts(rhs) || rhs.accepts(lhs))
        }
    }
}
