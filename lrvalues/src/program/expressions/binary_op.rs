use crate::ast::BinaryOperator;
use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, Type, ValueCategory};
use crate::source::SourceOrigin;

/// Arithmetic, comparison or logical operation. Both operands are rvalues.
pub struct BinaryOpExpr {
    pub operator: BinaryOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for BinaryOpExpr {
    fn calculate_type(&self) -> QualifiedType {
        use BinaryOperator::*;
        match self.operator {
            Add | Sub | Mul => QualifiedType::mutable(Type::Int),
            Less | Greater | LessEq | GreaterEq | Eq | NotEq | LogicalAnd | LogicalOr => {
                QualifiedType::mutable(Type::Bool)
            }
        }
    }

    fn calculate_value_category(&self) -> ValueCategory {
        ValueCategory::Rvalue
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
