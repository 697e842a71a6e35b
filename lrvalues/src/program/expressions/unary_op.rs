use crate::ast::UnaryOperator;
use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, Type, ValueCategory};
use crate::source::SourceOrigin;

pub struct UnaryOpExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for UnaryOpExpr {
    fn calculate_type(&self) -> QualifiedType {
        match self.operator {
            UnaryOperator::Negate => QualifiedType::mutable(Type::Int),
            UnaryOperator::LogicalNot => QualifiedType::mutable(Type::Bool),
        }
    }

    fn calculate_value_category(&self) -> ValueCategory {
        ValueCategory::Rvalue
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
