use crate::program::expressions::ExpressionKindImpl;
use crate::program::{QualifiedType, Type, ValueCategory};
use crate::source::SourceOrigin;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
}

pub struct LiteralExpr {
    pub value: Literal,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for LiteralExpr {
    fn calculate_type(&self) -> QualifiedType {
        match self.value {
            Literal::Int(_) => QualifiedType::mutable(Type::Int),
            Literal::Bool(_) => QualifiedType::mutable(Type::Bool),
        }
    }

    fn calculate_value_category(&self) -> ValueCategory {
        ValueCategory::Rvalue
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
