use crate::options::Dialect;
use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, Type, ValueCategory};
use crate::source::SourceOrigin;

/// An array value written in place. Follows the same storage rules as compound literals.
pub struct ArrayLiteralExpr {
    pub element_type: Type,
    pub elements: Vec<Expression>,
    pub dialect: Dialect,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for ArrayLiteralExpr {
    fn calculate_type(&self) -> QualifiedType {
        QualifiedType::mutable(Type::array_of(
            self.element_type.clone(),
            self.elements.len(),
        ))
    }

    fn calculate_value_category(&self) -> ValueCategory {
        self.dialect.compound_literal_category()
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
