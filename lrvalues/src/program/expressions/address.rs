use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, Type, ValueCategory};
use crate::source::SourceOrigin;

/// An expression that takes the address of some lvalue.
pub struct AddressExpr {
    /// The expression that denotes the storage to be addressed.
    ///
    /// Expression must be lvalue.
    pub target: Box<Expression>,

    /// The location of source code that produced this expression.
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for AddressExpr {
    fn calculate_type(&self) -> QualifiedType {
        QualifiedType::mutable(Type::pointer_to(self.target.type_().clone()))
    }

    fn calculate_value_category(&self) -> ValueCategory {
        ValueCategory::Rvalue
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
