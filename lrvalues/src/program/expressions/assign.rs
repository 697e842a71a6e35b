use crate::options::Dialect;
use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, ValueCategory};
use crate::source::SourceOrigin;

/// An expression that updates an lvalue, setting it to a new value.
pub struct AssignExpr {
    /// The storage to be updated.
    ///
    /// Must be a non-const lvalue of object type. In the reference dialect it may also be a
    /// struct temporary.
    pub target: Box<Expression>,

    /// The new value to be stored.
    ///
    /// Must be an rvalue with the same type as `target`.
    pub value: Box<Expression>,

    /// Determines what the assignment expression itself denotes.
    pub dialect: Dialect,

    pub location: SourceOrigin,
}

impl ExpressionKindImpl for AssignExpr {
    fn calculate_type(&self) -> QualifiedType {
        match self.dialect {
            Dialect::C => self.target.type_().unqualified(),
            Dialect::Cpp => self.target.type_().clone(),
        }
    }

    fn calculate_value_category(&self) -> ValueCategory {
        self.dialect.assignment_category()
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
