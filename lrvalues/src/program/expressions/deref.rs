use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, ValueCategory};
use crate::source::SourceOrigin;

/// Dereferences a pointer. The pointer operand is always an rvalue (it is loaded first), but
/// the storage it points to is addressable, so the result is an lvalue.
pub struct DerefExpr {
    pub pointer: Box<Expression>,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for DerefExpr {
    fn calculate_type(&self) -> QualifiedType {
        match self.pointer.type_().type_.pointer_target() {
            Some(target) => target.clone(),
            None => panic!(
                "DerefExpr is in an invalid state: pointer expression type is `{}`",
                self.pointer.type_()
            ),
        }
    }

    fn calculate_value_category(&self) -> ValueCategory {
        ValueCategory::Lvalue
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
