use crate::program::expressions::ExpressionKindImpl;
use crate::program::{FunctionDecl, QualifiedType, Type, ValueCategory};
use crate::source::SourceOrigin;
use std::rc::Rc;

/// A function designator: a name that refers to a function rather than to an object.
///
/// Designators are lvalues, but their type is not an object type, so they can never be
/// assigned to.
pub struct FunctionExpr {
    pub function: Rc<FunctionDecl>,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for FunctionExpr {
    fn calculate_type(&self) -> QualifiedType {
        QualifiedType::mutable(Type::Function(Rc::clone(&self.function.type_)))
    }

    fn calculate_value_category(&self) -> ValueCategory {
        ValueCategory::Lvalue
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
