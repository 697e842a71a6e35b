use crate::program::expressions::ExpressionKindImpl;
use crate::program::{QualifiedType, ValueCategory, Variable};
use crate::source::SourceOrigin;
use std::rc::Rc;

/// A reference to a named storage location.
pub struct VariableExpr {
    pub variable: Rc<Variable>,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for VariableExpr {
    fn calculate_type(&self) -> QualifiedType {
        self.variable.type_.clone()
    }

    fn calculate_value_category(&self) -> ValueCategory {
        ValueCategory::Lvalue
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
