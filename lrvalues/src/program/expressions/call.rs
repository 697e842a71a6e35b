use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, FunctionDecl, QualifiedType, ReturnContract, ValueCategory};
use crate::source::SourceOrigin;
use std::rc::Rc;

/// A function call. Arguments are always rvalues.
///
/// The value category of a call depends on the return contract of the callee: calls to
/// functions returning values produce temporaries, calls to functions returning references
/// denote the storage the reference aliases.
pub struct CallExpr {
    pub function: Rc<FunctionDecl>,
    pub arguments: Vec<Expression>,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for CallExpr {
    fn calculate_type(&self) -> QualifiedType {
        match self.function.type_.returns {
            ReturnContract::Value(ref type_) => QualifiedType::mutable(type_.clone()),
            ReturnContract::Reference(ref target) => target.clone(),
        }
    }

    fn calculate_value_category(&self) -> ValueCategory {
        match self.function.type_.returns {
            ReturnContract::Value(_) => ValueCategory::Rvalue,
            ReturnContract::Reference(_) => ValueCategory::Lvalue,
        }
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
