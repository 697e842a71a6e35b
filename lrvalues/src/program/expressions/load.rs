use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, ValueCategory};
use crate::source::SourceOrigin;

/// Reads the current contents of an lvalue where an rvalue is required.
///
/// The wrapped expression keeps its own lvalue category: the conversion belongs to the use
/// site, not to the expression being read.
pub struct LoadExpr {
    pub target: Box<Expression>,
    pub location: SourceOrigin,
}

impl LoadExpr {
    /// Coerces `expression` to an rvalue, wrapping it in a load if it is an lvalue.
    pub fn coerce(expression: Expression) -> Expression {
        if !expression.is_lvalue() {
            return expression;
        }

        let location = SourceOrigin::Loaded(expression.location().as_plain());
        Expression::new(LoadExpr {
            target: Box::new(expression),
            location,
        })
    }
}

impl ExpressionKindImpl for LoadExpr {
    fn calculate_type(&self) -> QualifiedType {
        self.target.type_().unqualified()
    }

    fn calculate_value_category(&self) -> ValueCategory {
        ValueCategory::Rvalue
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
