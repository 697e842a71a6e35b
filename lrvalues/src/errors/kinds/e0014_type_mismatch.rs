use crate::errors::{ClassificationError, ErrorKind};
use crate::program::Type;
use crate::source::SourceOrigin;

/// Where a value of a certain type was expected.
#[derive(Copy, Clone, Debug)]
pub enum TypeMismatchContext {
    Assignment,
    Initializer,
    Argument,
    FunctionBody,
    Index,
    Condition,
    ArrayElement,
    FieldInitializer,
}

impl TypeMismatchContext {
    fn text(self) -> &'static str {
        use TypeMismatchContext::*;
        match self {
            Assignment => "assigned value",
            Initializer => "variable initializer",
            Argument => "call argument",
            FunctionBody => "function body",
            Index => "array index",
            Condition => "assertion condition",
            ArrayElement => "array element",
            FieldInitializer => "field initializer",
        }
    }
}

pub fn type_mismatch(
    context: TypeMismatchContext,
    expected: &Type,
    actual: &Type,
    location: SourceOrigin,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::TypeMismatch,
        "E0014",
        format!(
            "{} has type `{}`, but `{}` was expected",
            context.text(),
            actual,
            expected
        ),
    )
    .with_location(location)
    .with_subtitle(format!("expected `{}`", expected))
}
