use crate::errors::{ClassificationError, ErrorKind};
use crate::source::{InputSpan, SourceOrigin};

pub fn reference_body_not_lvalue(
    function_name: &str,
    location: SourceOrigin,
    signature: InputSpan,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::NotAnLValue,
        "E0018",
        format!(
            "function `{}` returns a reference, so its body must be an lvalue",
            function_name
        ),
    )
    .with_location(location)
    .with_subtitle("expression is an rvalue, but references can only alias lvalues")
    .with_bound_note(signature, "reference return type is declared here")
}
