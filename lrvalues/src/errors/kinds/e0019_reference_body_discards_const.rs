use crate::errors::{ClassificationError, ErrorKind};
use crate::source::{InputSpan, SourceOrigin};

pub fn reference_body_discards_const(
    function_name: &str,
    location: SourceOrigin,
    signature: InputSpan,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::ConstTarget,
        "E0019",
        format!(
            "function `{}` returns a non-const reference to const-qualified storage",
            function_name
        ),
    )
    .with_location(location)
    .with_subtitle("expression is const-qualified")
    .with_bound_note(signature, "declare the return type as `&const` to return this")
}
