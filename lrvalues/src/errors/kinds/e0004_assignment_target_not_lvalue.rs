use crate::errors::{ClassificationError, ErrorKind};
use crate::source::SourceOrigin;

pub fn assignment_target_not_lvalue(location: SourceOrigin) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::NotAnLValue,
        "E0004",
        "assignment target must be an lvalue",
    )
    .with_location(location)
    .with_subtitle("expression is an rvalue, but only lvalues can be assigned to")
}
