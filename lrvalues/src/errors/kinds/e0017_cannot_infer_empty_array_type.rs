use crate::errors::{ClassificationError, ErrorKind};
use crate::source::SourceOrigin;

pub fn cannot_infer_empty_array_type(location: SourceOrigin) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::CannotInferType,
        "E0017",
        "cannot infer the element type of an empty array literal",
    )
    .with_location(location)
    .with_subtitle("array literal has no elements")
    .with_free_note("declare an array variable without an initializer to get zeroed elements")
}
