use crate::errors::{ClassificationError, ErrorKind};
use crate::program::Type;
use crate::source::SourceOrigin;

pub fn function_used_as_value(function_type: &Type, location: SourceOrigin) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::FunctionType,
        "E0024",
        "functions can only be called, not read as values",
    )
    .with_location(location)
    .with_subtitle(format!("expression has function type `{}`", function_type))
}
