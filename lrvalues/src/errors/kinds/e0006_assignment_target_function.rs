use crate::errors::{ClassificationError, ErrorKind};
use crate::program::Type;
use crate::source::SourceOrigin;

pub fn assignment_target_function(
    target_type: &Type,
    location: SourceOrigin,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::FunctionType,
        "E0006",
        "cannot assign to a function",
    )
    .with_location(location)
    .with_subtitle(format!(
        "expression has function type `{}`, but only objects can be assigned to",
        target_type
    ))
}
