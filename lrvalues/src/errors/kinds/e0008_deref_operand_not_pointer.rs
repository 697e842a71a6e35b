use crate::errors::{ClassificationError, ErrorKind};
use crate::program::Type;
use crate::source::SourceOrigin;

pub fn deref_operand_not_pointer(
    operand_type: &Type,
    location: SourceOrigin,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::NotAPointer,
        "E0008",
        "only pointers can be dereferenced",
    )
    .with_location(location)
    .with_subtitle(format!("expression has type `{}`", operand_type))
}
