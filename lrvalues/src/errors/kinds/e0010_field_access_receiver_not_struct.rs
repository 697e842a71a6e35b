use crate::errors::{ClassificationError, ErrorKind};
use crate::program::Type;
use crate::source::SourceOrigin;

pub fn field_access_receiver_not_struct(
    receiver_type: &Type,
    location: SourceOrigin,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::NotAStruct,
        "E0010",
        "fields can only be accessed on structs",
    )
    .with_location(location)
    .with_subtitle(format!("expression has type `{}`", receiver_type))
}
