use crate::errors::{ClassificationError, ErrorKind};
use crate::program::MAX_OBJECT_SIZE;
use crate::source::SourceOrigin;

pub fn object_too_large(type_name: &str, location: SourceOrigin) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::ObjectTooLarge,
        "E0025",
        format!("objects of type `{}` are too large", type_name),
    )
    .with_location(location)
    .with_subtitle(format!(
        "storage is limited to {} scalar values per object",
        MAX_OBJECT_SIZE
    ))
}
