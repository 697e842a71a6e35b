use crate::errors::{ClassificationError, ErrorKind};
use crate::program::Type;
use crate::source::SourceOrigin;

pub fn index_target_not_array(
    collection_type: &Type,
    location: SourceOrigin,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::NotAnArray,
        "E0011",
        "only arrays can be indexed",
    )
    .with_location(location)
    .with_subtitle(format!("expression has type `{}`", collection_type))
}
