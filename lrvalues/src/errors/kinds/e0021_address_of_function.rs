use crate::errors::{ClassificationError, ErrorKind};
use crate::source::SourceOrigin;

pub fn address_of_function(location: SourceOrigin) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::FunctionType,
        "E0021",
        "cannot take address of a function, only objects can be addressed",
    )
    .with_location(location)
    .with_subtitle("expression designates a function")
}
