use crate::errors::{ClassificationError, ErrorKind};
use crate::source::{InputSpan, SourceOrigin};

pub fn field_initialized_twice(
    field_name: &str,
    location: SourceOrigin,
    previous: InputSpan,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::AlreadyDefined,
        "E0020",
        format!("field `{}` is initialized more than once", field_name),
    )
    .with_location(location)
    .with_subtitle("duplicate field initializer")
    .with_bound_note(previous, "first initialized here")
}
