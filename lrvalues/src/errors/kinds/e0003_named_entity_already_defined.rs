use crate::errors::{ClassificationError, ErrorKind};
use crate::source::{InputSpan, SourceOrigin};

pub fn named_entity_already_defined(
    name: &str,
    location: SourceOrigin,
    previous_definition: Option<InputSpan>,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::AlreadyDefined,
        "E0003",
        format!("`{}` is already defined in this scope", name),
    )
    .with_location(location)
    .with_subtitle("name is already taken")
    .maybe_with_bound_note(previous_definition, || "previously defined here")
}
