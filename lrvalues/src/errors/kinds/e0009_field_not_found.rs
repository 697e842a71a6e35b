use crate::errors::{ClassificationError, ErrorKind};
use crate::program::StructType;
use crate::source::SourceOrigin;

pub fn field_not_found(
    struct_: &StructType,
    field_name: &str,
    location: SourceOrigin,
) -> ClassificationError {
    let fields: Vec<_> = struct_
        .fields
        .iter()
        .map(|field| format!("`{}`", field.name))
        .collect();

    let error = ClassificationError::new(
        ErrorKind::UnknownField,
        "E0009",
        format!("struct `{}` has no field `{}`", struct_.name, field_name),
    )
    .with_location(location)
    .with_subtitle("unknown field");

    if fields.is_empty() {
        error.with_free_note(format!("struct `{}` has no fields", struct_.name))
    } else {
        error.with_free_note(format!("available fields: {}", fields.join(", ")))
    }
}
