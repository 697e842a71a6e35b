use crate::errors::{ClassificationError, ErrorKind};
use crate::program::QualifiedType;
use crate::source::SourceOrigin;

pub fn assignment_target_const(
    target_type: &QualifiedType,
    location: SourceOrigin,
) -> ClassificationError {
    let error = ClassificationError::new(
        ErrorKind::ConstTarget,
        "E0005",
        "cannot assign to const-qualified storage",
    )
    .with_location(location)
    .with_subtitle(format!("expression has type `{}`", target_type));

    if target_type.is_const {
        error
    } else {
        error.with_free_note(format!(
            "`{}` contains const-qualified fields, so it cannot be overwritten as a whole",
            target_type.type_
        ))
    }
}
