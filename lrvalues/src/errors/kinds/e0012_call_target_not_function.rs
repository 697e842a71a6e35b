use crate::errors::{ClassificationError, ErrorKind};
use crate::program::Type;
use crate::source::SourceOrigin;

pub fn call_target_not_function(callee_type: &Type, location: SourceOrigin) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::NotCallable,
        "E0012",
        "only named functions can be called",
    )
    .with_location(location)
    .with_subtitle(format!("expression has type `{}`", callee_type))
}
