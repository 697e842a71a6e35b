use crate::errors::{ClassificationError, ErrorKind};
use crate::source::SourceOrigin;

pub fn unknown_dialect(name: &str, location: SourceOrigin) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::UnknownDialect,
        "E0022",
        format!("unknown dialect `{}`", name),
    )
    .with_location(location)
    .with_subtitle("dialect is not supported")
    .with_free_note("supported dialects are `c` and `cpp`")
}
