use crate::errors::{ClassificationError, ErrorKind};
use crate::source::SourceOrigin;

pub fn address_of_rvalue(location: SourceOrigin) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::InvalidOperand,
        "E0007",
        "cannot take address of an rvalue, only lvalues can be addressed",
    )
    .with_location(location)
    .with_subtitle("expression is an rvalue, but only lvalues have addresses")
}
