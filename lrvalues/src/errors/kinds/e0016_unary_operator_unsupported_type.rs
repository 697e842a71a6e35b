use crate::ast::UnaryOperator;
use crate::errors::{ClassificationError, ErrorKind};
use crate::program::Type;
use crate::source::SourceOrigin;

pub fn unary_operator_unsupported_type(
    operator: UnaryOperator,
    operand_type: &Type,
    location: SourceOrigin,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::UnsupportedOperands,
        "E0016",
        format!(
            "operator `{}` cannot be applied to an operand of type `{}`",
            operator, operand_type
        ),
    )
    .with_location(location)
    .with_subtitle("unsupported operand type")
}
