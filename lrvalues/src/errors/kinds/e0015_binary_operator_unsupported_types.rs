use crate::ast::BinaryOperator;
use crate::errors::{ClassificationError, ErrorKind};
use crate::program::Type;
use crate::source::SourceOrigin;

pub fn binary_operator_unsupported_types(
    operator: BinaryOperator,
    lhs_type: &Type,
    rhs_type: &Type,
    location: SourceOrigin,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::UnsupportedOperands,
        "E0015",
        format!(
            "operator `{}` cannot be applied to operands of types `{}` and `{}`",
            operator, lhs_type, rhs_type
        ),
    )
    .with_location(location)
    .with_subtitle("unsupported operand types")
}
