use super::compile_rvalue;
use crate::analyzer::Classifier;
use crate::ast;
use crate::errors::{self, ClassificationError};
use crate::program::{self, DerefExpr};
use crate::source::SourceOrigin;

pub fn compile_deref_expr(
    expression: &ast::DerefExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let pointer = compile_rvalue(&expression.pointer, classifier)?;

    let pointer_type = &pointer.type_().type_;
    if pointer_type.pointer_target().is_none() {
        let error =
            errors::deref_operand_not_pointer(pointer_type, pointer.location());
        return Err(error);
    }

    Ok(program::Expression::new(DerefExpr {
        pointer: Box::new(pointer),
        location: SourceOrigin::Plain(expression.span),
    }))
}
