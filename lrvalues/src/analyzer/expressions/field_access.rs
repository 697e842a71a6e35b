use super::compile_expression;
use crate::analyzer::Classifier;
use crate::ast;
use crate::errors::{self, ClassificationError};
use crate::program::{self, DerefExpr, FieldAccessExpr, LoadExpr};
use crate::source::SourceOrigin;

pub fn compile_field_access_expr(
    expression: &ast::FieldAccessExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let receiver = compile_expression(&expression.receiver, classifier)?;
    let receiver = auto_deref_pointer(receiver);

    let receiver_type = &receiver.type_().type_;
    let struct_ = match receiver_type.as_struct() {
        Some(struct_) => struct_,
        None => {
            let error = errors::field_access_receiver_not_struct(
                receiver_type,
                receiver.location(),
            );
            return Err(error);
        }
    };

    let field_name = &expression.field.text;
    let field_index = match struct_.field_index(field_name) {
        Some(index) => index,
        None => {
            let error = errors::field_not_found(
                struct_,
                field_name,
                SourceOrigin::Plain(expression.field.span),
            );
            return Err(error);
        }
    };

    Ok(program::Expression::new(FieldAccessExpr {
        receiver: Box::new(receiver),
        field_index,
        location: SourceOrigin::Plain(expression.span),
    }))
}

/// Pointers to structs can be used as field access receivers directly: `p.x` means `(*p).x`.
fn auto_deref_pointer(receiver: program::Expression) -> program::Expression {
    let points_to_struct = match receiver.type_().type_.pointer_target() {
        Some(target) => target.type_.as_struct().is_some(),
        None => false,
    };

    if !points_to_struct {
        return receiver;
    }

    let location = SourceOrigin::AutoDeref(receiver.location().as_plain());
    program::Expression::new(DerefExpr {
        pointer: Box::new(LoadExpr::coerce(receiver)),
        location,
    })
}
