use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, ValueCategory};
use crate::source::SourceOrigin;

/// Accesses a field of a struct.
///
/// Fields share addressability with their receiver: a field of an lvalue is an lvalue, and a
/// field of a temporary is a temporary. Const-ness also propagates from the receiver.
pub struct FieldAccessExpr {
    pub receiver: Box<Expression>,
    pub field_index: usize,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for FieldAccessExpr {
    fn calculate_type(&self) -> QualifiedType {
        let receiver_type = self.receiver.type_();
        let struct_ = match receiver_type.type_.as_struct() {
            Some(struct_) => struct_,
            None => panic!(
                "FieldAccessExpr is in an invalid state: receiver type is `{}`",
                receiver_type
            ),
        };

        let field = &struct_.fields[self.field_index];
        QualifiedType::new(field.type_.clone(), field.is_const).with_const(receiver_type.is_const)
    }

    fn calculate_value_category(&self) -> ValueCategory {
        self.receiver.value_category()
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
