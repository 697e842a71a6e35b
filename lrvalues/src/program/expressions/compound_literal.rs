use crate::options::Dialect;
use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, StructType, Type, ValueCategory};
use crate::source::SourceOrigin;
use std::rc::Rc;

/// A struct value written in place. Fields that are not mentioned are zero-initialized.
///
/// Whether the literal has storage of its own depends on the dialect.
pub struct CompoundLiteralExpr {
    pub type_: Rc<StructType>,

    /// Initialized fields, as pairs of field index and field value.
    pub fields: Vec<(usize, Expression)>,

    pub dialect: Dialect,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for CompoundLiteralExpr {
    fn calculate_type(&self) -> QualifiedType {
        QualifiedType::mutable(Type::Struct(Rc::clone(&self.type_)))
    }

    fn calculate_value_category(&self) -> ValueCategory {
        self.dialect.compound_literal_category()
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
