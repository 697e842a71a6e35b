use crate::program::expressions::ExpressionKindImpl;
use crate::program::{Expression, QualifiedType, ValueCategory};
use crate::source::SourceOrigin;

/// Accesses an element of an array. Like fields, elements take the value category and the
/// qualification of the array they belong to.
pub struct IndexExpr {
    pub collection: Box<Expression>,
    pub index: Box<Expression>,
    pub location: SourceOrigin,
}

impl ExpressionKindImpl for IndexExpr {
    fn calculate_type(&self) -> QualifiedType {
        let collection_type = self.collection.type_();
        match collection_type.type_.array_element() {
            Some(element) => QualifiedType::new(element.clone(), collection_type.is_const),
            None => panic!(
                "IndexExpr is in an invalid state: collection type is `{}`",
                collection_type
            ),
        }
    }

    fn calculate_value_category(&self) -> ValueCategory {
        self.collection.value_category()
    }

    fn location(&self) -> SourceOrigin {
        self.location
    }
}
