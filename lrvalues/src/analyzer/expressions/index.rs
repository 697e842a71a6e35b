use super::{check_type, compile_expression, compile_rvalue};
use crate::analyzer::Classifier;
use crate::ast;
use crate::errors::{self, ClassificationError, TypeMismatchContext};
use crate::program::{self, IndexExpr, Type};
use crate::source::SourceOrigin;

pub fn compile_index_expr(
    expression: &ast::IndexExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let collection = compile_expression(&expression.collection, classifier)?;

    let collection_type = &collection.type_().type_;
    if collection_type.array_element().is_none() {
        let error =
            errors::index_target_not_array(collection_type, collection.location());
        return Err(error);
    }

    let index = compile_rvalue(&expression.index, classifier)?;
    check_type(TypeMismatchContext::Index, &Type::Int, &index)?;

    Ok(program::Expression::new(IndexExpr {
        collection: Box::new(collection),
        index: Box::new(index),
        location: SourceOrigin::Plain(expression.span),
    }))
}
