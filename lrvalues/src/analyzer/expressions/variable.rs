use crate::analyzer::Classifier;
use crate::ast;
use crate::environment::{NamedEntity, NamedEntityKind};
use crate::errors::{self, ClassificationError};
use crate::program::{self, FunctionExpr, VariableExpr};
use crate::source::SourceOrigin;
use std::rc::Rc;

/// A name in expression position can designate either a variable or a function.
pub fn compile_variable_expr(
    expression: &ast::VariableExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let name = &expression.name.text;
    let location = SourceOrigin::Plain(expression.span);

    match classifier.env().lookup(name) {
        Some(NamedEntity::Variable(variable)) => Ok(program::Expression::new(VariableExpr {
            variable: Rc::clone(variable),
            location,
        })),
        Some(NamedEntity::Function(function)) => Ok(program::Expression::new(FunctionExpr {
            function: Rc::clone(function),
            location,
        })),
        Some(entity) => Err(errors::named_entity_kind_mismatch(
            name,
            NamedEntityKind::Variable,
            entity.kind(),
            location,
            entity.definition_site(),
        )),
        None => Err(errors::named_entity_not_found(
            name,
            NamedEntityKind::Variable,
            location,
        )),
    }
}
