//! Classification of individual expression forms.
//!
//! Every `compile_*` function classifies the children of its node first, then checks the rules
//! specific to the node and builds the classified node. The first violated rule aborts
//! classification of the whole expression.

mod address;
mod array_literal;
mod assign;
mod binary_op;
mod call;
mod compound_literal;
mod deref;
mod field_access;
mod index;
mod literal;
mod unary_op;
mod variable;

use crate::analyzer::Classifier;
use crate::ast;
use crate::errors::{self, ClassificationError, TypeMismatchContext};
use crate::program::{self, LoadExpr, Type};

pub fn compile_expression(
    expression: &ast::Expression,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    match expression {
        ast::Expression::Variable(e) => variable::compile_variable_expr(e, classifier),
        ast::Expression::IntLiteral(e) => Ok(literal::compile_int_literal_expr(e)),
        ast::Expression::BoolLiteral(e) => Ok(literal::compile_bool_literal_expr(e)),
        ast::Expression::Deref(e) => deref::compile_deref_expr(e, classifier),
        ast::Expression::FieldAccess(e) => field_access::compile_field_access_expr(e, classifier),
        ast::Expression::Index(e) => index::compile_index_expr(e, classifier),
        ast::Expression::Address(e) => address::compile_address_expr(e, classifier),
        ast::Expression::Call(e) => call::compile_call_expr(e, classifier),
        ast::Expression::Assign(e) => assign::compile_assign_expr(e, classifier),
        ast::Expression::UnaryOp(e) => unary_op::compile_unary_op_expr(e, classifier),
        ast::Expression::BinaryOp(e) => binary_op::compile_binary_op_expr(e, classifier),
        ast::Expression::CompoundLiteral(e) => {
            compound_literal::compile_compound_literal_expr(e, classifier)
        }
        ast::Expression::ArrayLiteral(e) => {
            array_literal::compile_array_literal_expr(e, classifier)
        }
    }
}

/// Classifies an expression that is used where an rvalue is required. Lvalues are wrapped in
/// an explicit load.
pub fn compile_rvalue(
    expression: &ast::Expression,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let expression = compile_expression(expression, classifier)?;

    let type_ = &expression.type_().type_;
    if !type_.is_object() {
        let error = errors::function_used_as_value(type_, expression.location());
        return Err(error);
    }

    Ok(LoadExpr::coerce(expression))
}

/// Checks that a value of `expression`'s type can be stored where `expected` is required.
pub fn check_type(
    context: TypeMismatchContext,
    expected: &Type,
    expression: &program::Expression,
) -> Result<(), ClassificationError> {
    let actual = &expression.type_().type_;
    if expected.accepts(actual) {
        Ok(())
    } else {
        let error =
            errors::type_mismatch(context, expected, actual, expression.location());
        Err(error)
    }
}
