//! Utilities for analysing type expressions.

use crate::ast;
use crate::environment::Environment;
use crate::errors::{self, ClassificationError};
use crate::program::{QualifiedType, ReturnContract, Type, MAX_OBJECT_SIZE};
use crate::source::SourceOrigin;
use std::rc::Rc;

pub fn compile_type_expr(
    type_expr: &ast::TypeExpr,
    env: &Environment,
) -> Result<Type, ClassificationError> {
    match type_expr {
        ast::TypeExpr::Int(_) => Ok(Type::Int),
        ast::TypeExpr::Bool(_) => Ok(Type::Bool),
        ast::TypeExpr::Named(name) => {
            let struct_ = env.lookup_struct(&name.text, SourceOrigin::Plain(name.span))?;
            Ok(Type::Struct(Rc::clone(struct_)))
        }
        ast::TypeExpr::Array(type_expr) => {
            let element = compile_type_expr(&type_expr.element, env)?;
            let array = Type::array_of(element, type_expr.length);
            check_object_size(&array, SourceOrigin::Plain(type_expr.span))?;
            Ok(array)
        }
        ast::TypeExpr::Pointer(type_expr) => {
            let target = compile_type_expr(&type_expr.target, env)?;
            Ok(Type::pointer_to(QualifiedType::new(
                target,
                type_expr.target_is_const,
            )))
        }
    }
}

/// Objects are stored eagerly, one slot per scalar, so their size is bounded.
pub fn check_object_size(type_: &Type, location: SourceOrigin) -> Result<(), ClassificationError> {
    match type_.object_size() {
        Some(size) if size <= MAX_OBJECT_SIZE => Ok(()),
        _ => Err(errors::object_too_large(&type_.to_string(), location)),
    }
}

pub fn compile_return_type_expr(
    return_type: &ast::ReturnTypeExpr,
    env: &Environment,
) -> Result<ReturnContract, ClassificationError> {
    match return_type {
        ast::ReturnTypeExpr::Value(type_expr) => {
            Ok(ReturnContract::Value(compile_type_expr(type_expr, env)?))
        }
        ast::ReturnTypeExpr::Reference { target, is_const } => {
            let target = compile_type_expr(target, env)?;
            Ok(ReturnContract::Reference(QualifiedType::new(
                target, *is_const,
            )))
        }
    }
}
