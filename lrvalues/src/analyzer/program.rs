//! Classification of whole programs, item by item.

use super::expressions::{check_type, compile_expression, compile_rvalue};
use super::type_exprs::{check_object_size, compile_return_type_expr, compile_type_expr};
use super::Classifier;
use crate::ast;
use crate::environment::Environment;
use crate::errors::{self, ClassificationError, TypeMismatchContext};
use crate::options::{ClassifierOptions, Dialect};
use crate::program::{
    Expression, Field, Function, FunctionType, Item, Program, QualifiedType, ReturnContract, Type,
    Variable,
};
use crate::source::SourceOrigin;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Classifies every item of `program` in source order.
///
/// A failing item is skipped and compilation continues with the next one, so that all
/// independent errors are reported at once.
pub fn compile_program(
    program: &ast::Program,
    options: ClassifierOptions,
) -> Result<Program, Vec<ClassificationError>> {
    let mut errors = Vec::new();

    let dialect = match program.dialect {
        Some(ref pragma) => match pragma.name.text.parse::<Dialect>() {
            Ok(dialect) => dialect,
            Err(_) => {
                errors.push(errors::unknown_dialect(
                    &pragma.name.text,
                    SourceOrigin::Plain(pragma.name.span),
                ));
                options.dialect
            }
        },
        None => options.dialect,
    };
    debug!(%dialect, "classifying program");

    let options = ClassifierOptions::with_dialect(dialect);
    let mut env = Environment::new();
    let mut result = Program::new(dialect);

    for item in &program.items {
        if let Err(error) = compile_item(item, &mut env, options, &mut result) {
            debug!(code = error.code, "item rejected: {}", error.message);
            errors.push(error);
        }
    }

    if errors.is_empty() {
        Ok(result)
    } else {
        Err(errors)
    }
}

fn compile_item(
    item: &ast::Item,
    env: &mut Environment,
    options: ClassifierOptions,
    program: &mut Program,
) -> Result<(), ClassificationError> {
    match item {
        ast::Item::Struct(struct_def) => compile_struct_def(struct_def, env),
        ast::Item::Variable(variable_decl) => {
            compile_variable_decl(variable_decl, env, options, program)
        }
        ast::Item::Function(function_def) => {
            compile_function_def(function_def, env, options, program)
        }
        ast::Item::Eval(statement) => {
            let classifier = Classifier::new(env, options);
            let expression = compile_expression(&statement.expression, &classifier)?;
            debug!(category = %expression.value_category(), "classified expression statement");
            program.push_item(Item::Eval(expression));
            Ok(())
        }
        ast::Item::Assert(statement) => {
            let classifier = Classifier::new(env, options);
            let condition = compile_rvalue(&statement.condition, &classifier)?;
            check_type(TypeMismatchContext::Condition, &Type::Bool, &condition)?;
            program.push_item(Item::Assert {
                condition,
                location: SourceOrigin::Plain(statement.span),
            });
            Ok(())
        }
    }
}

fn compile_struct_def(
    struct_def: &ast::StructDef,
    env: &mut Environment,
) -> Result<(), ClassificationError> {
    let mut seen = HashMap::new();
    let mut fields = Vec::with_capacity(struct_def.fields.len());

    for field_def in &struct_def.fields {
        let name = &field_def.name;
        if let Some(previous) = seen.insert(name.text.as_str(), name.span) {
            let error = errors::named_entity_already_defined(
                &name.text,
                SourceOrigin::Plain(name.span),
                Some(previous),
            );
            return Err(error);
        }

        let type_ = compile_type_expr(&field_def.type_, env)?;
        fields.push(Field::new(name.text.clone(), type_, field_def.is_const));
    }

    let struct_ = env.add_struct(&struct_def.name, fields)?;
    check_object_size(
        &Type::Struct(struct_),
        SourceOrigin::Plain(struct_def.name.span),
    )?;
    debug!(name = %struct_def.name.text, "declared struct");
    Ok(())
}

/// The variable becomes visible only after its initializer is classified.
fn compile_variable_decl(
    variable_decl: &ast::VariableDecl,
    env: &mut Environment,
    options: ClassifierOptions,
    program: &mut Program,
) -> Result<(), ClassificationError> {
    let type_ = compile_type_expr(&variable_decl.type_, env)?;

    let initializer = match variable_decl.initializer {
        Some(ref initializer) => {
            let initializer = compile_rvalue(initializer, &Classifier::new(env, options))?;
            check_type(TypeMismatchContext::Initializer, &type_, &initializer)?;
            Some(initializer)
        }
        None => None,
    };

    let type_ = QualifiedType::new(type_, variable_decl.is_const);
    let variable = env.add_variable(&variable_decl.name, type_)?;
    debug!(variable = %variable, type_ = %variable.type_, "declared variable");

    program.push_item(Item::Variable {
        variable,
        initializer,
    });
    Ok(())
}

/// The function becomes visible only after its body is classified, so functions cannot call
/// themselves.
fn compile_function_def(
    function_def: &ast::FunctionDef,
    env: &mut Environment,
    options: ClassifierOptions,
    program: &mut Program,
) -> Result<(), ClassificationError> {
    let mut parameter_types = Vec::with_capacity(function_def.parameters.len());
    for parameter in &function_def.parameters {
        parameter_types.push(compile_type_expr(&parameter.type_, env)?);
    }
    let returns = compile_return_type_expr(&function_def.return_type, env)?;

    env.push();
    let result = compile_function_body(function_def, &parameter_types, &returns, env, options);
    env.pop();
    let (parameters, body) = result?;

    let type_ = FunctionType {
        parameters: parameter_types,
        returns,
    };
    let decl = env.add_function(&function_def.name, type_, function_def.signature_span)?;
    debug!(
        name = %decl.name,
        type_ = %decl.type_,
        category = %body.value_category(),
        "declared function"
    );

    program.add_function(Function {
        decl,
        parameters,
        body,
    });
    Ok(())
}

/// Must be called with a fresh frame on top of `env`, which receives the parameters.
fn compile_function_body(
    function_def: &ast::FunctionDef,
    parameter_types: &[Type],
    returns: &ReturnContract,
    env: &mut Environment,
    options: ClassifierOptions,
) -> Result<(Vec<Rc<Variable>>, Expression), ClassificationError> {
    let mut parameters = Vec::with_capacity(parameter_types.len());
    for (parameter, type_) in function_def.parameters.iter().zip(parameter_types) {
        let type_ = QualifiedType::mutable(type_.clone());
        parameters.push(env.add_variable(&parameter.name, type_)?);
    }

    let classifier = Classifier::new(env, options);
    let name = &function_def.name.text;

    let body = match returns {
        ReturnContract::Value(type_) => {
            let body = compile_rvalue(&function_def.body, &classifier)?;
            check_type(TypeMismatchContext::FunctionBody, type_, &body)?;
            body
        }
        ReturnContract::Reference(target) => {
            let body = compile_expression(&function_def.body, &classifier)?;
            if !body.is_lvalue() {
                let error = errors::reference_body_not_lvalue(
                    name,
                    body.location(),
                    function_def.signature_span,
                );
                return Err(error);
            }

            if body.type_().is_const && !target.is_const {
                let error = errors::reference_body_discards_const(
                    name,
                    body.location(),
                    function_def.signature_span,
                );
                return Err(error);
            }

            if body.type_().type_ != target.type_ {
                let error = errors::type_mismatch(
                    TypeMismatchContext::FunctionBody,
                    &target.type_,
                    &body.type_().type_,
                    body.location(),
                );
                return Err(error);
            }

            body
        }
    };

    Ok((parameters, body))
}
