use super::{check_type, compile_rvalue};
use crate::analyzer::Classifier;
use crate::ast;
use crate::errors::{self, ClassificationError, TypeMismatchContext};
use crate::program::{self, CompoundLiteralExpr};
use crate::source::{InputSpan, SourceOrigin};
use std::collections::HashMap;
use std::rc::Rc;

pub fn compile_compound_literal_expr(
    expression: &ast::CompoundLiteralExpr,
    classifier: &Classifier,
) -> Result<program::Expression, ClassificationError> {
    let struct_ = classifier.env().lookup_struct(
        &expression.type_name.text,
        SourceOrigin::Plain(expression.type_name.span),
    )?;
    let struct_ = Rc::clone(struct_);

    let mut initialized: HashMap<usize, InputSpan> = HashMap::new();
    let mut fields = Vec::with_capacity(expression.fields.len());

    for initializer in &expression.fields {
        let name = &initializer.name;
        let index = match struct_.field_index(&name.text) {
            Some(index) => index,
            None => {
                let error = errors::field_not_found(
                    &struct_,
                    &name.text,
                    SourceOrigin::Plain(name.span),
                );
                return Err(error);
            }
        };

        if let Some(previous) = initialized.insert(index, name.span) {
            let error = errors::field_initialized_twice(
                &name.text,
                SourceOrigin::Plain(name.span),
                previous,
            );
            return Err(error);
        }

        let value = compile_rvalue(&initializer.value, classifier)?;
        check_type(
            TypeMismatchContext::FieldInitializer,
            &struct_.fields[index].type_,
            &value,
        )?;
        fields.push((index, value));
    }

    Ok(program::Expression::new(CompoundLiteralExpr {
        type_: struct_,
        fields,
        dialect: classifier.dialect(),
        location: SourceOrigin::Plain(expression.span),
    }))
}
