//! Classifier frontend: transforms source code or programmatically built syntax trees into the
//! classified representation defined in `program`. All static checks are performed during
//! this phase, so backends can assume every expression they receive is well-formed.

use lalrpop_util::lalrpop_mod;

pub mod analyzer;
pub mod ast;
pub mod backends;
pub mod environment;
pub mod errors;
pub mod options;
pub mod program;
pub mod source;

lalrpop_mod!(grammar);

use crate::analyzer::Classifier;
use crate::environment::Environment;
use crate::errors::ClassificationError;
use crate::options::ClassifierOptions;
use crate::program::ValueCategory;

/// Parses and classifies a whole program.
pub fn compile(
    source_code: &str,
    options: ClassifierOptions,
) -> Result<program::Program, Vec<ClassificationError>> {
    let program = parse(source_code).map_err(|error| vec![error])?;
    analyzer::compile_program(&program, options)
}

/// Parses the source code and returns an AST root.
pub fn parse(source_code: &str) -> Result<ast::Program, ClassificationError> {
    grammar::ProgramParser::new()
        .parse(source_code)
        .map_err(errors::syntax_error)
}

/// Parses a single expression.
pub fn parse_expression(source_code: &str) -> Result<ast::Expression, ClassificationError> {
    grammar::ExprParser::new()
        .parse(source_code)
        .map_err(errors::syntax_error)
}

/// Determines the value category of `expression` in the default dialect.
pub fn classify(
    expression: &ast::Expression,
    env: &Environment,
) -> Result<ValueCategory, ClassificationError> {
    Classifier::new(env, ClassifierOptions::default()).classify(expression)
}

/// Checks that `expression` is a legal assignment target in the default dialect.
pub fn is_assignable(
    expression: &ast::Expression,
    env: &Environment,
) -> Result<(), ClassificationError> {
    Classifier::new(env, ClassifierOptions::default()).check_assignable(expression)
}
