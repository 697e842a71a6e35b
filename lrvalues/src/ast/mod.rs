//! Abstract syntax tree representation. This is the interface between the parser (LALRPOP)
//! and the classifier.
//!
//! Syntax trees can also be built directly in code through the constructor functions on
//! `Expression`, which is how library users classify expressions without going through
//! the surface syntax.

use crate::source::InputSpan;

mod expressions;
mod globals;
mod type_expressions;

pub type ParseError<'a> =
    lalrpop_util::ParseError<usize, lalrpop_util::lexer::Token<'a>, &'static str>;

#[derive(Clone, Debug)]
pub struct Identifier {
    pub text: String,

    pub span: InputSpan,
}

impl Identifier {
    /// Creates an identifier that does not refer to any source location.
    pub fn new(text: impl Into<String>) -> Identifier {
        Identifier {
            text: text.into(),
            span: InputSpan::top_of_file(),
        }
    }
}

pub use expressions::*;
pub use globals::*;
pub use type_expressions::*;
