use crate::program::{Expression, FunctionType, Variable};
use crate::source::InputSpan;
use std::rc::Rc;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FunctionId(pub(crate) usize);

/// The part of a function that is visible to callers.
#[derive(Debug)]
pub struct FunctionDecl {
    pub id: FunctionId,
    pub name: String,
    pub type_: Rc<FunctionType>,

    pub definition_site: Option<InputSpan>,
}

/// A function with a classified body, ready to be executed.
pub struct Function {
    pub decl: Rc<FunctionDecl>,
    pub parameters: Vec<Rc<Variable>>,
    pub body: Expression,
}
