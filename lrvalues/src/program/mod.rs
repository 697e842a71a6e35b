//! Classified representation of programs in the expression language.
//!
//! This is the interface between the classifier and the backends.

pub mod expressions;

mod display;
mod function;
mod typing;
mod values;
mod variable;

use crate::options::Dialect;
use crate::source::SourceOrigin;
use std::collections::HashMap;
use std::rc::Rc;

pub use expressions::address::AddressExpr;
pub use expressions::array_literal::ArrayLiteralExpr;
pub use expressions::assign::AssignExpr;
pub use expressions::binary_op::BinaryOpExpr;
pub use expressions::call::CallExpr;
pub use expressions::compound_literal::CompoundLiteralExpr;
pub use expressions::deref::DerefExpr;
pub use expressions::field_access::FieldAccessExpr;
pub use expressions::function::FunctionExpr;
pub use expressions::index::IndexExpr;
pub use expressions::literal::{Literal, LiteralExpr};
pub use expressions::load::LoadExpr;
pub use expressions::unary_op::UnaryOpExpr;
pub use expressions::variable::VariableExpr;
pub use expressions::{Expression, ExpressionKind};
pub use function::{Function, FunctionDecl, FunctionId};
pub use typing::{
    Field, FunctionType, QualifiedType, ReturnContract, StructType, Type, MAX_OBJECT_SIZE,
};
pub use values::ValueCategory;
pub use variable::{Variable, VariableId};

/// A classified program.
///
/// Constructed by the analyzer and passed to a backend for execution. Every expression in a
/// `Program` passed all classification checks.
pub struct Program {
    dialect: Dialect,

    /// Top-level items, in source order.
    items: Vec<Item>,

    /// Bodies of all functions declared in the program.
    functions: HashMap<FunctionId, Function>,
}

/// A top-level unit of execution.
pub enum Item {
    /// Allocates storage for a global variable, initializing it with `initializer` or with
    /// the zero value of its type.
    Variable {
        variable: Rc<Variable>,
        initializer: Option<Expression>,
    },

    /// Evaluates an expression for its side effects.
    Eval(Expression),

    /// Evaluates a `bool` condition and fails execution if it does not hold.
    Assert {
        condition: Expression,
        location: SourceOrigin,
    },
}

impl Program {
    pub(crate) fn new(dialect: Dialect) -> Program {
        Program {
            dialect,
            items: Vec::new(),
            functions: HashMap::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        self.functions.get(&id)
    }

    pub(crate) fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub(crate) fn add_function(&mut self, function: Function) {
        self.functions.insert(function.decl.id, function);
    }
}
