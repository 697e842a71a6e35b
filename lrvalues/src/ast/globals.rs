//! AST node definitions for the top-level structure of a program: declarations and statements,
//! in the order they appear in the source.

use crate::ast::expressions::Expression;
use crate::ast::type_expressions::TypeExpr;
use crate::ast::Identifier;
use crate::source::InputSpan;

#[derive(Debug)]
pub struct Program {
    pub dialect: Option<DialectPragma>,
    pub items: Vec<Item>,
}

/// A `dialect c;` or `dialect cpp;` line at the top of the file.
#[derive(Debug)]
pub struct DialectPragma {
    pub name: Identifier,

    pub span: InputSpan,
}

#[derive(Debug)]
pub enum Item {
    Struct(StructDef),
    Variable(VariableDecl),
    Function(FunctionDef),
    Eval(EvalStmt),
    Assert(AssertStmt),
}

#[derive(Debug)]
pub struct StructDef {
    pub name: Identifier,
    pub fields: Vec<FieldDef>,

    pub span: InputSpan,
}

#[derive(Debug)]
pub struct FieldDef {
    pub name: Identifier,
    pub type_: TypeExpr,
    pub is_const: bool,

    pub span: InputSpan,
}

#[derive(Debug)]
pub struct VariableDecl {
    pub name: Identifier,
    pub type_: TypeExpr,
    pub is_const: bool,
    pub initializer: Option<Expression>,

    pub span: InputSpan,
}

#[derive(Debug)]
pub struct FunctionDef {
    pub name: Identifier,
    pub parameters: Vec<Parameter>,
    pub return_type: ReturnTypeExpr,
    pub body: Expression,

    pub signature_span: InputSpan,
}

#[derive(Debug)]
pub struct Parameter {
    pub name: Identifier,
    pub type_: TypeExpr,

    pub span: InputSpan,
}

/// What a function hands back to its caller: a fresh value, or a reference to existing storage.
#[derive(Debug)]
pub enum ReturnTypeExpr {
    Value(TypeExpr),
    Reference { target: TypeExpr, is_const: bool },
}

/// An expression evaluated for its side effects.
#[derive(Debug)]
pub struct EvalStmt {
    pub expression: Expression,

    pub span: InputSpan,
}

#[derive(Debug)]
pub struct AssertStmt {
    pub condition: Expression,

    pub span: InputSpan,
}
