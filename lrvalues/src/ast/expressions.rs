//! Syntactic expressions.
//!
//! Syntax tree nodes carry no value category: categories are derived by the classifier and
//! attached to the nodes of `program::Expression` instead.

use crate::ast::Identifier;
use crate::source::InputSpan;
use enum_dispatch::enum_dispatch;
use std::fmt::{self, Display, Formatter};

/// A node of the expression language. Every node exclusively owns its children.
#[enum_dispatch]
#[derive(Clone, Debug)]
pub enum Expression {
    Variable(VariableExpr),
    IntLiteral(IntLiteralExpr),
    BoolLiteral(BoolLiteralExpr),
    Deref(DerefExpr),
    FieldAccess(FieldAccessExpr),
    Index(IndexExpr),
    Address(AddressExpr),
    Call(CallExpr),
    Assign(AssignExpr),
    UnaryOp(UnaryOperatorExpr),
    BinaryOp(BinaryOperatorExpr),
    CompoundLiteral(CompoundLiteralExpr),
    ArrayLiteral(ArrayLiteralExpr),
}

// We don't expose the generated methods of `Expression` to the outside, keeping usage of
// `enum_dispatch` as opaque as possible.
#[enum_dispatch(Expression)]
trait ExpressionKind {
    fn span_(&self) -> InputSpan;
}

macro_rules! impl_expr_kind {
    ($type_name:ty) => {
        impl ExpressionKind for $type_name {
            fn span_(&self) -> InputSpan {
                self.span
            }
        }
    };
}

impl Expression {
    pub fn span(&self) -> InputSpan {
        self.span_()
    }

    pub fn variable(name: impl Into<String>) -> Expression {
        Expression::Variable(VariableExpr {
            name: Identifier::new(name),
            span: InputSpan::top_of_file(),
        })
    }

    pub fn int_literal(value: i64) -> Expression {
        Expression::IntLiteral(IntLiteralExpr {
            value,
            span: InputSpan::top_of_file(),
        })
    }

    pub fn bool_literal(value: bool) -> Expression {
        Expression::BoolLiteral(BoolLiteralExpr {
            value,
            span: InputSpan::top_of_file(),
        })
    }

    pub fn deref(pointer: Expression) -> Expression {
        Expression::Deref(DerefExpr {
            pointer: Box::new(pointer),
            span: InputSpan::top_of_file(),
        })
    }

    pub fn field(receiver: Expression, field: impl Into<String>) -> Expression {
        Expression::FieldAccess(FieldAccessExpr {
            receiver: Box::new(receiver),
            field: Identifier::new(field),
            span: InputSpan::top_of_file(),
        })
    }

    pub fn index(collection: Expression, index: Expression) -> Expression {
        Expression::Index(IndexExpr {
            collection: Box::new(collection),
            index: Box::new(index),
            span: InputSpan::top_of_file(),
        })
    }

    pub fn address_of(target: Expression) -> Expression {
        Expression::Address(AddressExpr {
            target: Box::new(target),
            span: InputSpan::top_of_file(),
        })
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
        Expression::Call(CallExpr {
            callee: Box::new(callee),
            arguments,
            span: InputSpan::top_of_file(),
        })
    }

    pub fn assign(target: Expression, value: Expression) -> Expression {
        Expression::Assign(AssignExpr {
            target: Box::new(target),
            value: Box::new(value),
            span: InputSpan::top_of_file(),
        })
    }

    pub fn unary(operator: UnaryOperator, operand: Expression) -> Expression {
        Expression::UnaryOp(UnaryOperatorExpr {
            operator,
            operand: Box::new(operand),
            span: InputSpan::top_of_file(),
        })
    }

    pub fn binary(operator: BinaryOperator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::BinaryOp(BinaryOperatorExpr {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span: InputSpan::top_of_file(),
        })
    }

    pub fn compound_literal<N: Into<String>>(
        type_name: impl Into<String>,
        fields: Vec<(N, Expression)>,
    ) -> Expression {
        let fields = fields
            .into_iter()
            .map(|(name, value)| FieldInitializer {
                name: Identifier::new(name),
                value,
            })
            .collect();

        Expression::CompoundLiteral(CompoundLiteralExpr {
            type_name: Identifier::new(type_name),
            fields,
            span: InputSpan::top_of_file(),
        })
    }

    pub fn array_literal(elements: Vec<Expression>) -> Expression {
        Expression::ArrayLiteral(ArrayLiteralExpr {
            elements,
            span: InputSpan::top_of_file(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct VariableExpr {
    pub name: Identifier,

    pub span: InputSpan,
}
impl_expr_kind!(VariableExpr);

#[derive(Clone, Debug)]
pub struct IntLiteralExpr {
    pub value: i64,

    pub span: InputSpan,
}
impl_expr_kind!(IntLiteralExpr);

#[derive(Clone, Debug)]
pub struct BoolLiteralExpr {
    pub value: bool,

    pub span: InputSpan,
}
impl_expr_kind!(BoolLiteralExpr);

#[derive(Clone, Debug)]
pub struct DerefExpr {
    pub pointer: Box<Expression>,

    pub span: InputSpan,
}
impl_expr_kind!(DerefExpr);

#[derive(Clone, Debug)]
pub struct FieldAccessExpr {
    pub receiver: Box<Expression>,
    pub field: Identifier,

    pub span: InputSpan,
}
impl_expr_kind!(FieldAccessExpr);

#[derive(Clone, Debug)]
pub struct IndexExpr {
    pub collection: Box<Expression>,
    pub index: Box<Expression>,

    pub span: InputSpan,
}
impl_expr_kind!(IndexExpr);

#[derive(Clone, Debug)]
pub struct AddressExpr {
    pub target: Box<Expression>,

    pub span: InputSpan,
}
impl_expr_kind!(AddressExpr);

#[derive(Clone, Debug)]
pub struct CallExpr {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,

    pub span: InputSpan,
}
impl_expr_kind!(CallExpr);

#[derive(Clone, Debug)]
pub struct AssignExpr {
    pub target: Box<Expression>,
    pub value: Box<Expression>,

    pub span: InputSpan,
}
impl_expr_kind!(AssignExpr);

#[derive(Clone, Debug)]
pub struct UnaryOperatorExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,

    pub span: InputSpan,
}
impl_expr_kind!(UnaryOperatorExpr);

#[derive(Clone, Debug)]
pub struct BinaryOperatorExpr {
    pub operator: BinaryOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,

    pub span: InputSpan,
}
impl_expr_kind!(BinaryOperatorExpr);

/// A struct value written in place, like `S { i: 1, b: true }`.
#[derive(Clone, Debug)]
pub struct CompoundLiteralExpr {
    pub type_name: Identifier,
    pub fields: Vec<FieldInitializer>,

    pub span: InputSpan,
}
impl_expr_kind!(CompoundLiteralExpr);

#[derive(Clone, Debug)]
pub struct FieldInitializer {
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Clone, Debug)]
pub struct ArrayLiteralExpr {
    pub elements: Vec<Expression>,

    pub span: InputSpan,
}
impl_expr_kind!(ArrayLiteralExpr);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    LogicalNot,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::LogicalNot => "!",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    Eq,
    NotEq,
    LogicalAnd,
    LogicalOr,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use BinaryOperator::*;
        let symbol = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Less => "<",
            Greater => ">",
            LessEq => "<=",
            GreaterEq => ">=",
            Eq => "==",
            NotEq => "!=",
            LogicalAnd => "&&",
            LogicalOr => "||",
        };
        write!(f, "{}", symbol)
    }
}
