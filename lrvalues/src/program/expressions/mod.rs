//! Classified expressions: every node knows its type and value category.

use crate::program::{QualifiedType, ValueCategory};
use crate::source::SourceOrigin;
use enum_dispatch::enum_dispatch;

pub mod address;
pub mod array_literal;
pub mod assign;
pub mod binary_op;
pub mod call;
pub mod compound_literal;
pub mod deref;
pub mod field_access;
pub mod function;
pub mod index;
pub mod literal;
pub mod load;
pub mod unary_op;
pub mod variable;

/// A node of a classified expression tree.
///
/// The type and value category of a node are derived from its kind once, on construction.
/// Nodes are never mutated afterwards.
pub struct Expression {
    kind: ExpressionKind,
    type_: QualifiedType,
    value_category: ValueCategory,
}

impl Expression {
    pub fn new(kind: impl Into<ExpressionKind>) -> Expression {
        let kind = kind.into();
        let type_ = kind.calculate_type();
        let value_category = kind.calculate_value_category();

        Expression {
            kind,
            type_,
            value_category,
        }
    }

    pub fn kind(&self) -> &ExpressionKind {
        &self.kind
    }

    pub fn location(&self) -> SourceOrigin {
        self.kind.location()
    }

    pub fn type_(&self) -> &QualifiedType {
        &self.type_
    }

    pub fn value_category(&self) -> ValueCategory {
        self.value_category
    }

    pub fn is_lvalue(&self) -> bool {
        self.value_category == ValueCategory::Lvalue
    }
}

#[enum_dispatch]
pub enum ExpressionKind {
    Variable(variable::VariableExpr),
    Function(function::FunctionExpr),
    Literal(literal::LiteralExpr),
    Load(load::LoadExpr),
    Deref(deref::DerefExpr),
    FieldAccess(field_access::FieldAccessExpr),
    Index(index::IndexExpr),
    Address(address::AddressExpr),
    Call(call::CallExpr),
    Assign(assign::AssignExpr),
    UnaryOp(unary_op::UnaryOpExpr),
    BinaryOp(binary_op::BinaryOpExpr),
    CompoundLiteral(compound_literal::CompoundLiteralExpr),
    ArrayLiteral(array_literal::ArrayLiteralExpr),
}

/// Rules shared by all classified expression kinds.
///
/// Implementations may assume that the node was validated by the classifier, and panic if it
/// is in an invalid state.
#[enum_dispatch(ExpressionKind)]
pub trait ExpressionKindImpl {
    fn calculate_type(&self) -> QualifiedType;
    fn calculate_value_category(&self) -> ValueCategory;
    fn location(&self) -> SourceOrigin;
}
