//! Value categories definitions.

use std::fmt::{self, Display, Formatter};

/// The value category determines what operations an expression supports.
///
/// Every node of a classified expression tree has a determined value category.
///
/// There are only two value categories: rvalue and lvalue. Every lvalue can be used as an
/// rvalue (through a load), but not the other way around. Lvalues are expressions that denote
/// a location in storage. Only lvalues support addressing and assignment.
///
/// Arguably the most common kind of lvalue expression is a variable reference.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ValueCategory {
    /// An expression denoting a storage location.
    Lvalue,

    /// An expression denoting a transient value, potentially without storage.
    Rvalue,
}

impl Display for ValueCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValueCategory::Lvalue => write!(f, "lvalue"),
            ValueCategory::Rvalue => write!(f, "rvalue"),
        }
    }
}
