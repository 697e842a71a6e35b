//! Options for controlling classifier behavior.

use crate::program::ValueCategory;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The two source dialects disagree on what an assignment expression denotes, and on whether
/// compound literals have storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// Value-assignment dialect: `x = v` is an rvalue holding the assigned value. Compound
    /// literals are unnamed lvalues with automatic storage.
    C,

    /// Reference-assignment dialect: `x = v` is an lvalue referring to `x`. Compound literals
    /// are temporaries (rvalues).
    Cpp,
}

impl Dialect {
    pub fn assignment_category(self) -> ValueCategory {
        match self {
            Dialect::C => ValueCategory::Rvalue,
            Dialect::Cpp => ValueCategory::Lvalue,
        }
    }

    pub fn compound_literal_category(self) -> ValueCategory {
        match self {
            Dialect::C => ValueCategory::Lvalue,
            Dialect::Cpp => ValueCategory::Rvalue,
        }
    }

    pub fn all() -> [Dialect; 2] {
        [Dialect::C, Dialect::Cpp]
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::C => write!(f, "c"),
            Dialect::Cpp => write!(f, "cpp"),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(name: &str) -> Result<Dialect, String> {
        match name {
            "c" => Ok(Dialect::C),
            "cpp" | "c++" => Ok(Dialect::Cpp),
            _ => Err(format!("unknown dialect `{}`", name)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ClassifierOptions {
    pub dialect: Dialect,
}

impl ClassifierOptions {
    pub fn default() -> ClassifierOptions {
        ClassifierOptions {
            dialect: Dialect::C,
        }
    }

    pub fn with_dialect(dialect: Dialect) -> ClassifierOptions {
        ClassifierOptions { dialect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dialect_names() {
        assert_eq!("c".parse::<Dialect>(), Ok(Dialect::C));
        assert_eq!("cpp".parse::<Dialect>(), Ok(Dialect::Cpp));
        assert_eq!("c++".parse::<Dialect>(), Ok(Dialect::Cpp));
        assert!("rust".parse::<Dialect>().is_err());
    }

    #[test]
    fn dialects_disagree_on_assignment() {
        assert_eq!(Dialect::C.assignment_category(), ValueCategory::Rvalue);
        assert_eq!(Dialect::Cpp.assignment_category(), ValueCategory::Lvalue);
    }
}
