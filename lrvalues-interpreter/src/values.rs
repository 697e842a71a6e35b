//! Representing and handling values of the expression language.

use lrvalues::program::Type;
use std::fmt::{self, Display, Formatter};

/// Identifies a storage cell in the `Store`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellId(pub(crate) usize);

/// A location in storage: a cell, and a path of field and element indices leading to a nested
/// object inside of it.
///
/// Places are handles passed by value. Two places referring to the same storage are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Place {
    pub cell: CellId,
    pub path: Vec<usize>,
}

impl Place {
    /// A place referring to the whole contents of `cell`.
    pub fn root(cell: CellId) -> Place {
        Place {
            cell,
            path: Vec::new(),
        }
    }

    /// A place referring to the field or element with the given index inside of `self`.
    pub fn child(&self, index: usize) -> Place {
        let mut path = self.path.clone();
        path.push(index);
        Place {
            cell: self.cell,
            path,
        }
    }
}

/// A value of any value category.
///
/// Lvalues are represented as places, so that they could be modified.
#[derive(Clone, Debug)]
pub enum Value {
    Lvalue(Place),
    Rvalue(Rvalue),
}

impl Value {
    /// Attempts to treat a value as an lvalue.
    ///
    /// Panics if the value is an rvalue.
    pub fn into_lvalue(self) -> Place {
        match self {
            Value::Lvalue(place) => place,
            Value::Rvalue(_) => panic!("Rvalue accessed as lvalue."),
        }
    }

    /// Attempts to treat a value as an rvalue. Lvalues must be read through an explicit load.
    ///
    /// Panics if the value is an lvalue.
    pub fn into_rvalue(self) -> Rvalue {
        match self {
            Value::Rvalue(value) => value,
            Value::Lvalue(_) => panic!("Lvalue used as rvalue without a load."),
        }
    }
}

/// Contents of storage.
///
/// Aggregates own their elements directly: copying an aggregate copies all nested values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rvalue {
    Int(i64),
    Bool(bool),

    /// A pointer to some storage, unless it is null, in which case the `Option` is `None`.
    Pointer(Option<Place>),

    Array(Vec<Rvalue>),

    /// A struct instance, with field values in declaration order.
    Struct(Vec<Rvalue>),
}

impl Rvalue {
    /// The value that storage of `type_` holds before anything is written to it.
    pub fn zero(type_: &Type) -> Rvalue {
        match type_ {
            Type::Int => Rvalue::Int(0),
            Type::Bool => Rvalue::Bool(false),
            Type::Pointer(_) => Rvalue::Pointer(None),
            Type::Array(element, length) => Rvalue::Array(vec![Rvalue::zero(element); *length]),
            Type::Struct(struct_) => Rvalue::Struct(
                struct_
                    .fields
                    .iter()
                    .map(|field| Rvalue::zero(&field.type_))
                    .collect(),
            ),
            Type::Function(_) => panic!("Tried to zero-initialize a function."),
        }
    }

    /// Asserts that the value has type `int` and extracts the underlying integer value.
    pub fn as_int(&self) -> i64 {
        match self {
            Rvalue::Int(x) => *x,
            _ => panic_wrong_type("int", self.type_()),
        }
    }

    /// Asserts that the value has type `bool` and extracts the underlying boolean value.
    pub fn as_bool(&self) -> bool {
        match self {
            Rvalue::Bool(b) => *b,
            _ => panic_wrong_type("bool", self.type_()),
        }
    }

    /// Asserts that the value is a pointer and extracts the underlying place.
    pub fn into_pointer(self) -> Option<Place> {
        let type_ = self.type_();
        match self {
            Rvalue::Pointer(p) => p,
            _ => panic_wrong_type("pointer", type_),
        }
    }

    /// Asserts that the value is an aggregate and extracts its element with the given index.
    pub fn into_child(self, index: usize) -> Rvalue {
        let type_ = self.type_();
        match self {
            Rvalue::Array(mut elements) | Rvalue::Struct(mut elements) => {
                elements.swap_remove(index)
            }
            _ => panic_wrong_type("aggregate", type_),
        }
    }

    pub(crate) fn child(&self, index: usize) -> &Rvalue {
        match self {
            Rvalue::Array(elements) | Rvalue::Struct(elements) => &elements[index],
            _ => panic_wrong_type("aggregate", self.type_()),
        }
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> &mut Rvalue {
        let type_ = self.type_();
        match self {
            Rvalue::Array(elements) | Rvalue::Struct(elements) => &mut elements[index],
            _ => panic_wrong_type("aggregate", type_),
        }
    }

    /// Provides quick information about the value type in runtime, for type mismatch panics,
    /// which should not occur under normal circumstances.
    pub fn type_(&self) -> &'static str {
        match self {
            Rvalue::Int(_) => "int",
            Rvalue::Bool(_) => "bool",
            Rvalue::Pointer(_) => "pointer",
            Rvalue::Array(_) => "array",
            Rvalue::Struct(_) => "struct",
        }
    }
}

impl Display for Rvalue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Rvalue::Int(x) => write!(f, "{}", x),
            Rvalue::Bool(b) => write!(f, "{}", b),
            Rvalue::Pointer(None) => write!(f, "null"),
            Rvalue::Pointer(Some(place)) => {
                write!(f, "&#{}", place.cell.0)?;
                for index in &place.path {
                    write!(f, ".{}", index)?;
                }
                Ok(())
            }
            Rvalue::Array(elements) => write!(f, "[{}]", join_values(elements)),
            Rvalue::Struct(fields) => write!(f, "{{{}}}", join_values(fields)),
        }
    }
}

fn join_values(values: &[Rvalue]) -> String {
    let values: Vec<_> = values.iter().map(Rvalue::to_string).collect();
    values.join(", ")
}

pub fn panic_wrong_type(expected_type: &str, actual_type: &str) -> ! {
    panic!(
        "Runtime type mismatch: expected `{}`, got `{}`",
        expected_type, actual_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrvalues::program::{Field, QualifiedType, StructType};
    use std::rc::Rc;

    #[test]
    fn zero_values_follow_type_structure() {
        let struct_ = StructType {
            name: "S".to_string(),
            fields: vec![
                Field::new("i", Type::Int, false),
                Field::new("p", Type::pointer_to(QualifiedType::mutable(Type::Int)), false),
            ],
            definition_site: None,
        };
        let type_ = Type::array_of(Type::Struct(Rc::new(struct_)), 2);

        let zero = Rvalue::Struct(vec![Rvalue::Int(0), Rvalue::Pointer(None)]);
        assert_eq!(Rvalue::zero(&type_), Rvalue::Array(vec![zero.clone(), zero]));
    }

    #[test]
    fn places_extend_paths() {
        let place = Place::root(CellId(3)).child(1).child(0);
        assert_eq!(place.cell, CellId(3));
        assert_eq!(place.path, vec![1, 0]);
    }

    #[test]
    fn displays_nested_values() {
        let value = Rvalue::Struct(vec![
            Rvalue::Array(vec![Rvalue::Int(3), Rvalue::Int(1)]),
            Rvalue::Bool(true),
        ]);
        assert_eq!(value.to_string(), "{[3, 1], true}");
    }
}
