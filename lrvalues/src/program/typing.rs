//! Types of the expression language.
//!
//! The only distinction the assignability rules care about is between object types (everything
//! that has storage) and function types. The rest of the type system exists so that storage can
//! be navigated: pointers lead to other storage, arrays and structs contain nested storage.

use crate::source::InputSpan;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// The largest object, in scalar slots, that a program may declare.
pub const MAX_OBJECT_SIZE: usize = 1 << 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Int,
    Bool,

    /// A pointer to storage of the given (possibly const-qualified) type.
    Pointer(Box<QualifiedType>),

    /// A fixed-size array. Elements share the qualification of the array itself.
    Array(Box<Type>, usize),

    Struct(Rc<StructType>),

    /// The type of a function designator. This is the only non-object type.
    Function(Rc<FunctionType>),
}

impl Type {
    pub fn pointer_to(target: QualifiedType) -> Type {
        Type::Pointer(Box::new(target))
    }

    pub fn array_of(element: Type, length: usize) -> Type {
        Type::Array(Box::new(element), length)
    }

    /// Object types are all types that are not function types: they describe storage with a
    /// size.
    pub fn is_object(&self) -> bool {
        match self {
            Type::Function(_) => false,
            _ => true,
        }
    }

    pub fn is_int(&self) -> bool {
        *self == Type::Int
    }

    pub fn is_bool(&self) -> bool {
        *self == Type::Bool
    }

    pub fn pointer_target(&self) -> Option<&QualifiedType> {
        match self {
            Type::Pointer(target) => Some(target),
            _ => None,
        }
    }

    pub fn array_element(&self) -> Option<&Type> {
        match self {
            Type::Array(element, _) => Some(element),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Rc<StructType>> {
        match self {
            Type::Struct(struct_) => Some(struct_),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Rc<FunctionType>> {
        match self {
            Type::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Checks if storage of this type holds any const-qualified fields, directly or inside
    /// nested arrays and structs. Such storage cannot be overwritten as a whole.
    pub fn contains_const(&self) -> bool {
        match self {
            Type::Array(element, _) => element.contains_const(),
            Type::Struct(struct_) => struct_
                .fields
                .iter()
                .any(|field| field.is_const || field.type_.contains_const()),
            _ => false,
        }
    }

    /// The number of scalar slots in storage of this type, or `None` if it does not fit into
    /// `usize`.
    pub fn object_size(&self) -> Option<usize> {
        match self {
            Type::Int | Type::Bool | Type::Pointer(_) => Some(1),
            Type::Array(element, length) => element.object_size()?.checked_mul(*length),
            Type::Struct(struct_) => struct_.fields.iter().try_fold(0usize, |total, field| {
                total.checked_add(field.type_.object_size()?)
            }),
            Type::Function(_) => Some(0),
        }
    }

    /// Checks if a value of type `other` can be stored where a value of `self` is expected.
    ///
    /// Types must match exactly, except that a pointer may gain const-qualification of its
    /// target (`*int` converts to `*const int`, but not the other way around).
    pub fn accepts(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Pointer(expected), Type::Pointer(actual)) => {
                expected.type_ == actual.type_ && (expected.is_const || !actual.is_const)
            }
            _ => self == other,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
            Type::Pointer(target) => write!(f, "*{}", target),
            Type::Array(element, length) => write!(f, "[{}; {}]", element, length),
            Type::Struct(struct_) => write!(f, "{}", struct_.name),
            Type::Function(function) => write!(f, "{}", function),
        }
    }
}

/// A type together with the const-qualification of the storage it describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualifiedType {
    pub type_: Type,
    pub is_const: bool,
}

impl QualifiedType {
    pub fn new(type_: Type, is_const: bool) -> QualifiedType {
        QualifiedType { type_, is_const }
    }

    pub fn mutable(type_: Type) -> QualifiedType {
        QualifiedType::new(type_, false)
    }

    pub fn constant(type_: Type) -> QualifiedType {
        QualifiedType::new(type_, true)
    }

    /// Drops the qualification, as happens when the storage is read into a value.
    pub fn unqualified(&self) -> QualifiedType {
        QualifiedType::mutable(self.type_.clone())
    }

    /// Adds const-qualification if `is_const` is set, keeping existing qualification otherwise.
    pub fn with_const(self, is_const: bool) -> QualifiedType {
        QualifiedType {
            is_const: self.is_const || is_const,
            ..self
        }
    }
}

impl Display for QualifiedType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_const {
            write!(f, "const {}", self.type_)
        } else {
            write!(f, "{}", self.type_)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct StructType {
    pub name: String,
    pub fields: Vec<Field>,

    pub definition_site: Option<InputSpan>,
}

impl StructType {
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub type_: Type,
    pub is_const: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, type_: Type, is_const: bool) -> Field {
        Field {
            name: name.into(),
            type_,
            is_const,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FunctionType {
    pub parameters: Vec<Type>,
    pub returns: ReturnContract,
}

impl Display for FunctionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parameters: Vec<_> = self.parameters.iter().map(Type::to_string).collect();
        write!(f, "fun({}) -> {}", parameters.join(", "), self.returns)
    }
}

/// What a call hands back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReturnContract {
    /// A fresh value: calls are rvalues.
    Value(Type),

    /// An alias to existing storage: calls are lvalues.
    Reference(QualifiedType),
}

impl ReturnContract {
    pub fn type_(&self) -> &Type {
        match self {
            ReturnContract::Value(type_) => type_,
            ReturnContract::Reference(target) => &target.type_,
        }
    }
}

impl Display for ReturnContract {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReturnContract::Value(type_) => write!(f, "{}", type_),
            ReturnContract::Reference(target) => write!(f, "&{}", target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_functions_are_not_objects() {
        let function = Type::Function(Rc::new(FunctionType {
            parameters: vec![Type::Int],
            returns: ReturnContract::Value(Type::Int),
        }));

        assert!(Type::Int.is_object());
        assert!(Type::array_of(Type::Bool, 2).is_object());
        assert!(Type::pointer_to(QualifiedType::mutable(function.clone())).is_object());
        assert!(!function.is_object());
    }

    #[test]
    fn pointers_can_gain_const_but_not_lose_it() {
        let to_int = Type::pointer_to(QualifiedType::mutable(Type::Int));
        let to_const_int = Type::pointer_to(QualifiedType::constant(Type::Int));

        assert!(to_const_int.accepts(&to_int));
        assert!(!to_int.accepts(&to_const_int));
        assert!(!Type::Int.accepts(&Type::Bool));
    }

    #[test]
    fn const_fields_are_found_in_nested_storage() {
        let inner = Rc::new(StructType {
            name: "Inner".to_string(),
            fields: vec![Field::new("k", Type::Int, true)],
            definition_site: None,
        });
        let outer = Rc::new(StructType {
            name: "Outer".to_string(),
            fields: vec![Field::new("inner", Type::array_of(Type::Struct(inner), 2), false)],
            definition_site: None,
        });

        assert!(Type::Struct(outer).contains_const());
        assert!(!Type::array_of(Type::Int, 3).contains_const());
        assert!(!Type::pointer_to(QualifiedType::constant(Type::Int)).contains_const());
    }

    #[test]
    fn object_sizes_count_scalars() {
        let pair = Rc::new(StructType {
            name: "Pair".to_string(),
            fields: vec![
                Field::new("a", Type::Int, false),
                Field::new("b", Type::array_of(Type::Bool, 3), false),
            ],
            definition_site: None,
        });

        assert_eq!(Type::array_of(Type::Struct(pair), 2).object_size(), Some(8));
        let huge = Type::array_of(Type::array_of(Type::Int, usize::max_value()), 2);
        assert_eq!(huge.object_size(), None);
    }

    #[test]
    fn displays_qualified_pointers() {
        let type_ = Type::pointer_to(QualifiedType::constant(Type::array_of(Type::Int, 2)));
        assert_eq!(type_.to_string(), "*const [int; 2]");
    }

    #[test]
    fn displays_function_signatures() {
        let type_ = Type::Function(Rc::new(FunctionType {
            parameters: vec![Type::pointer_to(QualifiedType::mutable(Type::Int)), Type::Int],
            returns: ReturnContract::Reference(QualifiedType::constant(Type::Int)),
        }));
        assert_eq!(type_.to_string(), "fun(*int, int) -> &const int");
    }
}
