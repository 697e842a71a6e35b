//! Named entity visibility hierarchy management.

use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::Identifier;
use crate::errors::{self, ClassificationError};
use crate::program::{
    Field, FunctionDecl, FunctionId, FunctionType, QualifiedType, ReturnContract, StructType,
    Type, Variable, VariableId,
};
use crate::source::{InputSpan, SourceOrigin};

#[derive(Clone, Debug)]
pub enum NamedEntity {
    Variable(Rc<Variable>),
    Function(Rc<FunctionDecl>),
    Struct(Rc<StructType>),
}

impl NamedEntity {
    pub fn kind(&self) -> NamedEntityKind {
        match self {
            NamedEntity::Variable(_) => NamedEntityKind::Variable,
            NamedEntity::Function(_) => NamedEntityKind::Function,
            NamedEntity::Struct(_) => NamedEntityKind::Struct,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NamedEntity::Variable(variable) => &variable.name,
            NamedEntity::Function(function) => &function.name,
            NamedEntity::Struct(struct_) => &struct_.name,
        }
    }

    pub fn definition_site(&self) -> Option<InputSpan> {
        match self {
            NamedEntity::Variable(variable) => variable.definition_site,
            NamedEntity::Function(function) => function.definition_site,
            NamedEntity::Struct(struct_) => struct_.definition_site,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NamedEntityKind {
    Variable,
    Function,
    Struct,
}

/// Maps names to declarations.
///
/// Declarations live in a stack of frames: the bottom frame holds globals, upper frames hold
/// function parameters. Entities in upper frames shadow entities with the same names in lower
/// frames. A name can only be declared once per frame.
pub struct Environment {
    // Never empty: the bottom frame is the global frame.
    frames: Vec<HashMap<String, NamedEntity>>,

    next_variable_id: usize,
    next_function_id: usize,
}

impl Environment {
    /// Creates an environment with an empty global frame.
    pub fn new() -> Environment {
        Environment {
            frames: vec![HashMap::new()],
            next_variable_id: 0,
            next_function_id: 0,
        }
    }

    /// Creates a new frame, pushing the existing frames below it.
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Discards the topmost frame. Has to be called after `push`.
    pub fn pop(&mut self) {
        if self.frames.len() == 1 {
            panic!("Attempted to pop the global frame.");
        }
        self.frames.pop();
    }

    /// Declares a variable that does not originate from source code.
    pub fn declare_variable(
        &mut self,
        name: impl Into<String>,
        type_: Type,
        is_const: bool,
    ) -> Result<Rc<Variable>, ClassificationError> {
        self.add_variable_at(name.into(), QualifiedType::new(type_, is_const), None)
    }

    /// Declares a function signature that does not originate from source code.
    pub fn declare_function(
        &mut self,
        name: impl Into<String>,
        parameters: Vec<Type>,
        returns: ReturnContract,
    ) -> Result<Rc<FunctionDecl>, ClassificationError> {
        self.add_function_at(name.into(), FunctionType { parameters, returns }, None)
    }

    /// Declares a struct type that does not originate from source code.
    pub fn declare_struct(
        &mut self,
        name: impl Into<String>,
        fields: Vec<Field>,
    ) -> Result<Rc<StructType>, ClassificationError> {
        self.add_struct_at(name.into(), fields, None)
    }

    pub(crate) fn add_variable(
        &mut self,
        name: &Identifier,
        type_: QualifiedType,
    ) -> Result<Rc<Variable>, ClassificationError> {
        self.add_variable_at(name.text.clone(), type_, Some(name.span))
    }

    pub(crate) fn add_function(
        &mut self,
        name: &Identifier,
        type_: FunctionType,
        definition_site: InputSpan,
    ) -> Result<Rc<FunctionDecl>, ClassificationError> {
        self.add_function_at(name.text.clone(), type_, Some(definition_site))
    }

    pub(crate) fn add_struct(
        &mut self,
        name: &Identifier,
        fields: Vec<Field>,
    ) -> Result<Rc<StructType>, ClassificationError> {
        self.add_struct_at(name.text.clone(), fields, Some(name.span))
    }

    /// Looks up an entity by name, starting from the topmost frame.
    pub fn lookup(&self, name: &str) -> Option<&NamedEntity> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    pub fn lookup_variable(
        &self,
        name: &str,
        reference_location: SourceOrigin,
    ) -> Result<&Rc<Variable>, ClassificationError> {
        self.lookup_entity_kind(
            name,
            reference_location,
            NamedEntityKind::Variable,
            |entity| match entity {
                NamedEntity::Variable(variable) => Some(variable),
                _ => None,
            },
        )
    }

    pub fn lookup_struct(
        &self,
        name: &str,
        reference_location: SourceOrigin,
    ) -> Result<&Rc<StructType>, ClassificationError> {
        self.lookup_entity_kind(name, reference_location, NamedEntityKind::Struct, |entity| {
            match entity {
                NamedEntity::Struct(struct_) => Some(struct_),
                _ => None,
            }
        })
    }

    fn add_variable_at(
        &mut self,
        name: String,
        type_: QualifiedType,
        definition_site: Option<InputSpan>,
    ) -> Result<Rc<Variable>, ClassificationError> {
        let variable = Rc::new(Variable {
            id: VariableId(self.next_variable_id),
            name,
            type_,
            definition_site,
        });
        self.add_entity(NamedEntity::Variable(Rc::clone(&variable)))?;
        self.next_variable_id += 1;
        Ok(variable)
    }

    fn add_function_at(
        &mut self,
        name: String,
        type_: FunctionType,
        definition_site: Option<InputSpan>,
    ) -> Result<Rc<FunctionDecl>, ClassificationError> {
        let function = Rc::new(FunctionDecl {
            id: FunctionId(self.next_function_id),
            name,
            type_: Rc::new(type_),
            definition_site,
        });
        self.add_entity(NamedEntity::Function(Rc::clone(&function)))?;
        self.next_function_id += 1;
        Ok(function)
    }

    fn add_struct_at(
        &mut self,
        name: String,
        fields: Vec<Field>,
        definition_site: Option<InputSpan>,
    ) -> Result<Rc<StructType>, ClassificationError> {
        let struct_ = Rc::new(StructType {
            name,
            fields,
            definition_site,
        });
        self.add_entity(NamedEntity::Struct(Rc::clone(&struct_)))?;
        Ok(struct_)
    }

    fn top_frame_mut(&mut self) -> &mut HashMap<String, NamedEntity> {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => panic!("Environment has no frames."),
        }
    }

    // Generic helper method for looking up different kinds of named entities.
    fn lookup_entity_kind<T>(
        &self,
        name: &str,
        reference_location: SourceOrigin,
        expected_kind: NamedEntityKind,
        pattern: impl FnOnce(&NamedEntity) -> Option<&T>,
    ) -> Result<&T, ClassificationError> {
        match self.lookup(name) {
            Some(entity) => match pattern(entity) {
                Some(target) => Ok(target),
                None => Err(errors::named_entity_kind_mismatch(
                    name,
                    expected_kind,
                    entity.kind(),
                    reference_location,
                    entity.definition_site(),
                )),
            },
            None => Err(errors::named_entity_not_found(
                name,
                expected_kind,
                reference_location,
            )),
        }
    }

    fn add_entity(&mut self, entity: NamedEntity) -> Result<(), ClassificationError> {
        let frame = self.top_frame_mut();
        if let Some(existing) = frame.get(entity.name()) {
            let location = entity
                .definition_site()
                .unwrap_or_else(InputSpan::top_of_file);
            return Err(errors::named_entity_already_defined(
                entity.name(),
                SourceOrigin::Plain(location),
                existing.definition_site(),
            ));
        }

        frame.insert(entity.name().to_string(), entity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn upper_frames_shadow_lower_frames() {
        let mut env = Environment::new();
        env.declare_variable("x", Type::Int, false).unwrap();

        env.push();
        env.declare_variable("x", Type::Bool, true).unwrap();
        let inner = env.lookup_variable("x", SourceOrigin::Plain(InputSpan::top_of_file()));
        assert_eq!(inner.unwrap().type_, QualifiedType::constant(Type::Bool));

        env.pop();
        let outer = env.lookup_variable("x", SourceOrigin::Plain(InputSpan::top_of_file()));
        assert_eq!(outer.unwrap().type_, QualifiedType::mutable(Type::Int));
    }

    #[test]
    fn names_are_unique_within_a_frame() {
        let mut env = Environment::new();
        env.declare_variable("f", Type::Int, false).unwrap();

        let error = env
            .declare_function("f", vec![], ReturnContract::Value(Type::Int))
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::AlreadyDefined);
    }

    #[test]
    fn lookup_reports_kind_mismatch() {
        let mut env = Environment::new();
        env.declare_struct("S", vec![]).unwrap();

        let error = env
            .lookup_variable("S", SourceOrigin::Plain(InputSpan::top_of_file()))
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::KindMismatch);

        let error = env
            .lookup_struct("T", SourceOrigin::Plain(InputSpan::top_of_file()))
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::UnknownName);
    }

    #[test]
    fn variables_get_distinct_ids() {
        let mut env = Environment::new();
        let x = env.declare_variable("x", Type::Int, false).unwrap();
        let y = env.declare_variable("y", Type::Int, false).unwrap();
        assert_ne!(x.id, y.id);
    }

    #[test]
    #[should_panic]
    fn global_frame_cannot_be_popped() {
        let mut env = Environment::new();
        env.pop();
    }
}
