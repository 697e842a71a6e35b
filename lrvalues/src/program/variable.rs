use crate::program::QualifiedType;
use crate::source::InputSpan;

/// Identifies a single declaration of a variable or parameter.
///
/// Parameters of a function get a single id shared by all of its invocations; the runtime is
/// responsible for binding a fresh storage cell on every call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct VariableId(pub(crate) usize);

/// A named storage location.
#[derive(Debug)]
pub struct Variable {
    pub id: VariableId,
    pub name: String,
    pub type_: QualifiedType,

    /// Location of the declaration, if the variable was declared in source code.
    pub definition_site: Option<InputSpan>,
}
