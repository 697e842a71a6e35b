//! Classification error definitions.

mod kinds;

use crate::environment::NamedEntityKind;
use crate::source::{InputSpan, SourceOrigin};
use codespan_reporting::diagnostic::{Diagnostic, Label};

/// The rule a rejected expression violated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source code could not be parsed.
    Syntax,

    /// The dialect pragma names an unknown dialect.
    UnknownDialect,

    /// A name does not refer to any declaration.
    UnknownName,

    /// A name refers to a declaration of the wrong kind.
    KindMismatch,

    /// A name or a field is declared or initialized twice.
    AlreadyDefined,

    /// An assignment target, or a reference-returning function body, is not a storage location.
    NotAnLValue,

    /// An assignment target, or a reference-returning function body, is const-qualified.
    ConstTarget,

    /// An assignment or address-of operand has a function type rather than an object type.
    FunctionType,

    /// Address-of is applied to an rvalue.
    InvalidOperand,

    NotAPointer,
    UnknownField,
    NotAStruct,
    NotAnArray,
    NotCallable,
    WrongArgumentCount,
    TypeMismatch,
    UnsupportedOperands,
    CannotInferType,

    /// A declared object would not fit into the storage limit.
    ObjectTooLarge,
}

/// A user-caused error detected during classification.
///
/// Classification errors are terminal for the expression being classified. When a whole
/// program is being compiled, they are collected and reported to the user at the end.
#[derive(Debug)]
pub struct ClassificationError {
    /// The rule the rejected expression violated.
    pub kind: ErrorKind,

    /// Unique code identifying a class of errors.
    pub code: &'static str,

    /// Short (single-line) message describing the problem.
    pub message: String,

    /// Location in code where the problem occurred.
    pub location: Option<InputSpan>,

    /// Extended description of the problem that is shown directly next to code.
    pub subtitle: Option<String>,

    /// Useful information related to the error, bound to some location in code.
    pub bound_notes: Vec<(InputSpan, String)>,

    /// Useful information related to the error, not bound to any location.
    pub free_notes: Vec<String>,
}

pub use kinds::constructors::*;

impl ClassificationError {
    /// Creates a new classification error.
    ///
    /// Constructor functions from `kinds` should be used from the outside of this module.
    fn new(kind: ErrorKind, code: &'static str, message: impl Into<String>) -> ClassificationError {
        ClassificationError {
            kind,
            code,
            message: message.into(),
            location: None,
            subtitle: None,
            bound_notes: Vec::new(),
            free_notes: Vec::new(),
        }
    }

    /// Annotates an error with a location in source code which refers to the primary cause.
    fn with_location(self, location: SourceOrigin) -> ClassificationError {
        let (location, location_note) = match location {
            SourceOrigin::Plain(span) => (span, None),
            SourceOrigin::AutoDeref(span) => {
                (span, Some("expression was automatically dereferenced"))
            }
            SourceOrigin::Loaded(span) => (span, Some("expression was read as a value")),
        };

        let location_note = location_note.map(|note| (location, note.to_string()));

        let mut bound_notes = self.bound_notes;
        if let Some(location_note) = location_note {
            bound_notes.push(location_note);
        }

        ClassificationError {
            bound_notes,
            location: Some(location),
            ..self
        }
    }

    /// Annotates an error with a subtitle to be displayed next to the primary cause location.
    fn with_subtitle(self, subtitle: impl Into<String>) -> ClassificationError {
        ClassificationError {
            subtitle: Some(subtitle.into()),
            ..self
        }
    }

    /// Annotates an error with a note referring to an auxiliary location in code.
    fn with_bound_note(
        mut self,
        location: InputSpan,
        note: impl Into<String>,
    ) -> ClassificationError {
        self.bound_notes.push((location, note.into()));
        self
    }

    /// Annotates an error with a note only when `location` is present.
    fn maybe_with_bound_note<N: Into<String>>(
        self,
        location: Option<InputSpan>,
        note: impl FnOnce() -> N,
    ) -> ClassificationError {
        if let Some(location) = location {
            self.with_bound_note(location, note())
        } else {
            self
        }
    }

    /// Annotates an error with a note that cannot be linked to source code in a meaningful way.
    fn with_free_note(mut self, note: impl Into<String>) -> ClassificationError {
        self.free_notes.push(note.into());
        self
    }

    /// Builds a `codespan_reporting` diagnostic that can be used for displaying the error.
    pub fn to_codespan<I: Copy>(&self, file_id: I) -> Diagnostic<I> {
        let mut labels = Vec::new();

        if let Some(ref location) = self.location {
            if let Some(ref subtitle) = self.subtitle {
                labels.push(
                    Label::primary(file_id, location.start..location.end).with_message(subtitle),
                );
            } else {
                labels.push(Label::primary(file_id, location.start..location.end));
            }
        }

        for (location, note) in &self.bound_notes {
            labels.push(Label::secondary(file_id, location.start..location.end).with_message(note));
        }

        Diagnostic::error()
            .with_code(self.code)
            .with_message(&self.message)
            .with_labels(labels)
            .with_notes(self.free_notes.clone())
    }
}

impl NamedEntityKind {
    fn text(&self) -> &'static str {
        match self {
            NamedEntityKind::Variable => "variable",
            NamedEntityKind::Function => "function",
            NamedEntityKind::Struct => "struct",
        }
    }
}
