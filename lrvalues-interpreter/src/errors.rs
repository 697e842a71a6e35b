//! Runtime error and stack traces handling.

use crate::values::Rvalue;
use lrvalues::program::{CallExpr, FunctionDecl};
use lrvalues::source::SourceOrigin;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// An error caused by user that occurred while executing the program.
///
/// Once a runtime error is detected, normal program execution stops, and stack unwinding begins.
/// During stack unwinding, the interpreter backtracks through the function call stack leading to
/// the error, and attaches the stack information to the `RuntimeError` object.
#[derive(Debug)]
pub struct RuntimeError {
    /// The error message that is displayed to the user.
    message: String,

    /// The function call stack leading to the error.
    ///
    /// The first element is the innermost call, the last element is the outermost.
    call_stack: Vec<StackFrame>,

    /// A location in the stack not yet bound to a stack frame.
    ///
    /// When the information about the outer function call is provided through
    /// `annotate_stack_frame`, it will be joined with this location into a new stack frame on
    /// `call_stack`.
    bottom_location: Option<SourceOrigin>,
}

impl RuntimeError {
    /// Creates a new runtime error caused by the expression or item at `location`.
    pub fn new(message: impl Into<String>, location: SourceOrigin) -> RuntimeError {
        RuntimeError {
            message: message.into(),
            call_stack: Vec::new(),
            bottom_location: Some(location),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Appends a new stack frame during the unwinding process.
    ///
    /// The function called in the `CallExpr` is added as a frame, including the values of the
    /// arguments at the time of call, and the location reached inside the call (which is stored
    /// in `bottom_location`).
    pub fn annotate_stack_frame(mut self, call: &CallExpr, arguments: &[Rvalue]) -> RuntimeError {
        let frame = StackFrame {
            function: Rc::clone(&call.function),
            arguments: arguments.iter().map(Rvalue::to_string).collect(),
            location: self.bottom_location,
        };
        self.call_stack.push(frame);
        self.bottom_location = Some(call.location);
        self
    }

    /// Finishes the unwinding process and dumps the error with the stack trace to stderr.
    pub fn print_backtrace(&self, file_name: &str, source: &str) {
        eprintln!("Runtime error: {}.", self.message);

        let source_lines = LineNumberMapper::new(source);
        let report_location = |location: Option<SourceOrigin>| match location {
            Some(location) => format!(
                "{}:{}",
                file_name,
                source_lines.line_number(location.as_plain().start)
            ),
            None => "<unknown>".to_string(),
        };

        let mut frames: Vec<_> = self
            .call_stack
            .iter()
            .map(|frame| {
                format!(
                    "{}({}) at {}",
                    frame.function.name,
                    frame.arguments.join(", "),
                    report_location(frame.location)
                )
            })
            .collect();
        frames.push(format!("<top level> at {}", report_location(self.bottom_location)));

        eprintln!("\nCall stack (most nested call first):");
        for (index, frame) in frames.iter().enumerate() {
            eprintln!("#{}: {}", index, frame);
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A frame in an error stack trace.
#[derive(Debug)]
struct StackFrame {
    /// The called function.
    function: Rc<FunctionDecl>,

    /// The function arguments values at the time of call, stringified.
    arguments: Vec<String>,

    /// The location reached _inside_ the called function.
    location: Option<SourceOrigin>,
}

/// A helper for mapping byte offsets to line numbers.
struct LineNumberMapper {
    line_starts: Vec<usize>,
}

impl LineNumberMapper {
    fn new(source: &str) -> LineNumberMapper {
        let line_starts = source
            .as_bytes()
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == b'\n')
            .map(|(i, _)| i)
            .collect();
        LineNumberMapper { line_starts }
    }

    fn line_number(&self, byte_offset: usize) -> usize {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(index) => index + 1,
            Err(index) => index + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_offsets_to_lines() {
        let mapper = LineNumberMapper::new("a\nbc\n\nd");
        assert_eq!(mapper.line_number(0), 1);
        assert_eq!(mapper.line_number(2), 2);
        assert_eq!(mapper.line_number(5), 3);
        assert_eq!(mapper.line_number(6), 4);
    }
}
