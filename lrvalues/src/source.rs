/// A contiguous range of bytes in the source file.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct InputSpan {
    pub start: usize,
    pub end: usize,
}

impl InputSpan {
    pub fn new(start: usize, end: usize) -> InputSpan {
        InputSpan { start, end }
    }

    /// Returns a span for the first character of the file.
    /// Can be useful as a placeholder, when the caller is sure that the span is not going
    /// to be displayed to the end user, e.g. for syntax trees constructed in code.
    pub fn top_of_file() -> InputSpan {
        InputSpan { start: 0, end: 1 }
    }

    /// Returns the smallest span covering both `self` and `other`.
    pub fn join(self, other: InputSpan) -> InputSpan {
        InputSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Represents the original location in source code of some classified expression.
/// If an expression was synthesised (e.g. through auto-deref), this information is also contained
/// in its `SourceOrigin`.
#[derive(Copy, Clone, Debug)]
pub enum SourceOrigin {
    /// Object is directly backed by source code.
    Plain(InputSpan),

    /// Object is a `DerefExpr` produced through automatic dereferencing of a field access
    /// receiver.
    AutoDeref(InputSpan),

    /// Object is a `LoadExpr` reading an lvalue in a context where an rvalue is required.
    Loaded(InputSpan),
}

impl SourceOrigin {
    pub fn as_plain(&self) -> InputSpan {
        match self {
            SourceOrigin::Plain(span) => *span,
            SourceOrigin::AutoDeref(span) => *span,
            SourceOrigin::Loaded(span) => *span,
        }
    }
}
