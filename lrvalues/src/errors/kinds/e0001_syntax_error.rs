use crate::ast::ParseError;
use crate::errors::{ClassificationError, ErrorKind};
use crate::source::{InputSpan, SourceOrigin};

pub fn syntax_error(err: ParseError) -> ClassificationError {
    let (message, location, expected) = match err {
        ParseError::User { error } => (error.to_string(), None, Vec::new()),
        ParseError::InvalidToken { location } => (
            "invalid token".to_string(),
            Some(InputSpan::new(location, location + 1)),
            Vec::new(),
        ),
        ParseError::UnrecognizedEOF { location, expected } => (
            "unexpected end of file".to_string(),
            Some(InputSpan::new(location, location + 1)),
            expected,
        ),
        ParseError::UnrecognizedToken {
            token: (start, token, end),
            expected,
        } => (
            format!("unexpected token `{}`", token.1),
            Some(InputSpan::new(start, end)),
            expected,
        ),
        ParseError::ExtraToken {
            token: (start, token, end),
        } => (
            format!("extra token `{}`", token.1),
            Some(InputSpan::new(start, end)),
            Vec::new(),
        ),
    };

    let error = ClassificationError::new(ErrorKind::Syntax, "E0001", message);
    let error = match location {
        Some(location) => error.with_location(SourceOrigin::Plain(location)),
        None => error,
    };

    if expected.is_empty() {
        error
    } else {
        error.with_free_note(format!("expected one of: {}", expected.join(", ")))
    }
}
