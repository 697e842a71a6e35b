use crate::errors::{ClassificationError, ErrorKind};
use crate::program::FunctionDecl;
use crate::source::SourceOrigin;

pub fn call_wrong_number_of_arguments(
    function: &FunctionDecl,
    actual: usize,
    location: SourceOrigin,
) -> ClassificationError {
    let expected = function.type_.parameters.len();
    ClassificationError::new(
        ErrorKind::WrongArgumentCount,
        "E0013",
        format!(
            "function `{}` takes {} argument(s), but {} were supplied",
            function.name, expected, actual
        ),
    )
    .with_location(location)
    .with_subtitle(format!("expected {} argument(s)", expected))
    .maybe_with_bound_note(function.definition_site, || "function is declared here")
}
