use crate::environment::NamedEntityKind;
use crate::errors::{ClassificationError, ErrorKind};
use crate::source::{InputSpan, SourceOrigin};

pub fn named_entity_kind_mismatch(
    name: &str,
    expected: NamedEntityKind,
    actual: NamedEntityKind,
    location: SourceOrigin,
    definition_site: Option<InputSpan>,
) -> ClassificationError {
    ClassificationError::new(
        ErrorKind::KindMismatch,
        "E0023",
        format!(
            "`{}` is a {}, but a {} was expected",
            name,
            actual.text(),
            expected.text()
        ),
    )
    .with_location(location)
    .with_subtitle(format!("expected a {}", expected.text()))
    .maybe_with_bound_note(definition_site, || format!("`{}` is defined here", name))
}
