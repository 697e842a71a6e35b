//! Runner for sample programs under samples/<dialect>/.

use std::fs;
use test_generator::test_resources;

use lrvalues::options::{ClassifierOptions, Dialect};
use lrvalues_cli::{Config, RunResult, Target};
use lrvalues_interpreter::InterpreterBackend;

#[test_resources("lrvalues-cli/tests/samples/**/good/*.lr")]
fn good_interpret(path: &str) {
    let result = lrvalues_cli::run(config_for(path, false));
    assert_eq!(result, RunResult::Ok)
}

#[test_resources("lrvalues-cli/tests/samples/**/compile_error/*.lr")]
fn compile_error(path: &str) {
    let result = lrvalues_cli::run(config_for(path, true));
    assert_eq!(result, RunResult::CompilerError);

    let source = fs::read_to_string(strip_crate_name(path)).unwrap();
    let expected = expected_code(&source)
        .unwrap_or_else(|| panic!("{} has no `// expect:` line", path));
    let errors = lrvalues::compile(&source, ClassifierOptions::with_dialect(dialect_of(path)))
        .err()
        .unwrap();
    let codes: Vec<_> = errors.iter().map(|error| error.code).collect();
    assert!(codes.iter().any(|code| *code == expected), "expected {}, got {:?}", expected, codes);
}

#[test_resources("lrvalues-cli/tests/samples/**/runtime_error/*.lr")]
fn runtime_error_interpret(path: &str) {
    let result = lrvalues_cli::run(config_for(path, false));
    assert_eq!(result, RunResult::RuntimeError)
}

fn config_for(path: &str, plaintext_compilation_errors: bool) -> Config {
    Config {
        source_path: Some(strip_crate_name(path)),
        dialect: Some(dialect_of(path)),
        target: Target::Run(Box::new(InterpreterBackend)),
        verbose: false,
        plaintext_compilation_errors,
    }
}

// Compile error samples name the error code they must produce on their first line.
fn expected_code(source: &str) -> Option<&str> {
    let first_line = source.lines().next()?;
    first_line.trim().strip_prefix("// expect:").map(str::trim)
}

// Samples are grouped by the dialect they are classified in.
fn dialect_of(path: &str) -> Dialect {
    if path.contains("/samples/cpp/") {
        Dialect::Cpp
    } else {
        Dialect::C
    }
}

// Because of how [test_resources] works with workspaces, the compilation working directory
// is different from the runtime working directory (first is workspace, second is crate).
// This is why we need to strip the first part from the test path.
fn strip_crate_name(path: &str) -> String {
    let parts: Vec<String> = path.split('/').skip(1).map(String::from).collect();
    parts.join("/")
}
