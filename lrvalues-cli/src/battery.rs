//! Built-in examples showing where the two dialects agree and where they part ways.
//!
//! Every case is a small program. A case passes when classifying and running it in a dialect
//! ends the way the case expects for that dialect.

use lrvalues::errors::ErrorKind;
use lrvalues::options::{ClassifierOptions, Dialect};
use std::fmt::{self, Display, Formatter};
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The program classified and ran without errors.
    Success,

    /// Classification failed, and the first reported error has this kind.
    CompileError(ErrorKind),

    /// The program classified but failed at runtime.
    RuntimeError,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::CompileError(kind) => write!(f, "{:?}", kind),
            Outcome::RuntimeError => write!(f, "runtime error"),
        }
    }
}

pub struct Case {
    pub name: &'static str,
    pub source: &'static str,
    pub in_c: Outcome,
    pub in_cpp: Outcome,
}

impl Case {
    pub fn expected(&self, dialect: Dialect) -> Outcome {
        match dialect {
            Dialect::C => self.in_c,
            Dialect::Cpp => self.in_cpp,
        }
    }
}

pub fn cases() -> Vec<Case> {
    use ErrorKind::*;
    use Outcome::*;

    let both = |name, source, outcome| Case {
        name,
        source,
        in_c: outcome,
        in_cpp: outcome,
    };

    vec![
        both(
            "local variable",
            "var x: int = 1; var y: int = 2; x = x + y; assert x == 3;",
            Success,
        ),
        both(
            "function-assigned variable",
            "fun do_assign(p: *int, v: int) -> int = *p = v;
             var x: int = 1;
             do_assign(&x, x + 2);
             assert x == 3;",
            Success,
        ),
        both(
            "local array",
            "var arr: [int; 2] = [1, 1];
             arr[0] = arr[0] + 2;
             assert arr[0] == 3 && arr[1] == 1;",
            Success,
        ),
        both(
            "function-assigned array",
            "fun do_assign(p: *int, v: int) -> int = *p = v;
             var arr: [int; 2] = [1, 1];
             do_assign(&arr[0], arr[0] + 2);
             assert arr[0] == 3 && arr[1] == 1;",
            Success,
        ),
        both(
            "local struct",
            concat!(
                "struct S { i: int, b: bool }",
                "var s: S = S { i: 1, b: true };",
                "s.i = s.i + 2;",
                "assert s.i == 3 && s.b;",
            ),
            Success,
        ),
        both(
            "function-assigned struct",
            concat!(
                "struct S { i: int, b: bool }",
                "fun do_assign(p: *int, v: int) -> int = *p = v;",
                "var s: S = S { i: 1, b: true };",
                "do_assign(&s.i, s.i + 2);",
                "assert s.i == 3 && s.b;",
            ),
            Success,
        ),
        both(
            "assignment to a const",
            "const c: int = 1; c = 2;",
            CompileError(ConstTarget),
        ),
        both(
            "assignment to an rvalue",
            "var x: int; (x + 1) = 2;",
            CompileError(NotAnLValue),
        ),
        both(
            "address of an rvalue",
            "var x: int; var p: *int = &(x + 1);",
            CompileError(InvalidOperand),
        ),
        both(
            "assignment to a function",
            "fun f(v: int) -> int = v; fun g(v: int) -> int = v; f = g;",
            CompileError(FunctionType),
        ),
        both(
            "reference-returning call",
            concat!(
                "struct S { i: int, b: bool }",
                "var s: S;",
                "fun pick(p: *S) -> &int = p.i;",
                "pick(&s) = 5;",
                "assert s.i == 5;",
            ),
            Success,
        ),
        Case {
            name: "assignment to assignment",
            source: "var x: int; (x = 2) = 1; assert x == 1;",
            in_c: CompileError(NotAnLValue),
            in_cpp: Success,
        },
        Case {
            name: "compound-literal anomaly",
            source: concat!(
                "struct S { i: int, b: bool }",
                "var x: int = 1;",
                "S { i: x, b: true }.i = 7;",
                "assert x == 1;",
            ),
            in_c: Success,
            in_cpp: CompileError(NotAnLValue),
        },
        Case {
            name: "assignment to a returned struct",
            source: concat!(
                "struct S { i: int }",
                "var s: S = S { i: 1 };",
                "fun f() -> S = s;",
                "f() = S { i: 2 };",
                "assert s.i == 1;",
            ),
            in_c: CompileError(NotAnLValue),
            in_cpp: Success,
        },
        both(
            "assignment to a returned field",
            "struct S { i: int } fun f() -> S = S { i: 3 }; f().i = 3;",
            CompileError(NotAnLValue),
        ),
    ]
}

/// Classifies and runs the case in the given dialect, without reporting errors.
pub fn run_case(case: &Case, dialect: Dialect) -> Outcome {
    let options = ClassifierOptions::with_dialect(dialect);
    let program = match lrvalues::compile(case.source, options) {
        Ok(program) => program,
        Err(errors) => {
            debug!(case = case.name, %dialect, ?errors, "classification failed");
            return match errors.first() {
                Some(error) => Outcome::CompileError(error.kind),
                None => panic!("Compilation failed without errors."),
            };
        }
    };

    match lrvalues_interpreter::run(&program) {
        Ok(_) => Outcome::Success,
        Err(error) => {
            debug!(case = case.name, %dialect, %error, "execution failed");
            Outcome::RuntimeError
        }
    }
}

/// Runs every case in every given dialect and prints a line per run. Returns `true` if all
/// outcomes matched expectations.
pub fn run_battery(dialects: &[Dialect]) -> bool {
    let mut all_passed = true;
    for case in cases() {
        for dialect in dialects {
            let expected = case.expected(*dialect);
            let actual = run_case(&case, *dialect);
            let dialect = dialect.to_string();
            if actual == expected {
                println!("{:<32} {:<4} ok ({})", case.name, dialect, actual);
            } else {
                all_passed = false;
                println!(
                    "{:<32} {:<4} FAILED: expected {}, got {}",
                    case.name, dialect, expected, actual
                );
            }
        }
    }
    all_passed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_cases_match_expectations() {
        for case in cases() {
            for dialect in &Dialect::all() {
                assert_eq!(
                    run_case(&case, *dialect),
                    case.expected(*dialect),
                    "case `{}` in {}",
                    case.name,
                    dialect
                );
            }
        }
    }

    #[test]
    fn dialects_disagree_on_some_cases() {
        let disagreements: Vec<_> = cases()
            .into_iter()
            .filter(|case| case.in_c != case.in_cpp)
            .map(|case| case.name)
            .collect();
        assert_eq!(
            disagreements,
            vec![
                "assignment to assignment",
                "compound-literal anomaly",
                "assignment to a returned struct",
            ]
        );
    }
}
