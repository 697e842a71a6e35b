//! Integration tests for the command-line interface of the classifier binary.

use speculate::speculate;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

speculate! {
    describe "assignment to assignment" {
        const SOURCE: &'static str = r#"
            var x: int;
            (x = 2) = 1;
            assert x == 1;
        "#;

        before {
            let source_file = write_source(SOURCE);
        }

        it "is rejected in c" {
            let output = lrvalues(&["--dialect", "c", "check"], source_file.path());
            assert!(!output.status.success());
        }

        it "runs in cpp" {
            let output = lrvalues(&["--dialect", "cpp", "run"], source_file.path());
            assert!(output.status.success());
        }

        it "is accepted in cpp by check" {
            let output = lrvalues(&["check", "--dialect", "cpp"], source_file.path());
            assert!(output.status.success());
            assert_eq!(output.stdout, b"Ok!\n");
        }
    }

    describe "dialect pragma" {
        const SOURCE: &'static str = r#"
            dialect cpp;
            var x: int;
            (x = 2) = 1;
            assert x == 1;
        "#;

        before {
            let source_file = write_source(SOURCE);
        }

        it "overrides the command line" {
            let output = lrvalues(&["--dialect", "c", "run"], source_file.path());
            assert!(output.status.success());
        }
    }

    describe "runtime errors" {
        const SOURCE: &'static str = r#"
            fun get(p: *int) -> int = *p;
            var p: *int;
            get(p);
        "#;

        before {
            let source_file = write_source(SOURCE);
        }

        it "fail the run with a backtrace" {
            let output = lrvalues(&["run"], source_file.path());
            assert!(!output.status.success());

            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.contains("null pointer dereference"));
            assert!(stderr.contains("get(null)"));
        }

        it "are not detected by check" {
            let output = lrvalues(&["check"], source_file.path());
            assert!(output.status.success());
        }
    }

    describe "ir dump" {
        const SOURCE: &'static str = r#"
            var x: int;
            x = 1;
        "#;

        before {
            let source_file = write_source(SOURCE);
        }

        it "shows value categories" {
            let output = lrvalues(&["tools", "ir"], source_file.path());
            assert!(output.status.success());

            let stdout = String::from_utf8_lossy(&output.stdout);
            assert!(stdout.contains("dialect c"));
            assert!(stdout.contains("lvalue"));
        }
    }

    describe "battery" {
        it "passes in both dialects" {
            let output = run_binary(&["battery"]);
            assert!(output.status.success());

            let stdout = String::from_utf8_lossy(&output.stdout);
            assert_eq!(stdout.lines().count(), 30);
            assert!(!stdout.contains("FAILED"));
        }

        it "can be limited to one dialect" {
            let output = run_binary(&["battery", "--dialect", "cpp"]);
            assert!(output.status.success());

            let stdout = String::from_utf8_lossy(&output.stdout);
            assert_eq!(stdout.lines().count(), 15);
        }
    }

    it "fails on missing files" {
        let output = lrvalues(&["check"], Path::new("does/not/exist.lr"));
        assert!(!output.status.success());
    }
}

fn write_source(source: &str) -> NamedTempFile {
    let mut source_file = NamedTempFile::new().unwrap();
    source_file.write_all(source.as_bytes()).unwrap();
    source_file
}

fn lrvalues(args: &[&str], program: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lrvalues-cli"))
        .args(args)
        .arg(program)
        .output()
        .unwrap()
}

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lrvalues-cli"))
        .args(args)
        .output()
        .unwrap()
}
