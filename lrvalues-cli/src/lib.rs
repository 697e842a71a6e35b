use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use lrvalues::backends::debug::DebugBackend;
use lrvalues::backends::Backend;
use lrvalues::errors::ClassificationError;
use lrvalues::options::{ClassifierOptions, Dialect};
use lrvalues_interpreter::InterpreterBackend;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod battery;

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

pub struct Config {
    /// Path to the program, for all targets except the battery.
    pub source_path: Option<String>,

    /// Dialect selected on the command line. `None` stands for the default dialect, or for
    /// both dialects when running the battery. A pragma in the program takes precedence.
    pub dialect: Option<Dialect>,

    /// The expected classifier behavior.
    pub target: Target,

    /// Enables debug logging unless `RUST_LOG` says otherwise.
    pub verbose: bool,

    /// A flag for integration tests: this allows to better capture output. There is
    /// no way to set it through command-line.
    pub plaintext_compilation_errors: bool,
}

/// Expected result of running the classifier.
pub enum Target {
    /// Only classify the program, reporting any errors.
    Check,

    /// Expect successful classification and pass the result to a backend.
    Run(Box<dyn Backend>),

    /// Run the built-in example battery and compare outcomes to expectations.
    Battery,
}

impl Config {
    pub fn new() -> Config {
        let program = || {
            Arg::with_name("PROGRAM")
                .help("Path to the program")
                .required(true)
                .index(1)
        };

        let matches = App::new("lrvalues")
            .version(VERSION)
            .about("Value category classifier and interpreter for a C-like expression language")
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .arg(
                Arg::with_name("dialect")
                    .short("d")
                    .long("dialect")
                    .takes_value(true)
                    .possible_values(&["c", "cpp", "c++", "both"])
                    .help("Dialect to classify in, unless the program selects one itself")
                    .global(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .help("Log classification and execution steps to stderr")
                    .global(true),
            )
            .subcommand(
                SubCommand::with_name("run")
                    .about("Classifies the program and executes it in an interpreter")
                    .arg(program()),
            )
            .subcommand(
                SubCommand::with_name("check")
                    .about("Classifies the program without executing it")
                    .arg(program()),
            )
            .subcommand(
                SubCommand::with_name("battery")
                    .about("Runs the built-in examples and checks their outcomes"),
            )
            .subcommand(
                SubCommand::with_name("tools")
                    .about("Various tools for inspecting the classifier")
                    .setting(AppSettings::SubcommandRequiredElseHelp)
                    .subcommand(
                        SubCommand::with_name("ir")
                            .about("Prints the classified program")
                            .arg(program()),
                    ),
            )
            .get_matches();

        let config_from_leaf_matches = |matches: &ArgMatches, target| Config {
            source_path: matches.value_of("PROGRAM").map(String::from),
            dialect: matches
                .value_of("dialect")
                .and_then(|name| name.parse().ok()),
            verbose: matches.is_present("verbose"),
            plaintext_compilation_errors: false,
            target,
        };

        match matches.subcommand() {
            ("run", Some(matches)) => {
                config_from_leaf_matches(matches, Target::Run(Box::new(InterpreterBackend)))
            }
            ("check", Some(matches)) => config_from_leaf_matches(matches, Target::Check),
            ("battery", Some(matches)) => config_from_leaf_matches(matches, Target::Battery),
            ("tools", Some(matches)) => match matches.subcommand() {
                ("ir", Some(matches)) => {
                    config_from_leaf_matches(matches, Target::Run(Box::new(DebugBackend)))
                }
                _ => unreachable!(),
            },
            _ => unreachable!(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum RunResult {
    Ok,
    CompilerError,
    RuntimeError,
    BatteryFailure,
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level chosen by `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Executes the program.
pub fn run(config: Config) -> RunResult {
    let source_path = match (&config.target, &config.source_path) {
        (Target::Battery, _) => {
            let dialects = match config.dialect {
                Some(dialect) => vec![dialect],
                None => Dialect::all().to_vec(),
            };
            return if battery::run_battery(&dialects) {
                RunResult::Ok
            } else {
                RunResult::BatteryFailure
            };
        }
        (_, Some(source_path)) => source_path,
        (_, None) => {
            eprintln!("No program given.");
            return RunResult::CompilerError;
        }
    };

    let source_code = match fs::read_to_string(source_path) {
        Ok(source_code) => source_code,
        Err(error) => {
            eprintln!("Error while reading the source file:\n{}", error);
            return RunResult::CompilerError;
        }
    };

    let options = match config.dialect {
        Some(dialect) => ClassifierOptions::with_dialect(dialect),
        None => ClassifierOptions::default(),
    };
    debug!(path = %source_path, dialect = %options.dialect, "classifying program");

    let program = match lrvalues::compile(&source_code, options) {
        Ok(program) => program,
        Err(errors) => {
            report_compilation_errors(
                source_path,
                &source_code,
                &errors,
                config.plaintext_compilation_errors,
            );
            return RunResult::CompilerError;
        }
    };

    match config.target {
        Target::Check => {
            println!("Ok!");
            RunResult::Ok
        }
        Target::Run(backend) => match backend.run(source_path, &source_code, program) {
            Ok(()) => RunResult::Ok,
            Err(()) => RunResult::RuntimeError,
        },
        Target::Battery => unreachable!(),
    }
}

fn report_compilation_errors(
    file_name: &str,
    source_code: &str,
    errors: &[ClassificationError],
    plaintext_stdout: bool,
) {
    if !plaintext_stdout {
        let mut files = SimpleFiles::new();
        let file_id = files.add(file_name, source_code);

        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();

        for error in errors {
            let result = codespan_reporting::term::emit(
                &mut writer.lock(),
                &config,
                &files,
                &error.to_codespan(file_id),
            );
            if let Err(emit_error) = result {
                eprintln!("{:?}\n(could not render diagnostic: {})", error, emit_error);
            }
        }
    } else {
        for error in errors {
            println!("{:?}", error);
        }
    }
}
