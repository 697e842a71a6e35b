use std::process;

use lrvalues_cli::{init_logging, run, Config, RunResult};

fn main() {
    let config = Config::new();
    init_logging(config.verbose);

    if run(config) != RunResult::Ok {
        process::exit(1);
    }
}
