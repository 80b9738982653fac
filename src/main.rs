// src/main.rs

use stepdag::errors::StepdagError;
use stepdag::{cli, logging, run};

/// Exit code when the tick guard stopped the simulation early.
const EXIT_NOT_CONVERGED: i32 = 3;

fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("stepdag error: {err:?}");
        std::process::exit(1);
    }

    match run(&args) {
        Ok(summary) if !summary.converged() => std::process::exit(EXIT_NOT_CONVERGED),
        Ok(_) => {}
        Err(StepdagError::MissingInput) => {
            eprintln!("{}", cli::usage());
            eprintln!("stepdag error: {}", StepdagError::MissingInput);
            std::process::exit(StepdagError::MissingInput.exit_code());
        }
        Err(err) => {
            eprintln!("stepdag error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
