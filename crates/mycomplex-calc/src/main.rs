//! mycomplex-calc binary

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use mycomplex_calc::{run, CalcConfig, CalcResult, USAGE};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_logging(config: &CalcConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn execute(config: &CalcConfig) -> CalcResult<()> {
    let stdout = io::stdout().lock();
    match &config.input {
        Some(path) => run(config, BufReader::new(File::open(path)?), stdout)?,
        None => run(config, io::stdin().lock(), stdout)?,
    };
    Ok(())
}

fn main() -> ExitCode {
    let config = match CalcConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    if config.show_help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    init_logging(&config);

    match execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "calc failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
