use std::process::ExitCode;

use padbridged::{app, logging, print_error, Config};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::setup(config.verbose, config.no_color) {
        eprintln!("Unable to set up logger: {e}");
        return ExitCode::FAILURE;
    }

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}
