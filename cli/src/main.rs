use cli::{grade_json, grading_options, read_input};
use common::config::Config;
use common::logger::init_logger;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Load configuration and initialize logging
    let config = Config::init(".env");
    let logging = match init_logger(&config.log_level, &config.log_file) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("failed to initialize logger: {e}");
            false
        }
    };

    let path = std::env::args_os().nth(1).map(PathBuf::from);

    let outcome = read_input(path.as_deref())
        .and_then(|raw| grade_json(&raw, grading_options(config)))
        .and_then(|response| Ok(serde_json::to_string_pretty(&response)?));

    match outcome {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if logging {
                log::error!("{}: {e:#}", config.project_name);
            } else {
                eprintln!("{}: {e:#}", config.project_name);
            }
            ExitCode::FAILURE
        }
    }
}
