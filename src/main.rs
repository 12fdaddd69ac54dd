use std::process;
use log::{error, Level, LevelFilter};

use geospatial::utils::logger::Logger;
use geospatial::commands::{build_cli, CommandFactory, GeospatialCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    if let Some(log_file) = matches.get_one::<String>("log-file") {
        let level = if verbose { Level::Debug } else { Level::Info };
        if let Err(e) = Logger::init_global_logger(log_file, level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        Logger::init_console_logger(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
    }

    let factory = GeospatialCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
