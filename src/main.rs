use log::{error, Level, LevelFilter};
use std::process;

use regionkit::utils::logger::Logger;
use regionkit::commands::{build_cli, CommandFactory, RegionkitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");

    let logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            let level = if verbose { Level::Debug } else { Level::Info };
            if let Err(e) = Logger::init_global_logger(format!("{}.global", log_file), level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }

            match Logger::new(log_file) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            Logger::init_console_logger(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
            Logger::detached()
        }
    };

    let factory = RegionkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
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
