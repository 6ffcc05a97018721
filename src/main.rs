/*!
Print the escape sequences and names of terminal keys.
*/
#![deny(missing_docs)]
#![allow(clippy::module_inception)]
#![allow(clippy::needless_return)]

mod args;
mod commands;
mod config;
#[cfg(feature = "logging")]
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
#[cfg(feature = "logging")]
use flexi_logger::LoggerHandle;
use keys::FormatMode;

use crate::args::{mode_from_flags, Args, Command};
use crate::commands::CommandResult;
use crate::config::Config;
#[cfg(feature = "logging")]
use crate::logging::configure_logging;

fn main() -> ExitCode {
    let args: Args = Args::parse();

    #[cfg(feature = "logging")]
    let _logger_handle: LoggerHandle;
    #[cfg(feature = "logging")]
    if let Some(log_options) = args.log_options() {
        _logger_handle = match configure_logging(&log_options) {
            Ok(logger_handle) => logger_handle,
            Err(error) => {
                println!("{}", error);
                return ExitCode::FAILURE;
            }
        }
    }

    let config_result = match args.config_path() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config: Config = match config_result {
        Ok(config) => config,
        Err(error) => {
            println!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let configured_mode: FormatMode = config.format().mode();
    let mode: FormatMode = args.mode().unwrap_or(configured_mode);

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let result: CommandResult = match args.command() {
        Command::Raw { names } => commands::raw(names, mode, &mut writer),
        Command::Name { to, names } => {
            let to: FormatMode = mode_from_flags(to).unwrap_or(configured_mode);
            commands::name(names, mode, to, &mut writer)
        }
        Command::Table => commands::table(mode, &mut writer),
    };

    if let Err(error) = result {
        #[cfg(feature = "logging")]
        log::error!("{}", error);
        let _ = writer.flush();
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
