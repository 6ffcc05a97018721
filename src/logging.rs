//! Logging for debug purposes.
use std::fmt::{Display, Error as FormatError, Formatter};
use std::io::{Error as IOError, Write};
use std::path::PathBuf;

use flexi_logger::{
    DeferredNow, FileSpec, FlexiLoggerError, LogSpecification as LogSpec, Logger, LoggerHandle,
    Record,
};
use typed_builder::TypedBuilder;

/// Configure logging to a file.
pub fn configure_logging(options: &LogOptions) -> ConfigureLoggingResult {
    let LogOptions {
        log_spec,
        log_file_path,
    } = options;

    let file_spec = FileSpec::try_from(log_file_path).map_err(|error| {
        ConfigureLoggingError::BadLogFilePath {
            path: log_file_path.clone(),
            error,
        }
    })?;

    Logger::with(log_spec.clone())
        .format(log_format)
        .log_to_file(file_spec)
        .append()
        .start()
        .map_err(ConfigureLoggingError::StartError)
}

/// Options for logging.
#[derive(TypedBuilder)]
pub struct LogOptions {
    /// A specification for logging.
    log_spec: LogSpec,
    /// The path of the log file.
    log_file_path: PathBuf,
}

/// Format log records.
pub fn log_format(
    writer: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), IOError> {
    write!(
        writer,
        "{} {} [{}] {}",
        now.now().format("%d-%m-%Y %H:%M.%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        &record.args()
    )
}

pub type ConfigureLoggingResult = Result<LoggerHandle, ConfigureLoggingError>;

/// An error configuring logging.
#[derive(Debug)]
pub enum ConfigureLoggingError {
    /// The log file path can't be used as a log file.
    BadLogFilePath {
        path: PathBuf,
        error: FlexiLoggerError,
    },
    /// The logger failed to start.
    StartError(FlexiLoggerError),
}

impl Display for ConfigureLoggingError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FormatError> {
        match self {
            Self::BadLogFilePath { path, error } => {
                write!(
                    formatter,
                    "Failed to configure logging to \"{}\": {}",
                    path.display(),
                    error
                )
            }
            Self::StartError(error) => {
                write!(formatter, "Failed to start logging: {}", error)
            }
        }
    }
}
