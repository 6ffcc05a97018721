use std::path::PathBuf;

#[cfg(feature = "logging")]
use crate::logging::LogOptions;

use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "logging")]
use flexi_logger::{LevelFilter as LogLevelFilter, LogSpecification as LogSpec};
use keys::FormatMode;

#[derive(Parser, Debug)]
#[clap(name = "keyname", author, version, about)]
pub struct Args {
    /// Format option that key names are written with (defaults to the configured format)
    #[clap(short, long = "mode", value_enum, number_of_values = 1, display_order = 0)]
    modes: Vec<FormatFlag>,

    /// Configuration file to use instead of ~/.keyname-config.yaml
    #[clap(long = "config", display_order = 1)]
    config_path: Option<PathBuf>,

    /// File to write logs to (can be a unix socket)
    #[cfg(feature = "logging")]
    #[clap(long = "log-file", display_order = 2)]
    log_file_path: Option<PathBuf>,

    /// Default log level for all modules
    #[cfg(feature = "logging")]
    #[clap(display_order = 3, long = "log-level", id = "LOG_LEVEL", default_value_t = LogLevelFilter::Info)]
    log_level_filter: LogLevelFilter,

    /// Log level for a particular module (<module-name>=<log-level>)
    #[cfg(feature = "logging")]
    #[clap(display_order = 4, long = "module-log-level", id = "MODULE_LOG_LEVEL")]
    module_log_level_filters: Vec<ModuleLogLevelFilter>,

    #[clap(subcommand)]
    command: Command,
}

impl Args {
    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Return the format mode given on the command line, if any.
    pub fn mode(&self) -> Option<FormatMode> {
        mode_from_flags(&self.modes)
    }

    /// Return options for logging if a log file was given.
    #[cfg(feature = "logging")]
    pub fn log_options(&self) -> Option<LogOptions> {
        let log_file_path = self.log_file_path.clone()?;

        let mut log_spec_builder = LogSpec::builder();

        log_spec_builder.default(self.log_level_filter);

        for module_log_level_filter in &self.module_log_level_filters {
            log_spec_builder.module(
                module_log_level_filter.module_name(),
                *module_log_level_filter.log_level_filter(),
            );
        }

        Some(
            LogOptions::builder()
                .log_spec(log_spec_builder.finalize())
                .log_file_path(log_file_path)
                .build(),
        )
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the escape sequences a terminal sends for keys
    #[clap(alias = "r", display_order = 1)]
    Raw {
        /// Key names such as C-b, Up or F5
        #[clap(required = true)]
        names: Vec<String>,
    },

    /// Rewrite key names in another format
    #[clap(alias = "n", display_order = 2)]
    Name {
        /// Format option to write the names with (defaults to the configured format)
        #[clap(short, long = "to", value_enum, number_of_values = 1)]
        to: Vec<FormatFlag>,

        /// Key names such as C-b, Up or F5
        #[clap(required = true)]
        names: Vec<String>,
    },

    /// Print the names and escape sequences of every named and function key
    #[clap(alias = "t", display_order = 3)]
    Table,
}

/// A single key name format option.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatFlag {
    /// Wrap names in < and >
    WrapBracket,
    /// Use long modifier names (Ctrl- instead of C-)
    LongMod,
    /// Use caret notation (^B) for Ctrl plus a letter
    CaretCtrl,
    /// Call the Alt modifier Meta
    AltIsMeta,
    /// Use lowercase modifier names
    LowerMod,
    /// Separate modifiers with spaces
    SpaceMod,
}

impl From<FormatFlag> for FormatMode {
    fn from(flag: FormatFlag) -> Self {
        match flag {
            FormatFlag::WrapBracket => FormatMode::WRAPBRACKET,
            FormatFlag::LongMod => FormatMode::LONGMOD,
            FormatFlag::CaretCtrl => FormatMode::CARETCTRL,
            FormatFlag::AltIsMeta => FormatMode::ALTISMETA,
            FormatFlag::LowerMod => FormatMode::LOWERMOD,
            FormatFlag::SpaceMod => FormatMode::SPACEMOD,
        }
    }
}

/// Combine format flags into a mode, or return `None` if there are no flags.
pub fn mode_from_flags(flags: &[FormatFlag]) -> Option<FormatMode> {
    if flags.is_empty() {
        return None;
    }
    Some(
        flags
            .iter()
            .fold(FormatMode::empty(), |mode, flag| mode | FormatMode::from(*flag)),
    )
}

#[cfg(feature = "logging")]
mod module_log_level_filter {
    use super::ModuleLevelFilterParseError;

    use std::str::FromStr;

    use flexi_logger::LevelFilter as LogLevelFilter;

    /// A log level filter for a particular module.
    #[derive(Debug)]
    pub struct ModuleLogLevelFilter {
        /// The name of the module.
        module_name: String,
        /// The log level filter for the module.
        log_level_filter: LogLevelFilter,
    }

    impl ModuleLogLevelFilter {
        pub fn module_name(&self) -> &str {
            &self.module_name
        }

        pub fn log_level_filter(&self) -> &LogLevelFilter {
            &self.log_level_filter
        }
    }

    impl FromStr for ModuleLogLevelFilter {
        type Err = ModuleLevelFilterParseError;

        fn from_str(string: &str) -> Result<Self, Self::Err> {
            let (module_name, log_level_filter_string) = string.split_once('=').ok_or_else(|| {
                ModuleLevelFilterParseError::NoEqualsSign {
                    bad_module_log_level: string.to_string(),
                }
            })?;

            let log_level_filter =
                LogLevelFilter::from_str(log_level_filter_string).map_err(|_| {
                    ModuleLevelFilterParseError::BadLogLevel {
                        bad_module_log_level: string.to_string(),
                        bad_log_level: log_level_filter_string.to_string(),
                    }
                })?;

            Ok(ModuleLogLevelFilter {
                module_name: module_name.to_string(),
                log_level_filter,
            })
        }
    }
}
#[cfg(feature = "logging")]
use module_log_level_filter::ModuleLogLevelFilter;

#[cfg(feature = "logging")]
mod module_log_level_filter_parse_error {
    use std::error::Error;
    use std::fmt::{Display, Error as FmtError, Formatter};

    /// An error for parsing a module level filter from a string.
    #[derive(Debug)]
    pub enum ModuleLevelFilterParseError {
        NoEqualsSign {
            bad_module_log_level: String,
        },
        BadLogLevel {
            bad_module_log_level: String,
            bad_log_level: String,
        },
    }

    impl Display for ModuleLevelFilterParseError {
        fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
            match self {
                Self::NoEqualsSign {
                    bad_module_log_level,
                } => {
                    write!(formatter, "Failed to parse the module log level \"{}\" because it contains no equals sign. Module log levels should be of the form \"<module-name>=<log-level>\".", bad_module_log_level)
                }
                Self::BadLogLevel {
                    bad_module_log_level,
                    bad_log_level,
                } => {
                    write!(formatter, "Failed to parse the module log level \"{}\" because \"{}\" is not a valid log level.", bad_module_log_level, bad_log_level)
                }
            }
        }
    }

    impl Error for ModuleLevelFilterParseError {}
}
#[cfg(feature = "logging")]
use module_log_level_filter_parse_error::ModuleLevelFilterParseError;
