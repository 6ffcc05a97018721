/*!
Configuration options loaded from the YAML file `~/.keyname-config.yaml` if it exists.
*/

/// Configuration options.
mod config {
    use super::FormatConfig;

    use std::fmt::{Display, Formatter, Result as FormatResult};
    use std::fs::File;
    use std::io::{Error as IOError, ErrorKind as IOErrorKind};
    use std::path::{Path, PathBuf};

    use serde::Deserialize;
    use serde_yaml::Error as YamlParseError;

    /// Configuration options.
    #[derive(Deserialize, Debug, Default, Clone, Eq, PartialEq)]
    #[serde(deny_unknown_fields)]
    pub struct Config {
        /// How key names are written.
        #[serde(default)]
        format: FormatConfig,
    }

    impl Config {
        /// Return the default path of the file that configuration is loaded from.
        pub fn default_path() -> ConfigDefaultPathResult {
            let mut path: PathBuf = match dirs::home_dir() {
                Some(path) => path,
                None => {
                    return Err(ConfigDefaultPathError::CannotDetermineHomeDirectory);
                }
            };
            path.push(".keyname-config.yaml");
            Ok(path)
        }

        /// Return the `Config` loaded from the default file if it exists or the default config if
        /// the file does not exist. If there is an error then return a `ConfigLoadError`.
        pub fn load() -> ConfigLoadResult {
            let path: PathBuf = match Self::default_path() {
                Ok(path) => path,
                Err(error) => {
                    return Err(ConfigLoadError::ConfigDefaultPathError(error));
                }
            };

            Self::load_from(&path)
        }

        /// Return the `Config` loaded from `path`, or the default config if there is no file at
        /// `path`.
        pub fn load_from(path: &Path) -> ConfigLoadResult {
            let path = path.to_path_buf();
            let file: File = match File::open(&path) {
                Ok(file) => file,
                Err(error) => match error.kind() {
                    IOErrorKind::NotFound => {
                        #[cfg(feature = "logging")]
                        log::info!("No configuration file at {}.", path.display());
                        return Ok(Config::default());
                    }
                    IOErrorKind::PermissionDenied => {
                        return Err(ConfigLoadError::PermissionDeniedError(path));
                    }
                    _ => {
                        return Err(ConfigLoadError::OtherFileReadError { path, error });
                    }
                },
            };

            match serde_yaml::from_reader(file) {
                Ok(config) => {
                    #[cfg(feature = "logging")]
                    log::info!("Loaded configuration {:?} from {}.", config, path.display());
                    Ok(config)
                }
                Err(error) => Err(ConfigLoadError::ParseError { path, error }),
            }
        }

        /// Return the format configuration.
        pub fn format(&self) -> &FormatConfig {
            &self.format
        }
    }

    /// The result of trying to determine a default path.
    type ConfigDefaultPathResult = Result<PathBuf, ConfigDefaultPathError>;

    /// A problem with determining a default path.
    #[derive(Debug)]
    pub enum ConfigDefaultPathError {
        /// The home directory could not be determined.
        CannotDetermineHomeDirectory,
    }

    /// The result of trying to load the configuration file.
    type ConfigLoadResult = Result<Config, ConfigLoadError>;

    /// An error loading the configuration file.
    #[derive(Debug)]
    #[allow(clippy::enum_variant_names)]
    pub enum ConfigLoadError {
        /// An error when the there is a problem determining the default path of the
        /// configuration file, for example if the home directory cannot be determined.
        ConfigDefaultPathError(ConfigDefaultPathError),
        /// An error when permission is denied while trying to read the configuration file.
        PermissionDeniedError(PathBuf),
        /// An generic error with reading the configuration file.
        OtherFileReadError {
            /// The path of the configuration file the there was a problem reading.
            path: PathBuf,
            /// The IO error that was encountered while attempting to read the configuration file.
            error: IOError,
        },
        /// An error parsing the configuration file.
        ParseError {
            /// The path of the configuration file the there was a problem parsing.
            path: PathBuf,
            /// An error parsing the configuration file as YAML.
            error: YamlParseError,
        },
    }

    impl Display for ConfigLoadError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
            match self {
                Self::ConfigDefaultPathError(error) => match error {
                    ConfigDefaultPathError::CannotDetermineHomeDirectory => {
                        write!(f, "Failed to load the configuration because the home directory could not be determined.")
                    }
                },
                Self::PermissionDeniedError(path) => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because permission was denied.",
                        path.display()
                    )
                }
                Self::OtherFileReadError { path, error } => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because of an IO error: {}",
                        path.display(),
                        error
                    )
                }
                Self::ParseError { path, error } => {
                    write!(
                        f,
                        "Failed to parse the configuration file \"{}\": {}",
                        path.display(),
                        error
                    )
                }
            }
        }
    }
}
pub use config::Config;

/// Contains the key name format configuration.
mod format {
    use keys::FormatMode;
    use serde::Deserialize;

    /// How key names are written. Each option turns on one [`FormatMode`] flag.
    #[derive(Deserialize, Debug, Default, Clone, Eq, PartialEq)]
    #[serde(deny_unknown_fields)]
    pub struct FormatConfig {
        /// Wrap names in `<` and `>`.
        #[serde(default)]
        wrap_bracket: bool,

        /// Use long modifier names (`Ctrl-` instead of `C-`).
        #[serde(default)]
        long_mod: bool,

        /// Use caret notation (`^B`) for Ctrl plus a letter.
        #[serde(default)]
        caret_ctrl: bool,

        /// Call the Alt modifier Meta.
        #[serde(default)]
        alt_is_meta: bool,

        /// Use lowercase modifier names.
        #[serde(default)]
        lower_mod: bool,

        /// Separate modifiers with spaces.
        #[serde(default)]
        space_mod: bool,
    }

    impl FormatConfig {
        /// Return the format mode for this configuration.
        pub fn mode(&self) -> FormatMode {
            let mut mode = FormatMode::empty();
            mode.set(FormatMode::WRAPBRACKET, self.wrap_bracket);
            mode.set(FormatMode::LONGMOD, self.long_mod);
            mode.set(FormatMode::CARETCTRL, self.caret_ctrl);
            mode.set(FormatMode::ALTISMETA, self.alt_is_meta);
            mode.set(FormatMode::LOWERMOD, self.lower_mod);
            mode.set(FormatMode::SPACEMOD, self.space_mod);
            mode
        }
    }
}
pub use format::FormatConfig;
