//! Runtime settings resolved from command-line flags.
//!
//! The only build-time input is `COMPATSCOPE_BASE_PATH`, which replaces the
//! default base location when set during compilation.

use std::path::PathBuf;

use tracing::Level;

use crate::loader::Location;

/// Base location used when `--base` is not given.
pub const DEFAULT_BASE_PATH: &str = match option_env!("COMPATSCOPE_BASE_PATH") {
    Some(base) => base,
    None => ".",
};

/// File name looked up under the base location.
pub const DATA_FILE: &str = "sample-data.json";

/// Location tried when the primary one cannot be fetched.
pub const FALLBACK_LOCATION: &str = "./sample-data.json";

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory or URL holding the dataset document.
    pub base: String,
    /// Local document that replaces the fetched one.
    pub file: Option<PathBuf>,
    /// Where dashboard logs go; logging is off in the dashboard without it.
    pub log_file: Option<PathBuf>,
    /// Debug-level logging.
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_PATH.to_string(),
            file: None,
            log_file: None,
            verbose: false,
        }
    }
}

impl Settings {
    /// `<base>/sample-data.json`.
    pub fn primary_location(&self) -> Location {
        Location::parse(&self.base).join(DATA_FILE)
    }

    /// `./sample-data.json`.
    pub fn fallback_location(&self) -> Location {
        Location::parse(FALLBACK_LOCATION)
    }

    /// Maximum log level.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        let settings = Settings {
            base: ".".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.primary_location(),
            Location::Local(PathBuf::from(".").join("sample-data.json"))
        );
        assert_eq!(
            settings.fallback_location(),
            Location::Local(PathBuf::from("./sample-data.json"))
        );
    }

    #[test]
    fn test_remote_base() {
        let settings = Settings {
            base: "https://example.com/dashboard/".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.primary_location().to_string(),
            "https://example.com/dashboard/sample-data.json"
        );
    }

    #[test]
    fn test_log_level() {
        let mut settings = Settings::default();
        assert_eq!(settings.log_level(), Level::WARN);
        settings.verbose = true;
        assert_eq!(settings.log_level(), Level::DEBUG);
    }
}
