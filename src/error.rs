// SPDX-License-Identifier: MPL-2.0
//! Error types for the fallible edges of the crate.
//!
//! Notification operations never fail (unknown keys are no-ops, bad options are
//! clamped). Only configuration persistence and translation loading surface errors.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    I18n(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::I18n(e) => write!(f, "I18n Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("settings.toml")));
    }

    #[test]
    fn display_prefixes_category() {
        assert_eq!(
            Error::Config("bad table".to_string()).to_string(),
            "Config Error: bad table"
        );
        assert_eq!(
            Error::I18n("no bundle".to_string()).to_string(),
            "I18n Error: no bundle"
        );
    }

    #[test]
    fn toml_parse_errors_become_config_errors() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("a = = b");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
