// SPDX-License-Identifier: MPL-2.0
use crate::application::port::StoreError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The configured resource root does not exist. Fatal at startup.
    ResourceRootMissing(PathBuf),
    /// A Fluent resource could not be parsed or added to its bundle.
    Catalog(String),
    Store(StoreError),
    Handler(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::ResourceRootMissing(path) => {
                write!(f, "Locales directory not found: {}", path.display())
            }
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Store(e) => write!(f, "Store Error: {}", e),
            Error::Handler(e) => write!(f, "Handler Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::Store(err)
    }
}

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
