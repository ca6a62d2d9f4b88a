//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Raised at construction when no usable check is provided.
    InvalidConfiguration(String),
    /// Raised per item when it is missing or has no stats.
    InvalidItem(String),
    Io(std::io::Error),
}

impl Error {
    pub(crate) fn invalid_configuration(name: &str, detail: &str) -> Self {
        Self::InvalidConfiguration(format!("{name}: {detail}"))
    }

    pub(crate) fn invalid_item(name: &str, detail: &str) -> Self {
        Self::InvalidItem(format!("{name}: {detail}"))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Error::InvalidItem(msg) => write!(f, "invalid item: {msg}"),
            Error::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}
