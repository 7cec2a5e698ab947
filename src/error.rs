//! Error types for finder-tui.

use std::fmt;
use std::io;

/// Result type alias for finder-tui operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for finder-tui operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// Malformed color specification (hex literal, palette index, attribute,
    /// slot name or base theme name).
    InvalidColorSpec(String),
    /// Unknown border shape name.
    InvalidBorderShape(String),
    /// Terminal capability negotiation failed during renderer init.
    Capability(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColorSpec(s) => write!(f, "invalid color specification: {s}"),
            Self::InvalidBorderShape(s) => write!(f, "invalid border shape: {s}"),
            Self::Capability(s) => write!(f, "terminal capability error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
