//! Octi Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

use thiserror::Error;

/// Octi Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the Octi engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The time budget ran out before the shallowest search completed.
    NoDecision,
    /// A decision was requested for a position that is already decided or has no actions.
    TerminalPosition,
    /// Engine configuration cannot be used for searching.
    ConfigInvalid,

    /// Point parse string malformed.
    ParsePointMalformed,
    /// Color parse string malformed.
    ParseColorMalformed,
    /// Action parse string malformed.
    ParseActionMalformed,

    /// An action was applied that is not legal in the given position.
    GameIllegalAction,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoDecision => "no decision",
            ErrorKind::TerminalPosition => "terminal position",
            ErrorKind::ConfigInvalid => "config invalid",

            ErrorKind::ParsePointMalformed => "parse point malformed",
            ErrorKind::ParseColorMalformed => "parse color malformed",
            ErrorKind::ParseActionMalformed => "parse action malformed",

            ErrorKind::GameIllegalAction => "game illegal action",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Octi Engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Simple(ErrorKind),
    #[error("{0}: {1}")]
    Message(ErrorKind, String),
    #[error("{0}, error: {1}")]
    Custom(ErrorKind, #[source] Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind)
            | Error::Message(error_kind, _)
            | Error::Custom(error_kind, _) => *error_kind,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
