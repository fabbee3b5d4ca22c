use crate::kind::Kind;
use serde::de;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a value out of a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The window `offset..offset + width` does not fit in the buffer.
    ///
    /// `offset` is `None` when the requested offset was negative or could
    /// not be represented as a `usize`.
    #[error("insufficient data: need {width} bytes at offset {}, buffer has {len}", DisplayOffset(.offset))]
    InsufficientData {
        offset: Option<usize>,
        width: usize,
        len: usize,
    },

    /// The requested type is not a fixed-width integer or float.
    #[error("unsupported kind: {0}")]
    UnsupportedKind(Kind),

    /// A custom error message from serde
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Error::InsufficientData { .. })
    }

    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, Error::UnsupportedKind(_))
    }
}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

struct DisplayOffset<'a>(&'a Option<usize>);

impl fmt::Display for DisplayOffset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(offset) => write!(f, "{offset}"),
            None => write!(f, "<negative>"),
        }
    }
}
