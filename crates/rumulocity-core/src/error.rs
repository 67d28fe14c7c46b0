use crate::{collection::PageError, jsonc::SchemaError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Any failure surfaced by this crate. Every operation returns errors as
/// values; nothing here panics on bad input.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Page(#[from] PageError),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Schema(_) => ErrorClass::Schema,
            Self::Page(err) => err.class(),
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// Directive misuse or a non-record value given to the serializer.
    Schema,
    /// A page reference that is not a URL.
    Reference,
    /// The exchange with the server could not be completed.
    Transport,
    /// The server answered with a non-success status.
    Remote,
    /// The response body did not match the expected collection shape.
    Decode,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Schema => "schema",
            Self::Reference => "reference",
            Self::Transport => "transport",
            Self::Remote => "remote",
            Self::Decode => "decode",
        };

        write!(f, "{label}")
    }
}
