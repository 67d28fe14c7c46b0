use crate::{
    collection::{DecodeError, TransportError},
    error::ErrorClass,
    remote::RemoteError,
};
use thiserror::Error as ThisError;

///
/// PageError
///
/// Failure while following a page reference.
/// Reaching the end of a collection is not an error.
///

#[derive(Debug, ThisError)]
pub enum PageError {
    #[error("unparsable URL given for page reference '{reference}': {source}")]
    InvalidReference {
        reference: String,
        #[source]
        source: url::ParseError,
    },

    #[error("error while fetching page '{reference}': {source}")]
    Transport {
        reference: String,
        #[source]
        source: TransportError,
    },

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("error while decoding page '{reference}': {source}")]
    Decode {
        reference: String,
        #[source]
        source: DecodeError,
    },
}

impl PageError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidReference { .. } => ErrorClass::Reference,
            Self::Transport { .. } => ErrorClass::Transport,
            Self::Remote(_) => ErrorClass::Remote,
            Self::Decode { .. } => ErrorClass::Decode,
        }
    }

    /// The remote error, when the server answered with a failure status.
    #[must_use]
    pub const fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(err) => Some(err),
            _ => None,
        }
    }
}
