use crate::remote::RemoteError;
use serde::de::DeserializeOwned;
use thiserror::Error as ThisError;
use url::Url;

/// Opaque cause reported by a fetcher.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

///
/// PageReference
///
/// A server-issued page URL. The raw string is what gets requested; the
/// parsed form is only there for fetchers that want structured access.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageReference<'a> {
    raw: &'a str,
    url: Url,
}

impl<'a> PageReference<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, url::ParseError> {
        let url = Url::parse(raw)?;

        Ok(Self { raw, url })
    }

    /// The reference exactly as the server issued it.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

///
/// RawResponse
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

///
/// PageFetcher
///
/// Performs one GET for a page reference. Timeouts, authentication and
/// cancellation are the fetcher's own business.
///

pub trait PageFetcher {
    type Error: Into<TransportError>;

    fn fetch(&self, reference: &PageReference<'_>) -> Result<RawResponse, Self::Error>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    type Error = T::Error;

    fn fetch(&self, reference: &PageReference<'_>) -> Result<RawResponse, Self::Error> {
        (**self).fetch(reference)
    }
}

///
/// DecodeError
///

#[derive(Debug, ThisError)]
pub enum DecodeError {
    #[error("response body was empty")]
    EmptyBody,

    #[error("error while parsing response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

///
/// DecodeCollection
///
/// Turns a response body into a typed collection.
///

pub trait DecodeCollection<C> {
    fn decode(&self, body: &[u8]) -> Result<C, DecodeError>;
}

impl<C, F> DecodeCollection<C> for F
where
    F: Fn(&[u8]) -> Result<C, DecodeError>,
{
    fn decode(&self, body: &[u8]) -> Result<C, DecodeError> {
        self(body)
    }
}

///
/// JsonDecoder
///
/// Decodes any `serde` collection from a JSON body.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDecoder;

impl<C: DeserializeOwned> DecodeCollection<C> for JsonDecoder {
    fn decode(&self, body: &[u8]) -> Result<C, DecodeError> {
        if body.is_empty() {
            return Err(DecodeError::EmptyBody);
        }

        Ok(serde_json::from_slice(body)?)
    }
}

///
/// ErrorFromResponse
///
/// Builds the reportable error for a non-success response.
///

pub trait ErrorFromResponse {
    fn error_from_response(&self, body: &[u8], status: u16) -> RemoteError;
}

impl<F> ErrorFromResponse for F
where
    F: Fn(&[u8], u16) -> RemoteError,
{
    fn error_from_response(&self, body: &[u8], status: u16) -> RemoteError {
        self(body, status)
    }
}

///
/// RemoteErrorDecoder
///
/// Reads the platform's standard error payload.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteErrorDecoder;

impl ErrorFromResponse for RemoteErrorDecoder {
    fn error_from_response(&self, body: &[u8], status: u16) -> RemoteError {
        RemoteError::from_response(body, status)
    }
}
