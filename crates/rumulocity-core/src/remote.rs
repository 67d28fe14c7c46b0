//! Module: remote
//! Responsibility: the platform's error payload for non-success responses.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// RemoteError
///
/// `application/vnd.com.nsn.cumulocity.error+json` without error details,
/// plus the HTTP status it arrived with.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("request failed ({status}): {error_type:?} {message} See: {info}")]
pub struct RemoteError {
    #[serde(rename = "error", default)]
    pub error_type: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub info: String,

    #[serde(skip)]
    pub status: u16,
}

impl RemoteError {
    pub const CONTENT_TYPE: &'static str = "application/vnd.com.nsn.cumulocity.error+json";

    pub fn new(
        error_type: impl Into<String>,
        message: impl Into<String>,
        info: impl Into<String>,
        status: u16,
    ) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            info: info.into(),
            status,
        }
    }

    /// Build from a response body. Bodies that are not an error payload
    /// still produce an error carrying the status.
    #[must_use]
    pub fn from_response(body: &[u8], status: u16) -> Self {
        let mut err = serde_json::from_slice::<Self>(body).unwrap_or_else(|decode_err| {
            tracing::trace!(status, error = %decode_err, "response body is not an error payload");
            Self::default()
        });
        err.status = status;

        err
    }
}
