use std::error::Error;

use thiserror::Error;

/// Boxed cause of a transport level failure.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The ways a capture can fail before a response is available.
///
/// The `Display` output of every variant is the message reported in
/// [`CaptureResult::message`](crate::CaptureResult::message).  The underlying
/// cause, where there is one, is available through [`Error::source`].
///
/// A response with a non-200 status code is not an error: it is returned as a
/// regular [`Response`](crate::Response) and only turns into an unsuccessful
/// [`CaptureResult`](crate::CaptureResult).
#[derive(Debug, Error)]
pub enum CaptureError {
    /// No API key was configured on the client.
    #[error("Missing API KEY, please call the init function")]
    MissingApiKey,
    /// The payload could not be serialized to JSON.
    #[error("Failed to marshal the payload")]
    Serialize(#[source] serde_json::Error),
    /// The HTTP request could not be built, usually because of a malformed URL.
    #[error("Failed to create http post request")]
    BuildRequest(#[source] BoxError),
    /// The request could not be sent (DNS, TLS, connection or timeout errors).
    #[error("Failed to send request")]
    SendRequest(#[source] BoxError),
    /// The response body could not be read in full.
    #[error("Failed to read response body")]
    ReadBody(#[source] BoxError),
}

impl CaptureError {
    /// Wraps a cause as a request building failure.
    pub fn build_request<E: Into<BoxError>>(err: E) -> Self {
        CaptureError::BuildRequest(err.into())
    }

    /// Wraps a cause as a send failure.
    pub fn send_request<E: Into<BoxError>>(err: E) -> Self {
        CaptureError::SendRequest(err.into())
    }

    /// Wraps a cause as a body read failure.
    pub fn read_body<E: Into<BoxError>>(err: E) -> Self {
        CaptureError::ReadBody(err.into())
    }
}
