//! The data exchanged with the capture API.

use serde::{Deserialize, Serialize};

use crate::error::CaptureError;

/// The body of a capture request.
///
/// Serializes to `{"value": <integer>}` and nothing else.
///
/// # Examples
///
/// ```
/// let payload = measurely::CapturePayload::new(42);
/// assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"value":42}"#);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapturePayload {
    /// The metric value to be recorded.
    pub value: i64,
}

impl CapturePayload {
    /// Creates a payload carrying the given value.
    pub fn new(value: i64) -> Self {
        CapturePayload { value }
    }
}

impl From<i64> for CapturePayload {
    fn from(value: i64) -> Self {
        CapturePayload::new(value)
    }
}

/// A fully prepared capture request, as handed to a [`Transport`](crate::Transport).
///
/// The body is always JSON; transports send it with
/// `Content-Type: application/json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Target URL, with the metric identifier interpolated verbatim.
    pub url: String,
    /// Value of the `Authorization` header, `Bearer <api key>`.
    pub authorization: String,
    /// Serialized [`CapturePayload`].
    pub body: Vec<u8>,
}

/// What came back from the capture API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The raw response body.
    pub body: String,
}

impl Response {
    /// Returns `true` for an HTTP 200 response.  Any other code, 2xx included,
    /// is not a success.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// The outcome of a capture.
///
/// `message` holds either a local error description, when no response was
/// received, or the raw response body, whatever the status code was.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptureResult {
    /// `true` if and only if the endpoint answered with HTTP 200.
    pub success: bool,
    /// The server's response body or a local error message.
    pub message: String,
}

impl From<Response> for CaptureResult {
    fn from(response: Response) -> Self {
        CaptureResult {
            success: response.is_success(),
            message: response.body,
        }
    }
}

impl From<CaptureError> for CaptureResult {
    fn from(err: CaptureError) -> Self {
        CaptureResult {
            success: false,
            message: err.to_string(),
        }
    }
}

impl From<Result<Response, CaptureError>> for CaptureResult {
    fn from(result: Result<Response, CaptureError>) -> Self {
        match result {
            Ok(response) => response.into(),
            Err(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_json() {
        let payload = CapturePayload::new(42);
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"value":42}"#);

        let payload: CapturePayload = (-7).into();
        assert_eq!(serde_json::to_vec(&payload).unwrap(), br#"{"value":-7}"#);
    }

    #[test]
    fn test_result_from_ok_response() {
        let result = CaptureResult::from(Response {
            status: 200,
            body: "ok".into(),
        });
        assert!(result.success);
        assert_eq!(result.message, "ok");
    }

    #[test]
    fn test_result_from_non_200_keeps_body() {
        for status in [201, 204, 400, 401, 500] {
            let result = CaptureResult::from(Response {
                status,
                body: "server error".into(),
            });
            assert!(!result.success, "status {} must not succeed", status);
            assert_eq!(result.message, "server error");
        }
    }

    #[test]
    fn test_result_from_error() {
        let result = CaptureResult::from(Err::<Response, _>(CaptureError::MissingApiKey));
        assert_eq!(
            result,
            CaptureResult {
                success: false,
                message: "Missing API KEY, please call the init function".into(),
            }
        );
    }
}
