//! This provides testing functionality for building tests.
//!
//! **Feature:** `test` (*disabled by default*)
//!
//! If the measurely crate has been compiled with the test support feature
//! this module becomes available and provides a transport that records
//! captures instead of sending them.
//!
//! # Example usage
//!
//! ```
//! # #[cfg(feature = "test")] {
//! use measurely::test::with_captured_requests;
//!
//! let requests = with_captured_requests(|| {
//!     measurely::capture("signups", 1i64);
//! });
//! assert_eq!(requests.len(), 1);
//! assert_eq!(requests[0].body, br#"{"value":1}"#);
//! # }
//! ```

use std::sync::{Arc, Mutex};

use crate::protocol::{Request, Response};
use crate::{bind_client, CaptureError, Client, ClientOptions, Transport};

const TEST_API_KEY: &str = "measurely-test-key";

/// Collects requests instead of sending them, answering each with a fixed
/// response.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test")] {
/// use measurely::test::TestTransport;
/// use measurely::{Client, ClientOptions};
/// use std::sync::Arc;
///
/// let transport = TestTransport::new();
/// let client = Client::with_options(ClientOptions {
///     api_key: "abc123".into(),
///     transport: Some(Arc::new(transport.clone())),
///     ..ClientOptions::default()
/// });
/// client.capture("signups", 1i64);
/// assert_eq!(transport.fetch_and_clear_requests()[0].authorization, "Bearer abc123");
/// # }
/// ```
pub struct TestTransport {
    collected: Mutex<Vec<Request>>,
    response: Response,
}

impl TestTransport {
    /// Creates a new test transport answering `200 ok`.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Arc<TestTransport> {
        TestTransport::with_response(200, "ok")
    }

    /// Creates a new test transport answering with the given status and body.
    pub fn with_response<B: Into<String>>(status: u16, body: B) -> Arc<TestTransport> {
        Arc::new(TestTransport {
            collected: Mutex::new(vec![]),
            response: Response {
                status,
                body: body.into(),
            },
        })
    }

    /// Fetches and clears the contained requests.
    pub fn fetch_and_clear_requests(&self) -> Vec<Request> {
        let mut guard = self.collected.lock().unwrap();
        std::mem::take(&mut *guard)
    }
}

impl Transport for TestTransport {
    fn send(&self, request: Request) -> Result<Response, CaptureError> {
        self.collected.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// Runs some code with a test client bound and returns the captured requests.
///
/// This is a shortcut for [`with_captured_requests_options`] with default
/// options.
pub fn with_captured_requests<F: FnOnce()>(f: F) -> Vec<Request> {
    with_captured_requests_options(f, ClientOptions::default())
}

/// Runs some code with a test client built from the given options bound and
/// returns the captured requests.
///
/// If no API key is set on the options a test key is inserted.  The transport
/// on the options is also overridden with a `TestTransport`.  The previously
/// bound client is restored afterwards.
pub fn with_captured_requests_options<F: FnOnce(), O: Into<ClientOptions>>(
    f: F,
    options: O,
) -> Vec<Request> {
    let transport = TestTransport::new();
    let mut options = options.into();
    if !options.has_api_key() {
        options.api_key = TEST_API_KEY.into();
    }
    options.transport = Some(Arc::new(transport.clone()));

    let previous = bind_client(Some(Arc::new(Client::with_options(options))));
    f();
    bind_client(previous);
    transport.fetch_and_clear_requests()
}
