use std::fmt;
use std::sync::Arc;

use crate::error::CaptureError;
use crate::protocol::{CapturePayload, CaptureResult, Request, Response};
use crate::transport::DefaultTransportFactory;
use crate::{ClientOptions, Transport, TransportFactory};

impl<T: Into<ClientOptions>> From<T> for Client {
    fn from(o: T) -> Client {
        Client::with_options(o.into())
    }
}

/// The Measurely Client.
///
/// The client holds the API key and sends captures to the ingestion API via
/// the configured [`Transport`].  It is immutable once created, so it can be
/// shared between threads behind an `Arc` without further locking.
///
/// # Examples
///
/// ```
/// let client = measurely::Client::new("my-api-key");
/// assert!(client.is_enabled());
/// ```
pub struct Client {
    options: ClientOptions,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("options", &self.options)
            .finish()
    }
}

impl Clone for Client {
    fn clone(&self) -> Client {
        Client {
            options: self.options.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl Client {
    /// Creates a new client for the given API key with default options.
    ///
    /// An empty key creates a disabled client: every capture then fails with
    /// the missing API key message and nothing is sent.
    pub fn new<K: Into<std::borrow::Cow<'static, str>>>(api_key: K) -> Client {
        Client::with_options(ClientOptions {
            api_key: api_key.into(),
            ..Default::default()
        })
    }

    /// Creates a new client from a config.
    ///
    /// # Supported Configs
    ///
    /// * `ClientOptions`: configure the client with the given client options.
    /// * `&str` / `String` / `Cow<str>`: configure the client with the given API key.
    pub fn from_config<O: Into<ClientOptions>>(opts: O) -> Client {
        Client::with_options(opts.into())
    }

    /// Creates a new client with the given options.
    ///
    /// If the options do not name a transport the default HTTP transport is
    /// created.
    pub fn with_options(options: ClientOptions) -> Client {
        let transport = match options.transport {
            Some(ref factory) => factory.create_transport(&options),
            None => DefaultTransportFactory.create_transport(&options),
        };
        if !options.has_api_key() {
            measurely_debug!(options, "created client without API key, captures are disabled");
        }
        Client { options, transport }
    }

    /// Gets the options of the client.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Quick check to see if the client has an API key and will send captures.
    pub fn is_enabled(&self) -> bool {
        self.options.has_api_key()
    }

    /// Captures a metric value and reports the outcome.
    ///
    /// This blocks until the round trip completes.  Exactly one request is
    /// sent, or none if no API key is configured.  The result is successful
    /// only for an HTTP 200 response; its message is the response body, or a
    /// description of the local failure.
    ///
    /// The metric identifier is placed in the URL path verbatim.  It is not
    /// percent-encoded, so identifiers containing `/`, `?` or `#` address a
    /// different path, and `.` or `..` segments are collapsed.  Identifiers
    /// containing ASCII control characters are rejected before anything is
    /// sent.
    ///
    /// ```
    /// use measurely::{CapturePayload, Client};
    ///
    /// let result = Client::new("").capture("signups", CapturePayload::new(1));
    /// assert!(!result.success);
    /// assert_eq!(result.message, "Missing API KEY, please call the init function");
    /// ```
    pub fn capture<P: Into<CapturePayload>>(
        &self,
        metric_identifier: &str,
        payload: P,
    ) -> CaptureResult {
        self.try_capture(metric_identifier, payload).into()
    }

    /// Captures a metric value, returning the raw response or a typed error.
    ///
    /// Unlike [`capture`](Client::capture), the failure cause is kept in the
    /// error's source chain.  A non-200 response is still `Ok`.
    pub fn try_capture<P: Into<CapturePayload>>(
        &self,
        metric_identifier: &str,
        payload: P,
    ) -> Result<Response, CaptureError> {
        let request = self.prepare_request(metric_identifier, &payload.into())?;
        measurely_debug!(self.options, "capturing `{}` to {}", metric_identifier, request.url);
        self.transport.send(request)
    }

    fn prepare_request(
        &self,
        metric_identifier: &str,
        payload: &CapturePayload,
    ) -> Result<Request, CaptureError> {
        if !self.options.has_api_key() {
            return Err(CaptureError::MissingApiKey);
        }
        let body = serde_json::to_vec(payload).map_err(CaptureError::Serialize)?;
        // URL parsing would drop or encode these and address another metric
        if metric_identifier.chars().any(|c| c.is_ascii_control()) {
            return Err(CaptureError::build_request(
                "metric identifier contains an ASCII control character",
            ));
        }
        Ok(Request {
            url: self.options.capture_url(metric_identifier),
            authorization: format!("Bearer {}", self.options.api_key),
            body,
        })
    }
}
