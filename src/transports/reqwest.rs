use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::constants::CONTENT_TYPE_JSON;
use crate::{CaptureError, ClientOptions, Request, Response, Transport};

/// A [`Transport`] that sends captures via the blocking [`reqwest`] client.
///
/// When the `transport` feature is enabled this will currently
/// be the default transport.  This is separately enabled by the
/// `reqwest` feature flag.
///
/// The underlying client keeps reqwest's defaults for timeouts, TLS
/// verification, redirects and proxies.  It is created once and reused, so
/// connections are kept alive between captures.
///
/// The blocking client runs its own runtime; it must not be created or
/// dropped from within an async context.
///
/// [`reqwest`]: https://crates.io/crates/reqwest
#[cfg_attr(doc_cfg, doc(cfg(feature = "reqwest")))]
pub struct ReqwestHttpTransport {
    client: ReqwestClient,
    debug: bool,
}

#[cfg_attr(doc_cfg, doc(cfg(feature = "reqwest")))]
impl ReqwestHttpTransport {
    /// Creates a new Transport.
    pub fn new(options: &ClientOptions) -> Self {
        Self::with_client(options, ReqwestClient::new())
    }

    /// Creates a new Transport that uses the specified [`ReqwestClient`].
    pub fn with_client(options: &ClientOptions, client: ReqwestClient) -> Self {
        Self {
            client,
            debug: options.debug,
        }
    }
}

#[cfg_attr(doc_cfg, doc(cfg(feature = "reqwest")))]
impl Transport for ReqwestHttpTransport {
    fn send(&self, request: Request) -> Result<Response, CaptureError> {
        // header values are only rejected when the request goes out
        let authorization = HeaderValue::from_str(&request.authorization).map_err(|err| {
            measurely_debug!(self, "Failed to send request: invalid authorization header");
            CaptureError::send_request(err)
        })?;

        let request = self
            .client
            .post(&request.url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(request.body)
            .build()
            .map_err(|err| {
                measurely_debug!(self, "Failed to build request: {}", err);
                CaptureError::build_request(err)
            })?;

        let response = self.client.execute(request).map_err(|err| {
            measurely_debug!(self, "Failed to send request: {}", err);
            CaptureError::send_request(err)
        })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|err| {
            measurely_debug!(self, "Failed to read response: {}", err);
            CaptureError::read_body(err)
        })?;
        measurely_debug!(self, "Got response {}: `{}`", status, body);

        Ok(Response { status, body })
    }
}
