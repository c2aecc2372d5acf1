use std::sync::Arc;

use crate::error::CaptureError;
use crate::protocol::{Request, Response};
use crate::ClientOptions;

/// The trait for transports.
///
/// A transport performs exactly one round trip per [`send`](Transport::send)
/// call and blocks until the full response body has been read.  It must not
/// retry on its own.
pub trait Transport: Send + Sync + 'static {
    /// Sends a prepared capture request and returns the response.
    ///
    /// Failures map onto [`CaptureError::BuildRequest`],
    /// [`CaptureError::SendRequest`] and [`CaptureError::ReadBody`].  A
    /// response with any status code is `Ok`.
    fn send(&self, request: Request) -> Result<Response, CaptureError>;
}

/// A factory creating transport instances.
///
/// Because options are potentially reused between different clients the
/// options do not actually contain a transport but a factory object that
/// can create transports instead.
///
/// The factory has a single method that creates a new arced transport.
/// Because transports can be wrapped in `Arc`s and those are clonable
/// any `Arc<Transport>` is also a valid transport factory.  This for
/// instance lets you put a `Arc<TestTransport>` directly into the options.
///
/// This is automatically implemented for all closures optionally taking
/// options and returning a boxed factory.
pub trait TransportFactory: Send + Sync {
    /// Given some options creates a transport.
    fn create_transport(&self, options: &ClientOptions) -> Arc<dyn Transport>;
}

impl<F> TransportFactory for F
where
    F: Fn(&ClientOptions) -> Arc<dyn Transport> + Clone + Send + Sync + 'static,
{
    fn create_transport(&self, options: &ClientOptions) -> Arc<dyn Transport> {
        (*self)(options)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: Request) -> Result<Response, CaptureError> {
        (**self).send(request)
    }
}

impl<T: Transport> TransportFactory for Arc<T> {
    fn create_transport(&self, options: &ClientOptions) -> Arc<dyn Transport> {
        let _options = options;
        self.clone()
    }
}

/// Creates the default HTTP transport.
///
/// This is the default value for `transport` on the client options.  It
/// creates a `HttpTransport`.  If no http transport was compiled into the
/// library every send fails with [`CaptureError::SendRequest`].
#[derive(Clone, Debug, Default)]
pub struct DefaultTransportFactory;

impl TransportFactory for DefaultTransportFactory {
    fn create_transport(&self, options: &ClientOptions) -> Arc<dyn Transport> {
        #[cfg(feature = "reqwest")]
        {
            Arc::new(crate::transports::HttpTransport::new(options))
        }
        #[cfg(not(feature = "reqwest"))]
        {
            measurely_debug!(options, "measurely crate was compiled without transport");
            Arc::new(NoopTransport)
        }
    }
}

#[cfg(not(feature = "reqwest"))]
struct NoopTransport;

#[cfg(not(feature = "reqwest"))]
impl Transport for NoopTransport {
    fn send(&self, _request: Request) -> Result<Response, CaptureError> {
        Err(CaptureError::send_request(
            "measurely crate was compiled without transport",
        ))
    }
}
