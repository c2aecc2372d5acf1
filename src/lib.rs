//! This crate provides a client for capturing numeric metric events with the
//! [Measurely](https://measurely.dev/) analytics service.
//!
//! # Quickstart
//!
//! The most convenient way to use this library is the [`measurely::init`]
//! function, which creates a client for an API key and binds it process-wide,
//! followed by any number of [`measurely::capture`] calls.
//!
//! ```no_run
//! measurely::init("my-api-key");
//! let result = measurely::capture("signups", 1i64);
//! if !result.success {
//!     eprintln!("capture failed: {}", result.message);
//! }
//! ```
//!
//! Every capture sends exactly one `POST` request to
//! `https://api.measurely.dev/event/v1/<metric identifier>` with a
//! `{"value": <integer>}` JSON body and blocks until the response has been
//! read.  A capture is successful only when the server answers with HTTP 200;
//! the result message carries the response body, or a description of the
//! local failure when no response was received.  Nothing is retried.
//!
//! [`measurely::init`]: fn.init.html
//! [`measurely::capture`]: fn.capture.html
//!
//! # Explicit clients
//!
//! Instead of the process-wide client, a [`Client`] can be created and owned
//! directly.  A client is immutable once created and can be shared between
//! threads behind an `Arc`.
//!
//! ```no_run
//! use measurely::{CapturePayload, Client};
//!
//! let client = Client::new("my-api-key");
//! let result = client.capture("signups", CapturePayload::new(1));
//! ```
//!
//! # Known limitations
//!
//! The metric identifier is placed into the URL path as is.  It is not
//! percent-encoded, so reserved characters such as `/`, `?` or `#` change the
//! request target, and `.` or `..` segments are collapsed (`../x` is sent to
//! `/event/x`).  Identifiers containing ASCII control characters are rejected
//! with `Failed to create http post request`.
//!
//! # Features
//!
//! Functionality of the crate can be turned on and off by feature flags.  This is the current list
//! of feature flags:
//!
//! Default features:
//!
//! * `transport`: Enables the default transport, which is currently `reqwest` with `native-tls`.
//!
//! Additional features:
//!
//! * `test`: Enables testing support.
//! * `debug-logs`: Uses the `log` crate for internal logging.
//! * `reqwest`: Enables the `reqwest` transport, which is currently the default.
//! * `native-tls`: Uses the `native-tls` crate, which is currently the default.
//! * `rustls`: Enables the `rustls` support of the `reqwest` transport.
//!   Please note that `native-tls` is a default feature, and one needs to use
//!   `default-features = false` to completely disable building `native-tls` dependencies.

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]

#[macro_use]
mod macros;

mod client;
mod clientoptions;
mod constants;
mod error;
mod init;
mod protocol;
mod transport;

#[cfg(any(test, feature = "test"))]
#[cfg_attr(doc_cfg, doc(cfg(feature = "test")))]
pub mod test;

pub mod transports;

pub use crate::client::Client;
pub use crate::clientoptions::ClientOptions;
pub use crate::constants::{DEFAULT_ENDPOINT, VERSION};
pub use crate::error::{BoxError, CaptureError};
pub use crate::init::{bind_client, capture, current_client, init};
pub use crate::protocol::{CapturePayload, CaptureResult, Request, Response};
pub use crate::transport::{Transport, TransportFactory};
