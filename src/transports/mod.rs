//! The provided transports.
//!
//! This module exposes all transports that are compiled into the measurely
//! library.  The `reqwest` feature turns on the blocking reqwest transport.

#[cfg(feature = "reqwest")]
mod reqwest;
#[cfg(feature = "reqwest")]
pub use self::reqwest::ReqwestHttpTransport;

pub use crate::transport::DefaultTransportFactory;

/// The default http transport.
#[cfg(feature = "reqwest")]
pub type HttpTransport = ReqwestHttpTransport;
