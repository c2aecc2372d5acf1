use std::sync::{Arc, PoisonError, RwLock};

use crate::error::CaptureError;
use crate::protocol::{CapturePayload, CaptureResult};
use crate::{Client, ClientOptions};

lazy_static::lazy_static! {
    static ref CURRENT_CLIENT: RwLock<Option<Arc<Client>>> = RwLock::new(None);
}

/// Creates a client for the given config and binds it as the process-wide
/// client used by [`capture`].
///
/// Calling this again replaces the previous client.  The process-wide slot is
/// guarded by a lock, so `init` may race with `capture` on other threads
/// without undefined behavior: every capture uses either the old or the new
/// client in full.
///
/// # Examples
///
/// ```
/// measurely::init("my-api-key");
/// ```
///
/// Options can be passed to configure more than the API key:
///
/// ```
/// measurely::init(measurely::ClientOptions {
///     api_key: "my-api-key".into(),
///     debug: true,
///     ..Default::default()
/// });
/// ```
pub fn init<C: Into<ClientOptions>>(cfg: C) {
    let client = Arc::new(Client::with_options(cfg.into()));
    if client.is_enabled() {
        measurely_debug!(
            client.options(),
            "enabled measurely client for {}",
            client.options().endpoint
        );
    } else {
        measurely_debug!(
            client.options(),
            "initialized disabled measurely client due to empty API key"
        );
    }
    bind_client(Some(client));
}

/// Binds a new client as the process-wide client and returns the previous one.
///
/// Passing `None` unbinds the client; captures then fail with the missing
/// API key message.
pub fn bind_client(client: Option<Arc<Client>>) -> Option<Arc<Client>> {
    let mut guard = CURRENT_CLIENT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, client)
}

/// Returns the currently bound process-wide client.
pub fn current_client() -> Option<Arc<Client>> {
    CURRENT_CLIENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Captures a metric value with the process-wide client.
///
/// Without a prior [`init`], or after initializing with an empty key, this
/// returns an unsuccessful result with the message
/// `Missing API KEY, please call the init function` and sends nothing.
/// See [`Client::capture`] for the full semantics.
pub fn capture<P: Into<CapturePayload>>(metric_identifier: &str, payload: P) -> CaptureResult {
    match current_client() {
        Some(client) => client.capture(metric_identifier, payload),
        None => CaptureError::MissingApiKey.into(),
    }
}
