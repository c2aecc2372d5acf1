/// The version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The ingestion endpoint used when `ClientOptions::endpoint` is not overridden.
pub const DEFAULT_ENDPOINT: &str = "https://api.measurely.dev";

/// Path prefix of the event capture API, relative to the endpoint.
pub(crate) const EVENT_API_PATH: &str = "event/v1";

#[cfg_attr(not(feature = "reqwest"), allow(dead_code))]
pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";
