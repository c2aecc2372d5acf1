use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::constants::DEFAULT_ENDPOINT;
use crate::TransportFactory;

/// Configuration settings for the client.
///
/// # Examples
///
/// ```
/// let _options = measurely::ClientOptions {
///     api_key: "my-api-key".into(),
///     debug: true,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct ClientOptions {
    /// The API key sent as bearer token.  If empty the client is effectively
    /// disabled and every capture fails without touching the network.
    pub api_key: Cow<'static, str>,
    /// Base URL of the ingestion API.  Defaults to `https://api.measurely.dev`.
    pub endpoint: Cow<'static, str>,
    /// Enables debug mode.
    ///
    /// In debug mode debug information is printed to stderr to help you
    /// understand what measurely is doing.  When the `debug-logs` feature is
    /// enabled, measurely will instead log to the `measurely` logger
    /// independently of this flag with the `Debug` level.
    pub debug: bool,
    /// The transport to use.
    ///
    /// This is typically either a boxed function taking the client options by
    /// reference and returning a `Transport`, an `Arc<Transport>` or
    /// alternatively the `DefaultTransportFactory`.
    pub transport: Option<Arc<dyn TransportFactory>>,
}

impl ClientOptions {
    /// Creates new Options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates new Options and immediately configures them.
    pub fn configure<F>(f: F) -> Self
    where
        F: FnOnce(&mut ClientOptions) -> &mut ClientOptions,
    {
        let mut opts = Self::new();
        f(&mut opts);
        opts
    }

    /// Returns `true` if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// The capture URL for a metric.
    ///
    /// The identifier is interpolated as is.  Reserved characters such as `/`,
    /// `?` or `#` are not escaped and change the meaning of the URL, and `.`
    /// or `..` segments are collapsed when the URL is parsed, so `../x` ends
    /// up at `/event/x`.
    ///
    /// ```
    /// let options = measurely::ClientOptions::default();
    /// assert_eq!(
    ///     options.capture_url("signups"),
    ///     "https://api.measurely.dev/event/v1/signups"
    /// );
    /// ```
    pub fn capture_url(&self, metric_identifier: &str) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            crate::constants::EVENT_API_PATH,
            metric_identifier
        )
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[derive(Debug)]
        struct TransportFactory;

        f.debug_struct("ClientOptions")
            .field("api_key", &if self.has_api_key() { "[redacted]" } else { "" })
            .field("endpoint", &self.endpoint)
            .field("debug", &self.debug)
            .field("transport", &TransportFactory)
            .finish()
    }
}

impl Default for ClientOptions {
    fn default() -> ClientOptions {
        ClientOptions {
            api_key: Cow::Borrowed(""),
            endpoint: Cow::Borrowed(DEFAULT_ENDPOINT),
            debug: false,
            transport: None,
        }
    }
}

impl From<&'static str> for ClientOptions {
    fn from(api_key: &'static str) -> ClientOptions {
        Cow::Borrowed(api_key).into()
    }
}

impl From<String> for ClientOptions {
    fn from(api_key: String) -> ClientOptions {
        Cow::<'static, str>::Owned(api_key).into()
    }
}

impl From<Cow<'static, str>> for ClientOptions {
    fn from(api_key: Cow<'static, str>) -> ClientOptions {
        ClientOptions {
            api_key,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert!(!options.has_api_key());
        assert_eq!(options.endpoint, "https://api.measurely.dev");
        assert!(!options.debug);
        assert!(options.transport.is_none());
    }

    #[test]
    fn test_from_api_key() {
        let options: ClientOptions = "abc123".into();
        assert_eq!(options.api_key, "abc123");
        assert_eq!(options.endpoint, DEFAULT_ENDPOINT);

        let options = ClientOptions::from(String::from("def456"));
        assert!(options.has_api_key());
        assert_eq!(options.api_key, "def456");
    }

    #[test]
    fn test_configure() {
        let options = ClientOptions::configure(|o| {
            o.api_key = "abc123".into();
            o.endpoint = "http://127.0.0.1:8080/".into();
            o
        });
        assert_eq!(
            options.capture_url("visits"),
            "http://127.0.0.1:8080/event/v1/visits"
        );
    }

    #[test]
    fn test_capture_url_is_verbatim() {
        let options = ClientOptions::default();
        assert_eq!(
            options.capture_url("team/a b?x=1#frag"),
            "https://api.measurely.dev/event/v1/team/a b?x=1#frag"
        );
        assert_eq!(options.capture_url(""), "https://api.measurely.dev/event/v1/");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let options: ClientOptions = "super-secret".into();
        let debug = format!("{:?}", options);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[redacted]"));
    }
}
