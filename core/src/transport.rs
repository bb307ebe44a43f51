//! The transport collaborator seam and client configuration.
//!
//! # Design
//! The core never touches the network. Every resource client delegates the
//! actual HTTP round-trip to a caller-supplied [`Transport`], which owns the
//! base URL, credentials, timeouts, and retry policy. The core hands it the
//! API name/version pair (the Flex APIs are versioned per resource), the
//! endpoint path, and the query parameters, and gets back the decoded JSON
//! body. This keeps the core deterministic and testable without a server.

use serde_json::Value;

use crate::error::FlexError;

/// Query parameters as ordered pairs; caller-supplied pairs come first.
pub type QueryParams = Vec<(String, String)>;

/// Executes one Flex API request and returns the decoded JSON body.
///
/// Implementations fail with [`FlexError::Transport`] on network errors and
/// non-2xx responses, and with [`FlexError::Decode`] when the body is not
/// valid JSON.
pub trait Transport {
    fn send_request(
        &self,
        api_name: &str,
        api_version: &str,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<Value, FlexError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send_request(
        &self,
        api_name: &str,
        api_version: &str,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<Value, FlexError> {
        (**self).send_request(api_name, api_version, endpoint, query)
    }
}

/// Process-wide client settings.
///
/// `use_utc_time` is injected as the `utc` query parameter on status lookups
/// whenever the caller does not pass one explicitly.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub use_utc_time: bool,
}

/// Convert caller-supplied query pairs to owned form.
pub(crate) fn to_owned_query(query: &[(&str, &str)]) -> QueryParams {
    query
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Append the configured `utc` default unless the caller already set one.
pub(crate) fn with_utc_default(mut query: QueryParams, config: &Config) -> QueryParams {
    if !query.iter().any(|(k, _)| k == "utc") {
        query.push(("utc".to_string(), config.use_utc_time.to_string()));
    }
    query
}
