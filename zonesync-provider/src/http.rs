//! Shared HTTP request plumbing for the change-batch client.
//!
//! Sends a prepared request, logs it, and maps transport-level failures
//! (timeouts, connection errors, 429, 5xx) onto [`ProviderError`]. There
//! is deliberately no retry layer: every submission failure is terminal
//! for a sync run.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ProviderError;

/// Default connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default whole-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build a reqwest client with the standard timeout configuration.
pub(crate) fn create_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
}

/// Execute a prepared request and return `(status_code, body_text)`.
///
/// Transport failures become [`ProviderError::NetworkError`] or
/// [`ProviderError::Timeout`]; HTTP 429 becomes
/// [`ProviderError::RateLimited`]; 502-504 become
/// [`ProviderError::NetworkError`]. Everything else is handed back to the
/// caller for protocol-level interpretation.
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    method_name: &str,
    url_or_action: &str,
) -> Result<(u16, String), ProviderError> {
    log::debug!("{method_name} {url_or_action}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ProviderError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ProviderError::NetworkError {
                detail: e.to_string(),
            }
        }
    })?;

    let status_code = response.status().as_u16();
    log::debug!("Response Status: {status_code}");

    // Extract Retry-After before consuming the body
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    if status_code == 429 {
        let body = response.text().await.unwrap_or_default();
        log::warn!("Rate limited (HTTP 429), retry_after={retry_after:?}");
        return Err(ProviderError::RateLimited {
            retry_after,
            raw_message: Some(body),
        });
    }

    if matches!(status_code, 502..=504) {
        let body = response.text().await.unwrap_or_default();
        log::warn!("Server error (HTTP {status_code})");
        return Err(ProviderError::NetworkError {
            detail: format!("HTTP {status_code}: {body}"),
        });
    }

    let response_text = response
        .text()
        .await
        .map_err(|e| ProviderError::NetworkError {
            detail: format!("Failed to read response body: {e}"),
        })?;

    log::debug!("Response Body: {response_text}");

    Ok((status_code, response_text))
}

/// Parse a JSON response body into `T`.
pub(crate) fn parse_json<T>(response_text: &str) -> Result<T, ProviderError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {response_text}");
        ProviderError::ParseError {
            detail: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> = parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> = parse_json("not json");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn create_client_succeeds() {
        assert!(create_http_client().is_ok());
    }
}
