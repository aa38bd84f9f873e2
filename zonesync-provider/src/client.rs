//! HTTP implementation of the change-batch API.
//!
//! Speaks the JSON change-batch protocol: `POST
//! {endpoint}/zones/{zone_id}/changes` under a bearer token, with an
//! envelope response of `{success, result, errors}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::http::{create_http_client, execute_request, parse_json};
use crate::traits::{ApiErrorMapper, ChangeBatchApi, ErrorContext, RawApiError};
use crate::types::{ChangeEntry, ChangeInfo, MAX_CHANGES_PER_BATCH};

/// Change-batch client for a hosted-DNS HTTP API.
pub struct HttpChangeBatchClient {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

/// Envelope every API response is wrapped in.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    success: bool,
    result: Option<T>,
    errors: Option<Vec<ApiErrorBody>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
    /// Owner name of the rejected change, reported for per-record errors.
    #[serde(default)]
    record_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChangeBatchBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    changes: &'a [ChangeEntry],
}

impl HttpChangeBatchClient {
    /// Create a client against `endpoint` (scheme + host, no trailing
    /// slash needed) authenticating with `api_token`.
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let client = create_http_client().map_err(|e| ProviderError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            endpoint,
            api_token: api_token.into(),
        })
    }

    async fn post_changes(
        &self,
        zone_id: &str,
        body: &ChangeBatchBody<'_>,
        context: ErrorContext,
    ) -> Result<ChangeInfo> {
        let url = format!("{}/zones/{}/changes", self.endpoint, zone_id);

        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body);

        let (status, text) = execute_request(request, "POST", &url).await?;

        let envelope: ApiResponse<ChangeInfo> = parse_json(&text)?;

        if !envelope.success {
            let first = envelope.errors.and_then(|errors| errors.into_iter().next());
            let (raw, context) = match first {
                Some(e) => (
                    RawApiError::with_code(e.code, e.message),
                    ErrorContext {
                        record_name: e.record_name,
                        ..context
                    },
                ),
                None => (
                    RawApiError::new(format!("HTTP {status} with no error body")),
                    context,
                ),
            };
            log::error!("Change batch rejected: {}", raw.message);
            return Err(self.map_error(raw, context));
        }

        envelope
            .result
            .ok_or_else(|| self.parse_error("missing result field in response"))
    }
}

impl ApiErrorMapper for HttpChangeBatchClient {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let Some(code) = raw.code.as_deref() else {
            return self.unknown_error(raw);
        };

        match code {
            "unauthorized" | "invalid_token" => ProviderError::InvalidCredentials {
                raw_message: Some(raw.message),
            },
            "forbidden" => ProviderError::PermissionDenied {
                raw_message: Some(raw.message),
            },
            "zone_not_found" => ProviderError::ZoneNotFound {
                zone_id: context.zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            "invalid_change" | "invalid_record" => ProviderError::InvalidChange {
                record_name: context.record_name,
                detail: raw.message,
            },
            "batch_too_large" => ProviderError::BatchTooLarge {
                size: context.batch_size.unwrap_or_default(),
                limit: MAX_CHANGES_PER_BATCH,
            },
            _ => self.unknown_error(raw),
        }
    }
}

#[async_trait]
impl ChangeBatchApi for HttpChangeBatchClient {
    async fn submit_change_batch(
        &self,
        zone_id: &str,
        changes: &[ChangeEntry],
        comment: Option<&str>,
    ) -> Result<ChangeInfo> {
        if changes.len() > MAX_CHANGES_PER_BATCH {
            return Err(ProviderError::BatchTooLarge {
                size: changes.len(),
                limit: MAX_CHANGES_PER_BATCH,
            });
        }

        let body = ChangeBatchBody { comment, changes };
        let context = ErrorContext {
            zone_id: Some(zone_id.to_string()),
            record_name: None,
            batch_size: Some(changes.len()),
        };

        self.post_changes(zone_id, &body, context).await
    }
}
