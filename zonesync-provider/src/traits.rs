use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ChangeEntry, ChangeInfo};

/// Raw API error as reported by the destination (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code in the destination's own vocabulary.
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Context carried alongside a raw error so mapping can fill in
/// identifiers the API response itself may omit (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Hosted zone id the failing request targeted.
    pub zone_id: Option<String>,
    /// Owner name of the change the destination rejected, if known.
    pub record_name: Option<String>,
    /// Number of changes in the failing batch.
    pub batch_size: Option<usize>,
}

/// Maps raw destination errors into [`ProviderError`] (internal).
pub(crate) trait ApiErrorMapper {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            detail: detail.to_string(),
        }
    }

    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Destination change-batch API.
///
/// One implementation speaks the real HTTP protocol
/// ([`HttpChangeBatchClient`](crate::HttpChangeBatchClient)); tests
/// substitute their own to observe or fail submissions.
#[async_trait]
pub trait ChangeBatchApi: Send + Sync {
    /// Submit one change batch to the given hosted zone.
    ///
    /// The batch is atomic at the API level: it is either applied in full
    /// (returning a [`ChangeInfo`] receipt) or rejected in full. The
    /// number of changes must not exceed
    /// [`MAX_CHANGES_PER_BATCH`](crate::MAX_CHANGES_PER_BATCH).
    async fn submit_change_batch(
        &self,
        zone_id: &str,
        changes: &[ChangeEntry],
        comment: Option<&str>,
    ) -> Result<ChangeInfo>;
}
