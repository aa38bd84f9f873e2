use serde::{Deserialize, Serialize};

/// Error type for destination change-batch API operations.
///
/// All variants are serializable for structured error reporting. None of
/// them is retried internally: a failed submission is terminal for the
/// sync run, and re-running the whole sync is the safe recovery path
/// because every change is an UPSERT.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, 5xx from an intermediary, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The provided API token is invalid or expired.
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated token lacks permission for the hosted zone.
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The hosted zone identifier does not exist at the destination.
    ZoneNotFound {
        /// The hosted zone id that was not found.
        zone_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The destination rejected one of the change entries.
    InvalidChange {
        /// Owner name of the rejected change, if the API reported one.
        record_name: Option<String>,
        /// Description of what the destination objected to.
        detail: String,
    },

    /// The change batch exceeds the destination's per-request limit.
    BatchTooLarge {
        /// Number of changes in the rejected batch.
        size: usize,
        /// The destination's per-request ceiling.
        limit: usize,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the destination's API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the destination API.
    Unknown {
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether this is expected behavior (bad input, missing zone, etc.),
    /// used for log-level classification.
    ///
    /// `true` should log at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::ZoneNotFound { .. }
                | Self::InvalidChange { .. }
                | Self::BatchTooLarge { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Permission denied: {msg}")
                } else {
                    write!(f, "Permission denied")
                }
            }
            Self::ZoneNotFound {
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Hosted zone '{zone_id}' not found: {msg}")
                } else {
                    write!(f, "Hosted zone '{zone_id}' not found")
                }
            }
            Self::InvalidChange {
                record_name,
                detail,
            } => {
                if let Some(name) = record_name {
                    write!(f, "Change for '{name}' rejected: {detail}")
                } else {
                    write!(f, "Change rejected: {detail}")
                }
            }
            Self::BatchTooLarge { size, limit } => {
                write!(f, "Change batch of {size} exceeds the limit of {limit}")
            }
            Self::RateLimited {
                retry_after,
                raw_message: _,
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
            Self::Unknown { raw_message, .. } => {
                write!(f, "{raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
