//! Unified error type for the sync pipeline.

use thiserror::Error;

// Re-export library error type
pub use zonesync_provider::ProviderError;

/// Pipeline error taxonomy.
///
/// Every variant is terminal for the run: nothing is retried internally.
/// Configuration and empty-result errors are raised before any
/// destination API call; a submission error aborts all further batches.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Missing or invalid run configuration (server, domain, zone id,
    /// record type, batch size).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The zone transfer failed: network error, protocol error, or the
    /// server refused the request.
    #[error("Zone transfer from '{server}' failed: {detail}")]
    Transfer {
        /// Source name server address.
        server: String,
        /// Failure detail.
        detail: String,
    },

    /// The transfer succeeded but returned no nodes at all. Usually the
    /// source is misconfigured or AXFR is not enabled for the client.
    #[error("Zone transfer for '{domain}' produced no data; is AXFR enabled on the source server?")]
    EmptyZone {
        /// The transferred domain.
        domain: String,
    },

    /// The zone has nodes, but none carry records of the requested type.
    #[error("No {record_type} records found in zone '{domain}'")]
    NoMatchingRecords {
        /// The transferred domain.
        domain: String,
        /// The requested record type.
        record_type: String,
    },

    /// The destination API rejected or failed to process a change batch.
    #[error("Batch submission failed: {0}")]
    Submission(#[from] ProviderError),
}

impl SyncError {
    /// Whether this is expected behavior (bad input, empty source, etc.),
    /// used for log-level classification.
    ///
    /// Level `warn` should be used when returning `true` and level
    /// `error` when returning `false`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration(_) | Self::EmptyZone { .. } | Self::NoMatchingRecords { .. } => {
                true
            }
            Self::Submission(e) => e.is_expected(),
            Self::Transfer { .. } => false,
        }
    }
}

/// Pipeline Result type alias.
pub type SyncResult<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_configuration() {
        let e = SyncError::Configuration("no server set".to_string());
        assert_eq!(e.to_string(), "Configuration error: no server set");
    }

    #[test]
    fn display_transfer() {
        let e = SyncError::Transfer {
            server: "10.0.0.53".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Zone transfer from '10.0.0.53' failed: connection refused"
        );
    }

    #[test]
    fn display_no_matching_records() {
        let e = SyncError::NoMatchingRecords {
            domain: "example.com".to_string(),
            record_type: "AAAA".to_string(),
        };
        assert_eq!(e.to_string(), "No AAAA records found in zone 'example.com'");
    }

    #[test]
    fn expected_classification() {
        assert!(SyncError::Configuration("x".into()).is_expected());
        assert!(SyncError::EmptyZone {
            domain: "example.com".into(),
        }
        .is_expected());
        assert!(!SyncError::Transfer {
            server: "s".into(),
            detail: "d".into(),
        }
        .is_expected());
    }

    #[test]
    fn submission_classification_follows_provider() {
        let expected = SyncError::Submission(ProviderError::ZoneNotFound {
            zone_id: "Z1".into(),
            raw_message: None,
        });
        assert!(expected.is_expected());

        let unexpected = SyncError::Submission(ProviderError::NetworkError {
            detail: "down".into(),
        });
        assert!(!unexpected.is_expected());
    }
}
