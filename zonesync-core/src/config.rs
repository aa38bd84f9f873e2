//! Immutable run configuration.

use zonesync_provider::MAX_CHANGES_PER_BATCH;

use crate::error::{SyncError, SyncResult};
use crate::record_type::{lookup_record_type, RecordTypeSpec};

/// Default number of changes per batch, leaving headroom under the
/// destination's per-request ceiling.
pub const DEFAULT_BATCH_SIZE: usize = 98;

/// Default informational comment attached to each change batch.
pub const DEFAULT_COMMENT: &str = "Managed by zonesync";

/// Configuration for one sync run.
///
/// Built once by the driver and passed immutably into the pipeline;
/// there is no ambient or process-global option state.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Source name server, `host[:port]` (port defaults to 53).
    pub server: String,
    /// Domain to request a zone transfer for.
    pub domain: String,
    /// Record type to sync, one of the supported set.
    pub record_type: String,
    /// Destination hosted zone identifier.
    pub zone_id: String,
    /// Informational comment forwarded with each change batch.
    pub comment: String,
    /// Maximum changes per submitted batch.
    pub batch_size: usize,
}

impl SyncConfig {
    /// Create a configuration with the default record type (`A`),
    /// comment, and batch size.
    pub fn new(
        server: impl Into<String>,
        domain: impl Into<String>,
        zone_id: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            domain: domain.into(),
            record_type: "A".to_string(),
            zone_id: zone_id.into(),
            comment: DEFAULT_COMMENT.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Resolve the configured record type against the supported table.
    pub fn record_type_spec(&self) -> SyncResult<&'static RecordTypeSpec> {
        lookup_record_type(&self.record_type).ok_or_else(|| {
            SyncError::Configuration(format!(
                "unknown or unsupported record type: {}",
                self.record_type
            ))
        })
    }

    /// Check the configuration before any network work.
    pub fn validate(&self) -> SyncResult<()> {
        if self.server.trim().is_empty() {
            return Err(SyncError::Configuration(
                "no DNS server set to make the zone transfer request against".to_string(),
            ));
        }
        if self.domain.trim().is_empty() {
            return Err(SyncError::Configuration(
                "no domain set to request the zone transfer for".to_string(),
            ));
        }
        if self.zone_id.trim().is_empty() {
            return Err(SyncError::Configuration(
                "no hosted zone set to submit the records to".to_string(),
            ));
        }
        if self.batch_size == 0 || self.batch_size > MAX_CHANGES_PER_BATCH {
            return Err(SyncError::Configuration(format!(
                "batch size must be between 1 and {MAX_CHANGES_PER_BATCH}, got {}",
                self.batch_size
            )));
        }
        self.record_type_spec()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn valid_config() -> SyncConfig {
        SyncConfig::new("10.0.0.53", "example.com", "Z123")
    }

    #[test]
    fn defaults() {
        let config = valid_config();
        assert_eq!(config.record_type, "A");
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.comment, DEFAULT_COMMENT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_server_is_configuration_error() {
        let mut config = valid_config();
        config.server = String::new();
        assert!(matches!(
            config.validate(),
            Err(SyncError::Configuration(_))
        ));
    }

    #[test]
    fn empty_domain_is_configuration_error() {
        let mut config = valid_config();
        config.domain = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(SyncError::Configuration(_))
        ));
    }

    #[test]
    fn empty_zone_id_is_configuration_error() {
        let mut config = valid_config();
        config.zone_id = String::new();
        assert!(matches!(
            config.validate(),
            Err(SyncError::Configuration(_))
        ));
    }

    #[test]
    fn unsupported_record_type_is_configuration_error() {
        let mut config = valid_config();
        config.record_type = "SOA".to_string();
        assert!(matches!(
            config.validate(),
            Err(SyncError::Configuration(_))
        ));
    }

    #[test]
    fn batch_size_bounds() {
        let mut config = valid_config();
        config.batch_size = 0;
        assert!(config.validate().is_err());
        config.batch_size = MAX_CHANGES_PER_BATCH;
        assert!(config.validate().is_ok());
        config.batch_size = MAX_CHANGES_PER_BATCH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn record_type_spec_resolves() {
        let mut config = valid_config();
        config.record_type = "txt".to_string();
        let spec = config.record_type_spec().expect("TXT is supported");
        assert_eq!(spec.name, "TXT");
    }
}
