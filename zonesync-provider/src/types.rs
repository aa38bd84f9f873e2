use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hard per-request ceiling the destination API enforces on change batches.
///
/// Batch builders should stay strictly below this; the client also guards
/// against it before issuing a request.
pub const MAX_CHANGES_PER_BATCH: usize = 100;

/// The action applied to a record set by a change entry.
///
/// Only `UPSERT` is used: it creates the record set if absent or replaces
/// it in full if present, which makes repeated submission idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Upsert,
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upsert => write!(f, "UPSERT"),
        }
    }
}

/// One change operation against a hosted zone.
///
/// Maps a fully-qualified owner name and record type to a complete set of
/// values plus a TTL. The destination replaces the whole record set, so
/// `values` must carry every value the name should end up with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Change action. Always [`ChangeAction::Upsert`] in this crate.
    pub action: ChangeAction,
    /// Fully-qualified owner name, with trailing dot.
    pub name: String,
    /// Record type, rendered uppercase (e.g. `"A"`, `"CNAME"`).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Time-to-live in seconds, applied to the whole record set.
    pub ttl: u32,
    /// All values for the record set, in submission order.
    pub values: Vec<String>,
}

/// Status of a submitted change batch as reported by the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// Accepted but not yet visible on all destination name servers.
    Pending,
    /// Fully applied.
    Applied,
}

/// Receipt returned by the destination for an accepted change batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeInfo {
    /// Destination-assigned change identifier. Logged, not otherwise tracked.
    pub id: String,
    /// Batch status at submission time.
    pub status: ChangeStatus,
    /// When the destination accepted the batch, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn change_entry_wire_shape() {
        let entry = ChangeEntry {
            action: ChangeAction::Upsert,
            name: "host1.example.com.".to_string(),
            record_type: "A".to_string(),
            ttl: 300,
            values: vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()],
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "UPSERT",
                "name": "host1.example.com.",
                "type": "A",
                "ttl": 300,
                "values": ["10.0.0.1", "10.0.0.2"],
            })
        );
    }

    #[test]
    fn change_entry_round_trip() {
        let entry = ChangeEntry {
            action: ChangeAction::Upsert,
            name: "mail.example.com.".to_string(),
            record_type: "MX".to_string(),
            ttl: 3600,
            values: vec!["10 mx1.example.com.".to_string()],
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ChangeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn change_info_deserializes() {
        let json = r#"{"id":"chg-42","status":"pending","submitted_at":"2024-05-01T12:00:00Z"}"#;
        let info: ChangeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, "chg-42");
        assert_eq!(info.status, ChangeStatus::Pending);
        assert!(info.submitted_at.is_some());
    }

    #[test]
    fn change_info_without_timestamp() {
        let json = r#"{"id":"chg-1","status":"applied"}"#;
        let info: ChangeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.status, ChangeStatus::Applied);
        assert!(info.submitted_at.is_none());
    }

    #[test]
    fn action_displays_uppercase() {
        assert_eq!(ChangeAction::Upsert.to_string(), "UPSERT");
    }
}
