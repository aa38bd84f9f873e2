//! Data model for one sync run.
//!
//! A [`Zone`] is the transient result of one transfer: owner names
//! (relative to the origin, `"@"` for the apex) mapped to the record
//! sets that live under them. It is built once by the transfer client,
//! read once by the extractor, then discarded. Nothing here survives
//! across runs; idempotence comes from the destination's UPSERT
//! semantics, not from local state.

use std::collections::BTreeMap;

/// Key of a record set inside a node: IANA class and type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordSetKey {
    /// IANA class code (1 for `IN`).
    pub class_code: u16,
    /// IANA record type code.
    pub type_code: u16,
}

/// The records sharing one owner name, class, and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecordSet {
    /// Set-level time-to-live in seconds.
    pub ttl: u32,
    /// Rendered record values, in transfer order.
    pub values: Vec<String>,
}

/// One owner name's record sets, keyed by (class, type).
///
/// Read-only once the transfer has produced it.
#[derive(Debug, Clone, Default)]
pub struct ZoneNode {
    sets: BTreeMap<RecordSetKey, ZoneRecordSet>,
}

impl ZoneNode {
    /// The record set for the given (class, type), if the node has one.
    #[must_use]
    pub fn record_set(&self, key: RecordSetKey) -> Option<&ZoneRecordSet> {
        self.sets.get(&key)
    }

    fn push(&mut self, key: RecordSetKey, ttl: u32, value: String) {
        let set = self.sets.entry(key).or_insert_with(|| ZoneRecordSet {
            ttl,
            values: Vec::new(),
        });
        // Per-record TTLs within one set are a source anomaly; the last
        // one observed wins, matching the set-level TTL semantics.
        set.ttl = ttl;
        set.values.push(value);
    }
}

/// Transient result of one zone transfer.
///
/// Owner names are stored relative to the origin and ordered, so two
/// transfers of an unchanged zone walk in the same order and the
/// pipeline output is reproducible.
#[derive(Debug, Clone, Default)]
pub struct Zone {
    nodes: BTreeMap<String, ZoneNode>,
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record under `owner` (origin-relative name).
    pub fn insert_record(&mut self, owner: &str, key: RecordSetKey, ttl: u32, value: String) {
        self.nodes
            .entry(owner.to_string())
            .or_default()
            .push(key, ttl, value);
    }

    /// Whether the transfer yielded no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of owner names in the zone.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate `(owner, node)` pairs in name order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &ZoneNode)> {
        self.nodes.iter().map(|(name, node)| (name.as_str(), node))
    }
}

/// One extracted record: fully-qualified owner name, rendered value, and
/// the TTL of the record set it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Fully-qualified owner name with trailing dot.
    pub name: String,
    /// Rendered record value.
    pub value: String,
    /// Record-set TTL in seconds.
    pub ttl: u32,
}

/// All values observed for one fully-qualified owner name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRecord {
    /// Fully-qualified owner name with trailing dot.
    pub name: String,
    /// TTL for the composite record set (last observed wins).
    pub ttl: u32,
    /// Distinct record values in first-seen order.
    pub values: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    const A_KEY: RecordSetKey = RecordSetKey {
        class_code: 1,
        type_code: 1,
    };

    #[test]
    fn empty_zone() {
        let zone = Zone::new();
        assert!(zone.is_empty());
        assert_eq!(zone.len(), 0);
    }

    #[test]
    fn insert_groups_by_owner_and_key() {
        let mut zone = Zone::new();
        zone.insert_record("host1", A_KEY, 300, "10.0.0.1".to_string());
        zone.insert_record("host1", A_KEY, 300, "10.0.0.2".to_string());
        zone.insert_record("host2", A_KEY, 60, "10.0.0.3".to_string());

        assert_eq!(zone.len(), 2);
        let (_, node) = zone.nodes().next().expect("zone has nodes");
        let set = node.record_set(A_KEY).expect("host1 has an A set");
        assert_eq!(set.values, vec!["10.0.0.1", "10.0.0.2"]);
        assert_eq!(set.ttl, 300);
    }

    #[test]
    fn absent_record_set_is_none() {
        let mut zone = Zone::new();
        zone.insert_record("host1", A_KEY, 300, "10.0.0.1".to_string());

        let aaaa = RecordSetKey {
            class_code: 1,
            type_code: 28,
        };
        let (_, node) = zone.nodes().next().expect("zone has nodes");
        assert!(node.record_set(aaaa).is_none());
    }

    #[test]
    fn nodes_iterate_in_name_order() {
        let mut zone = Zone::new();
        zone.insert_record("zeta", A_KEY, 60, "10.0.0.1".to_string());
        zone.insert_record("alpha", A_KEY, 60, "10.0.0.2".to_string());

        let names: Vec<&str> = zone.nodes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
