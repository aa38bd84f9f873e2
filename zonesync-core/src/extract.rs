//! Record extractor: walk a zone and yield records of one (class, type).

use crate::names::qualify;
use crate::record_type::RecordTypeSpec;
use crate::types::{Record, RecordSetKey, Zone};

/// Apex marker used for the zone origin in relativized owner names.
const APEX: &str = "@";

/// Lazily yield every record of the requested type from `zone`.
///
/// Nodes without a matching record set are skipped (absence is normal),
/// as is the zone apex, whose marker cannot be composed with the domain
/// suffix. Owner names are emitted fully qualified with a trailing dot;
/// the TTL is the record set's.
pub fn extract_records<'a>(
    zone: &'a Zone,
    domain: &'a str,
    spec: &RecordTypeSpec,
) -> impl Iterator<Item = Record> + 'a {
    let key = RecordSetKey {
        class_code: spec.class_code,
        type_code: spec.type_code,
    };

    zone.nodes()
        .filter(|(owner, _)| *owner != APEX)
        .filter_map(move |(owner, node)| node.record_set(key).map(|set| (owner, set)))
        .flat_map(move |(owner, set)| {
            let name = qualify(owner, domain);
            set.values.iter().map(move |value| Record {
                name: name.clone(),
                value: value.clone(),
                ttl: set.ttl,
            })
        })
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::record_type::lookup_record_type;

    const A_KEY: RecordSetKey = RecordSetKey {
        class_code: 1,
        type_code: 1,
    };
    const TXT_KEY: RecordSetKey = RecordSetKey {
        class_code: 1,
        type_code: 16,
    };

    fn a_spec() -> &'static RecordTypeSpec {
        lookup_record_type("A").expect("A is supported")
    }

    fn sample_zone() -> Zone {
        let mut zone = Zone::new();
        zone.insert_record("host1", A_KEY, 300, "10.0.0.1".to_string());
        zone.insert_record("host1", A_KEY, 300, "10.0.0.2".to_string());
        zone.insert_record("host2", A_KEY, 60, "10.0.0.3".to_string());
        zone.insert_record("host2", TXT_KEY, 120, "\"hello\"".to_string());
        zone.insert_record("@", A_KEY, 30, "10.0.0.254".to_string());
        zone
    }

    #[test]
    fn extracts_only_requested_type() {
        let zone = sample_zone();
        let records: Vec<Record> = extract_records(&zone, "example.com", a_spec()).collect();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| !r.value.contains("hello")));
    }

    #[test]
    fn names_are_fully_qualified() {
        let zone = sample_zone();
        let records: Vec<Record> = extract_records(&zone, "example.com", a_spec()).collect();
        assert_eq!(records[0].name, "host1.example.com.");
        assert_eq!(records[2].name, "host2.example.com.");
    }

    #[test]
    fn apex_is_skipped() {
        let zone = sample_zone();
        let records: Vec<Record> = extract_records(&zone, "example.com", a_spec()).collect();
        assert!(records.iter().all(|r| r.value != "10.0.0.254"));
    }

    #[test]
    fn ttl_comes_from_the_record_set() {
        let zone = sample_zone();
        let records: Vec<Record> = extract_records(&zone, "example.com", a_spec()).collect();
        let host2: Vec<&Record> = records
            .iter()
            .filter(|r| r.name == "host2.example.com.")
            .collect();
        assert_eq!(host2.len(), 1);
        assert_eq!(host2[0].ttl, 60);
    }

    #[test]
    fn zone_without_matching_type_yields_nothing() {
        let mut zone = Zone::new();
        zone.insert_record("host1", TXT_KEY, 120, "\"only txt\"".to_string());
        let records: Vec<Record> = extract_records(&zone, "example.com", a_spec()).collect();
        assert!(records.is_empty());
    }

    #[test]
    fn empty_zone_yields_nothing() {
        let zone = Zone::new();
        assert_eq!(extract_records(&zone, "example.com", a_spec()).count(), 0);
    }
}
