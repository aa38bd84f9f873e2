//! Record aggregator: merge records sharing an owner name into one
//! composite entry.

use std::collections::HashMap;

use crate::types::{AggregatedRecord, Record};

/// Aggregate a record sequence by fully-qualified owner name.
///
/// Values accumulate in first-seen order under their name, and names
/// come out in first-seen order. If a name reappears with a different
/// TTL the later TTL overwrites the stored one (last-write-wins; a
/// source anomaly rather than a well-formed zone, but preserved rather
/// than silently corrected).
pub fn aggregate_records(records: impl Iterator<Item = Record>) -> Vec<AggregatedRecord> {
    let mut aggregated: Vec<AggregatedRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.name) {
            Some(&i) => {
                aggregated[i].values.push(record.value);
                aggregated[i].ttl = record.ttl;
            }
            None => {
                index.insert(record.name.clone(), aggregated.len());
                aggregated.push(AggregatedRecord {
                    name: record.name,
                    ttl: record.ttl,
                    values: vec![record.value],
                });
            }
        }
    }

    aggregated
}
