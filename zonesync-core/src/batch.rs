//! Change batch builder: map aggregated records to UPSERT operations and
//! partition them into size-bounded batches.

use zonesync_provider::{ChangeAction, ChangeEntry};

use crate::types::AggregatedRecord;

/// Map each aggregated record to one UPSERT change entry.
///
/// Order and values are carried over unchanged, so the change list is a
/// pure function of the aggregation output.
#[must_use]
pub fn build_changes(aggregated: Vec<AggregatedRecord>, record_type: &str) -> Vec<ChangeEntry> {
    aggregated
        .into_iter()
        .map(|record| ChangeEntry {
            action: ChangeAction::Upsert,
            name: record.name,
            record_type: record_type.to_string(),
            ttl: record.ttl,
            values: record.values,
        })
        .collect()
}

/// Partition changes into batches of at most `batch_size`.
///
/// The partition is deterministic, keeps the original order, and drops
/// nothing: concatenating the batches reproduces the input. Zero input
/// produces zero batches.
#[must_use]
pub fn partition_changes(changes: Vec<ChangeEntry>, batch_size: usize) -> Vec<Vec<ChangeEntry>> {
    if changes.is_empty() || batch_size == 0 {
        return Vec::new();
    }

    let mut batches = Vec::with_capacity(changes.len().div_ceil(batch_size));
    let mut current = Vec::with_capacity(batch_size.min(changes.len()));

    for change in changes {
        current.push(change);
        if current.len() == batch_size {
            batches.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        batches.push(current);
    }

    batches
}
