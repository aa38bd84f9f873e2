//! Sync pipeline: transfer, extract, aggregate, batch, submit.

use zonesync_provider::ChangeBatchApi;

use crate::aggregate::aggregate_records;
use crate::batch::{build_changes, partition_changes};
use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::extract::extract_records;
use crate::transfer::ZoneSource;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Individual source records of the requested type.
    pub records_found: usize,
    /// UPSERT changes produced after aggregation.
    pub changes: usize,
    /// Batches accepted by the destination.
    pub batches_submitted: usize,
}

/// Run one full sync: pull the zone from `source`, derive the change
/// list for the configured record type, and submit it to `target` in
/// batches of at most `config.batch_size`.
///
/// Batches go out sequentially in order; the first rejected batch aborts
/// the run and later batches are never attempted. Already-accepted
/// batches are not rolled back, which is safe to re-run since every
/// change is an idempotent UPSERT.
pub async fn run(
    config: &SyncConfig,
    source: &dyn ZoneSource,
    target: &dyn ChangeBatchApi,
) -> SyncResult<SyncReport> {
    config.validate()?;
    let spec = config.record_type_spec()?;

    log::info!(
        "Transferring zone '{}' from {}",
        config.domain,
        config.server
    );
    let zone = source.transfer(&config.domain).await?;
    if zone.is_empty() {
        return Err(SyncError::EmptyZone {
            domain: config.domain.clone(),
        });
    }
    log::info!("Transfer complete: {} names in zone", zone.len());

    let mut records_found = 0usize;
    let records = extract_records(&zone, &config.domain, spec).inspect(|_| records_found += 1);
    let aggregated = aggregate_records(records);
    if aggregated.is_empty() {
        return Err(SyncError::NoMatchingRecords {
            domain: config.domain.clone(),
            record_type: spec.name.to_string(),
        });
    }
    log::info!(
        "Found {} {} records across {} names",
        records_found,
        spec.name,
        aggregated.len()
    );

    let changes = build_changes(aggregated, spec.name);
    let change_count = changes.len();
    let batches = partition_changes(changes, config.batch_size);
    let total = batches.len();

    for (i, batch) in batches.iter().enumerate() {
        log::info!(
            "Submitting batch {}/{} ({} changes)",
            i + 1,
            total,
            batch.len()
        );
        let info = target
            .submit_change_batch(&config.zone_id, batch, Some(&config.comment))
            .await?;
        log::info!("Batch {} accepted with change id {}", i + 1, info.id);
    }

    Ok(SyncReport {
        records_found,
        changes: change_count,
        batches_submitted: total,
    })
}
