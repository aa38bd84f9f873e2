//! # zonesync-core
//!
//! One-way sync of DNS records from an authoritative name server into a
//! hosted zone: pull the zone with a full transfer (AXFR), extract the
//! records of one type, aggregate them by owner name, and submit the
//! resulting `UPSERT` change list in size-bounded batches.
//!
//! The pipeline entry point is [`pipeline::run`]. It depends on two
//! seams: [`ZoneSource`] for the source side (shipped: [`AxfrClient`])
//! and [`zonesync_provider::ChangeBatchApi`] for the destination side.
//!
//! A run is stateless. Re-running against an unchanged zone produces a
//! byte-identical change list, and since every change is an UPSERT the
//! destination converges to the same state either way.

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod names;
pub mod pipeline;
pub mod record_type;
pub mod transfer;
pub mod types;

pub use config::{SyncConfig, DEFAULT_BATCH_SIZE, DEFAULT_COMMENT};
pub use error::{SyncError, SyncResult};
pub use pipeline::{run, SyncReport};
pub use record_type::{lookup_record_type, RecordTypeSpec};
pub use transfer::{AxfrClient, ZoneSource};
pub use types::{AggregatedRecord, Record, RecordSetKey, Zone, ZoneNode, ZoneRecordSet};
