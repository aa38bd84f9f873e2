//! `zonesync` command-line driver.

use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use zonesync_core::{pipeline, AxfrClient, SyncConfig, SyncError};
use zonesync_provider::HttpChangeBatchClient;

/// Sync DNS records from an authoritative name server into a hosted zone.
///
/// Pulls the zone with a full transfer (AXFR), extracts the records of
/// one type, and submits them to the destination API as idempotent
/// UPSERT change batches.
#[derive(Parser, Debug)]
#[command(name = "zonesync", version, about)]
struct Args {
    /// Source name server, host[:port] (port defaults to 53)
    #[arg(short, long)]
    server: String,

    /// Domain to request the zone transfer for
    #[arg(short, long)]
    domain: String,

    /// Record type to sync
    #[arg(short = 't', long, default_value = "A")]
    record_type: String,

    /// Destination hosted zone id
    #[arg(short, long)]
    zone_id: String,

    /// Comment attached to each change batch
    #[arg(short, long, default_value = zonesync_core::DEFAULT_COMMENT)]
    comment: String,

    /// Maximum changes per submitted batch
    #[arg(long, default_value_t = zonesync_core::DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Destination API base URL
    #[arg(long, env = "ZONESYNC_API_ENDPOINT")]
    endpoint: String,

    /// Destination API bearer token
    #[arg(long, env = "ZONESYNC_API_TOKEN", hide_env_values = true)]
    api_token: String,
}

/// Map an error to the process exit code.
fn exit_code(error: &SyncError) -> u8 {
    match error {
        SyncError::Configuration(_) => 2,
        SyncError::Transfer { .. } => 3,
        SyncError::EmptyZone { .. } | SyncError::NoMatchingRecords { .. } => 4,
        SyncError::Submission(_) => 5,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = SyncConfig {
        server: args.server,
        domain: args.domain,
        record_type: args.record_type,
        zone_id: args.zone_id,
        comment: args.comment,
        batch_size: args.batch_size,
    };

    let source = AxfrClient::new(config.server.clone());
    let target = match HttpChangeBatchClient::new(&args.endpoint, &args.api_token) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build the destination API client: {e}");
            return ExitCode::from(2);
        }
    };

    match pipeline::run(&config, &source, &target).await {
        Ok(report) => {
            info!(
                "Sync complete: {} records aggregated into {} changes, {} batch(es) submitted",
                report.records_found, report.changes, report.batches_submitted
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_expected() {
                warn!("{e}");
            } else {
                error!("{e}");
            }
            ExitCode::from(exit_code(&e))
        }
    }
}
