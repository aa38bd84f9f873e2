//! # zonesync-provider
//!
//! Client for a hosted-DNS change-batch API: submit ordered batches of
//! `UPSERT` change entries against a hosted zone.
//!
//! The API surface is the [`ChangeBatchApi`] trait; the shipped
//! implementation is [`HttpChangeBatchClient`], which talks JSON over
//! HTTPS with a bearer token. The pipeline in `zonesync-core` depends
//! only on the trait, so tests (and other destinations) can substitute
//! their own implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonesync_provider::{
//!     ChangeAction, ChangeBatchApi, ChangeEntry, HttpChangeBatchClient,
//! };
//!
//! # async fn example() -> zonesync_provider::Result<()> {
//! let client = HttpChangeBatchClient::new("https://dns.example.net/v1", "api-token")?;
//! let changes = vec![ChangeEntry {
//!     action: ChangeAction::Upsert,
//!     name: "host1.example.com.".to_string(),
//!     record_type: "A".to_string(),
//!     ttl: 300,
//!     values: vec!["10.0.0.1".to_string()],
//! }];
//! let info = client
//!     .submit_change_batch("Z123", &changes, Some("Managed by zonesync"))
//!     .await?;
//! println!("accepted as change {}", info.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! Nothing is retried internally: a failed submission is terminal, and
//! re-running the whole sync is safe because every change is an UPSERT.

mod client;
mod error;
mod http;
mod traits;
mod types;

pub use client::HttpChangeBatchClient;
pub use error::{ProviderError, Result};
pub use traits::ChangeBatchApi;
pub use types::{
    ChangeAction, ChangeEntry, ChangeInfo, ChangeStatus, MAX_CHANGES_PER_BATCH,
};
