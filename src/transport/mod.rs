//! Specification transport: publish/fetch abstraction over the local-master
//! HTTP path and the optional GCS blob path.

mod local;

#[cfg(feature = "gcp")]
mod gcs;

pub use local::LocalMasterTransport;

#[cfg(feature = "gcp")]
pub use gcs::GcsBlobTransport;

use async_trait::async_trait;

use crate::errors::Result;

/// Publishes and fetches named specification documents.
///
/// The deploy client and the node's initial fetch both select an
/// implementation via `master.driver` (or a `gs://`-prefixed peer
/// hostname), keeping the local-file and cloud-blob code paths out of the
/// replication and reconciliation logic.
#[async_trait]
pub trait SpecTransport: Send + Sync {
    /// Publish `bytes` under `name`.
    async fn publish(&self, name: &str, bytes: &str) -> Result<()>;
    /// Fetch the current bytes stored under `name`.
    async fn fetch_spec(&self, name: &str) -> Result<String>;
}
