//! `SpecTransport` over the local-master HTTP surface (§4.C).

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::transport::SpecTransport;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Talks to one or more master HTTP endpoints.
///
/// `publish` always targets `peers[0]` (the single master a deploy or node
/// resolved to); `fetch_spec` tries every peer in order, stopping at the
/// first success, mirroring the master/node fetch pattern.
#[derive(Debug, Clone)]
pub struct LocalMasterTransport {
    peers: Vec<String>,
    client: reqwest::Client,
}

impl LocalMasterTransport {
    /// Build a transport over `peers` (`host:port` addresses).
    pub fn new(peers: Vec<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client builds");
        Self { peers, client }
    }
}

#[async_trait]
impl SpecTransport for LocalMasterTransport {
    async fn publish(&self, name: &str, bytes: &str) -> Result<()> {
        let target = self
            .peers
            .first()
            .ok_or_else(|| Error::RequestFailed("no master peer configured".to_string()))?;
        let url = format!("http://{target}/{name}");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "text/yml")
            .body(bytes.to_string())
            .send()
            .await
            .map_err(|e| Error::DeployFailed(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::DeployFailed(body));
        }
        Ok(())
    }

    async fn fetch_spec(&self, name: &str) -> Result<String> {
        for peer in &self.peers {
            let url = format!("http://{peer}/{name}");
            let Ok(response) = self.client.get(&url).send().await else {
                continue;
            };
            if response.status() != reqwest::StatusCode::OK {
                continue;
            }
            if let Ok(body) = response.text().await {
                debug!(peer, name, "fetched document");
                return Ok(body);
            }
        }
        Err(Error::CannotContactMaster)
    }
}
