//! `SpecTransport` over a Google Cloud Storage bucket (feature `gcp`).
//!
//! This path is single-writer: it never computes `time`/`masters`, so a
//! document published here has no replication participant — callers must
//! not expect GCS-origin documents to gossip (§9 Open Questions).

use async_trait::async_trait;
use gcp_auth::TokenProvider;
use md5::{Digest, Md5};
use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::transport::SpecTransport;

const GCS_SCOPE: &str = "https://www.googleapis.com/auth/devstorage.read_write";

/// Publishes/fetches documents as objects in a single GCS bucket.
pub struct GcsBlobTransport {
    bucket: String,
    provider: Arc<dyn TokenProvider>,
    client: reqwest::Client,
}

impl GcsBlobTransport {
    /// Build a transport for `bucket`, loading application-default or
    /// service-account credentials (when `credentials_file` is given).
    pub async fn new(bucket: String, credentials_file: Option<&str>) -> Result<Self> {
        let provider: Arc<dyn TokenProvider> = match credentials_file {
            Some(path) => gcp_auth::CustomServiceAccount::from_file(path)
                .map(Arc::new)
                .map_err(|e| Error::RequestFailed(e.to_string()))? as Arc<dyn TokenProvider>,
            None => gcp_auth::provider()
                .await
                .map_err(|e| Error::RequestFailed(e.to_string()))?,
        };
        Ok(Self {
            bucket,
            provider,
            client: reqwest::Client::new(),
        })
    }

    async fn bearer_token(&self) -> Result<String> {
        let token = self
            .provider
            .token(&[GCS_SCOPE])
            .await
            .map_err(|e| Error::RequestFailed(e.to_string()))?;
        Ok(token.as_str().to_string())
    }
}

#[async_trait]
impl SpecTransport for GcsBlobTransport {
    async fn publish(&self, name: &str, bytes: &str) -> Result<()> {
        let mut hasher = Md5::new();
        hasher.update(bytes.as_bytes());
        let hash: String = hasher.finalize().iter().map(|b| format!("{b:02x}")).collect();
        let body = format!("{bytes}\nhash: {hash}");

        let token = self.bearer_token().await?;
        let url = format!(
            "https://storage.googleapis.com/upload/storage/v1/b/{}/o?uploadType=media&name={name}",
            self.bucket
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::DeployFailed(e.to_string()))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::DeployFailed(body));
        }
        Ok(())
    }

    async fn fetch_spec(&self, name: &str) -> Result<String> {
        let token = self.bearer_token().await?;
        let url = format!(
            "https://storage.googleapis.com/storage/v1/b/{}/o/{name}?alt=media",
            self.bucket
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::FileNotExist(name.to_string()));
        }
        response
            .text()
            .await
            .map_err(|e| Error::RequestFailed(e.to_string()))
    }
}
