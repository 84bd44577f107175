// HTTP snapshot source - Polls the sensor server's readings endpoint
use crate::application::snapshot_source::{SnapshotSource, SourceError};
use crate::domain::payload::RemotePayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSnapshotSource {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.trim().to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, source: reqwest::Error) -> SourceError {
        SourceError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch_snapshot(&self) -> Result<RemotePayload, SourceError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        let payload = serde_json::from_slice::<RemotePayload>(&body).map_err(|source| {
            SourceError::Decode {
                endpoint: self.endpoint.clone(),
                source,
            }
        })?;

        tracing::trace!(points = payload.timestamps.len(), "Fetched readings snapshot");
        Ok(payload)
    }
}
