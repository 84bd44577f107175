// Source trait for fetching the remote readings snapshot
use crate::domain::payload::RemotePayload;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to reach {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with status {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("failed to decode payload from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch one snapshot of latest readings plus history
    async fn fetch_snapshot(&self) -> Result<RemotePayload, SourceError>;
}
