// Polling scheduler - Periodic fetch-and-normalize cycles
use crate::application::dashboard_state::DashboardState;
use crate::application::normalizer::Normalizer;
use crate::application::snapshot_source::{SnapshotSource, SourceError};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

/// What to do when a tick fires while an earlier fetch is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Start another fetch anyway. Completions apply in arrival order, so a
    /// slow response can overwrite a newer one.
    #[default]
    Overlap,
    /// Skip the tick until the in-flight fetch has finished.
    SkipIfBusy,
}

#[derive(Clone)]
pub struct PollingScheduler {
    source: Arc<dyn SnapshotSource>,
    state: DashboardState,
    normalizer: Normalizer,
    interval: Duration,
    overlap: OverlapPolicy,
}

impl PollingScheduler {
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        state: DashboardState,
        normalizer: Normalizer,
        interval: Duration,
        overlap: OverlapPolicy,
    ) -> Self {
        Self {
            source,
            state,
            normalizer,
            interval,
            overlap,
        }
    }

    /// Run a single poll cycle.
    ///
    /// On failure the view model is left exactly as it was.
    pub async fn poll_once(&self) -> Result<(), SourceError> {
        match self.source.fetch_snapshot().await {
            Ok(raw) => {
                let normalizer = self.normalizer;
                let first = !self.state.snapshot().has_updated();
                self.state
                    .replace_with(|previous| normalizer.normalize(raw, previous));
                self.state.record_success();

                let current = self.state.snapshot();
                if first {
                    tracing::info!(last_updated = %current.last_updated, "First readings received");
                }
                tracing::debug!(
                    aqi = current.aqi,
                    history = current.history.len(),
                    "Poll succeeded"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Poll failed, keeping previous readings");
                self.state.record_failure(&e);
                Err(e)
            }
        }
    }

    /// Spawn the polling loop. The first fetch happens immediately.
    ///
    /// Polling stops when the returned handle is dropped or shut down.
    pub fn start(self) -> SchedulerHandle {
        tracing::info!(
            interval_ms = self.interval.as_millis() as u64,
            overlap = ?self.overlap,
            "Starting polling scheduler"
        );
        SchedulerHandle {
            task: Some(tokio::spawn(self.run())),
        }
    }

    async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Owned by this task: aborting the task aborts every fetch in flight.
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.overlap == OverlapPolicy::SkipIfBusy && !in_flight.is_empty() {
                        tracing::debug!("Previous poll still running, skipping tick");
                    } else {
                        let cycle = self.clone();
                        in_flight.spawn(async move {
                            // Failures are already logged and recorded by poll_once
                            let _ = cycle.poll_once().await;
                        });
                    }
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = joined {
                        if e.is_panic() {
                            tracing::error!(error = %e, "Poll task panicked");
                        }
                    }
                }
            }
        }
    }
}

/// Owns the running polling loop.
pub struct SchedulerHandle {
    task: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Stop polling and wait for the loop to wind down.
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            tracing::info!("Polling scheduler stopped");
        }
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
