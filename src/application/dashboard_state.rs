// Shared dashboard state - Single-writer cell for the current view model
use crate::domain::view_model::ViewModel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PollStats {
    pub successes: u64,
    pub failures: u64,
    pub last_success_at: Option<DateTime<Utc>>,
    pub last_failure_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

impl PollStats {
    /// True when the most recent poll outcome was a failure.
    pub fn is_stale(&self) -> bool {
        match (self.last_success_at, self.last_failure_at) {
            (Some(ok), Some(failed)) => failed > ok,
            (None, Some(_)) => true,
            _ => false,
        }
    }
}

/// Handle to the current view model.
///
/// Cloning is cheap and every clone observes the same value. Writes replace
/// the whole view model at once, so readers never see a half-applied poll.
#[derive(Clone)]
pub struct DashboardState {
    view_model: Arc<watch::Sender<ViewModel>>,
    stats: Arc<watch::Sender<PollStats>>,
}

impl DashboardState {
    pub fn new(initial: ViewModel) -> Self {
        let (view_model, _) = watch::channel(initial);
        let (stats, _) = watch::channel(PollStats::default());
        Self {
            view_model: Arc::new(view_model),
            stats: Arc::new(stats),
        }
    }

    pub fn snapshot(&self) -> ViewModel {
        self.view_model.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.view_model.subscribe()
    }

    /// Replace the view model with one computed from the current value.
    pub fn replace_with<F>(&self, next: F)
    where
        F: FnOnce(&ViewModel) -> ViewModel,
    {
        self.view_model.send_modify(|current| {
            let replacement = next(current);
            *current = replacement;
        });
    }

    pub fn poll_stats(&self) -> PollStats {
        self.stats.borrow().clone()
    }

    pub fn record_success(&self) {
        self.stats.send_modify(|stats| {
            stats.successes += 1;
            stats.last_success_at = Some(Utc::now());
        });
    }

    pub fn record_failure(&self, error: &dyn std::error::Error) {
        let message = error.to_string();
        self.stats.send_modify(|stats| {
            stats.failures += 1;
            stats.last_failure_at = Some(Utc::now());
            stats.last_error = Some(message);
        });
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(ViewModel::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_with_sees_previous_value() {
        let state = DashboardState::new(ViewModel::initial(42));
        state.replace_with(|previous| ViewModel {
            aqi: previous.aqi + 1,
            last_updated: "12:00:01".to_string(),
            ..previous.clone()
        });

        let vm = state.snapshot();
        assert_eq!(vm.aqi, 43);
        assert_eq!(vm.last_updated, "12:00:01");
    }

    #[test]
    fn test_subscribers_are_notified() {
        let state = DashboardState::default();
        let mut rx = state.subscribe();
        assert!(!rx.has_changed().unwrap());

        state.replace_with(|previous| ViewModel {
            water_level: 10.0,
            ..previous.clone()
        });

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().water_level, 10.0);
    }

    #[test]
    fn test_poll_stats_staleness() {
        let state = DashboardState::default();
        assert!(!state.poll_stats().is_stale());

        state.record_failure(&std::io::Error::other("connection refused"));
        let stats = state.poll_stats();
        assert!(stats.is_stale());
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.last_error.as_deref(), Some("connection refused"));

        state.record_success();
        assert!(!state.poll_stats().is_stale());
    }
}
