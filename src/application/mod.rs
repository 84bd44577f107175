// Application layer - Polling, normalization and dashboard composition
pub mod dashboard_service;
pub mod dashboard_state;
pub mod normalizer;
pub mod polling_scheduler;
pub mod series_composer;
pub mod snapshot_source;
