// HTTP request handlers
use crate::application::dashboard_state::PollStats;
use crate::domain::dashboard::Dashboard;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    poll: PollStats,
}

/// Health check endpoint
///
/// Reports `stale` while the most recent poll has failed; the dashboard
/// keeps serving the last good readings in that case.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let poll = state.dashboard_service.state().poll_stats();
    let status = if poll.is_stale() { "stale" } else { "ok" };
    Json(HealthResponse { status, poll })
}

/// Current dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<Dashboard> {
    Json(state.dashboard_service.get_dashboard())
}

/// Push a dashboard now and again after every view model replacement
pub async fn stream_dashboard(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let service = state.dashboard_service.clone();
    let mut rx = service.state().subscribe();

    let stream = async_stream::stream! {
        loop {
            let view_model = rx.borrow_and_update().clone();
            match Event::default().event("dashboard").json_data(service.build(view_model)) {
                Ok(event) => yield Ok::<Event, Infallible>(event),
                Err(e) => tracing::warn!(error = %e, "Failed to encode dashboard event"),
            }

            if rx.changed().await.is_err() {
                break;
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
