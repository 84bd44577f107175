// Presentation layer - HTTP surface for renderers
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, stream_dashboard};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/dashboard/stream", get(stream_dashboard))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::dashboard_state::DashboardState;
    use crate::domain::view_model::ViewModel;
    use serde_json::Value;
    use std::time::Duration;

    async fn serve(state: DashboardState) -> String {
        let app_state = Arc::new(AppState {
            dashboard_service: DashboardService::new(state, "Test Dashboard".into()),
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(app_state)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Read the next server-sent event, skipping keep-alive comments.
    async fn next_event(response: &mut reqwest::Response, buffer: &mut String) -> (String, Value) {
        loop {
            if let Some(end) = buffer.find("\n\n") {
                let frame: String = buffer.drain(..end + 2).collect();
                let mut name = String::new();
                let mut data = None;
                for line in frame.lines() {
                    if let Some(value) = line.strip_prefix("event:") {
                        name = value.trim().to_string();
                    } else if let Some(value) = line.strip_prefix("data:") {
                        data = Some(serde_json::from_str(value.trim()).unwrap());
                    }
                }
                if let Some(data) = data {
                    return (name, data);
                }
                continue;
            }

            let chunk = tokio::time::timeout(Duration::from_secs(5), response.chunk())
                .await
                .expect("timed out waiting for an event")
                .unwrap()
                .expect("stream ended");
            buffer.push_str(std::str::from_utf8(&chunk).unwrap());
        }
    }

    #[tokio::test]
    async fn test_stream_pushes_dashboard_on_every_replacement() {
        let state = DashboardState::default();
        let base = serve(state.clone()).await;

        let mut response = reqwest::get(format!("{}/api/dashboard/stream", base))
            .await
            .unwrap();
        assert!(response.status().is_success());
        let mut buffer = String::new();

        let (name, first) = next_event(&mut response, &mut buffer).await;
        assert_eq!(name, "dashboard");
        assert_eq!(first["view_model"]["last_updated"], "-");

        state.replace_with(|previous| ViewModel {
            water_level: 77.5,
            last_updated: "10:30:00".into(),
            ..previous.clone()
        });

        let (name, second) = next_event(&mut response, &mut buffer).await;
        assert_eq!(name, "dashboard");
        assert_eq!(second["view_model"]["water_level"], 77.5);
        assert_eq!(second["view_model"]["last_updated"], "10:30:00");
    }

    #[tokio::test]
    async fn test_dashboard_endpoint() {
        let state = DashboardState::default();
        state.replace_with(|previous| ViewModel {
            water_level: 42.5,
            aqi: 160,
            last_updated: "09:15:00".into(),
            ..previous.clone()
        });
        let base = serve(state).await;

        let body: Value = reqwest::get(format!("{}/api/dashboard", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["title"], "Test Dashboard");
        assert_eq!(body["view_model"]["water_level"], 42.5);
        assert_eq!(body["view_model"]["last_updated"], "09:15:00");
        assert_eq!(body["aqi"]["tier"], "unhealthy");
        assert_eq!(body["aqi"]["label"], "Unhealthy");
        assert!(body["chart"].get("aqi").is_none());
    }

    #[tokio::test]
    async fn test_health_reports_stale_after_failure() {
        let state = DashboardState::default();
        let base = serve(state.clone()).await;

        let body: Value = reqwest::get(format!("{}/healthz", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");

        state.record_failure(&std::io::Error::other("timed out"));
        let body: Value = reqwest::get(format!("{}/healthz", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "stale");
        assert_eq!(body["poll"]["failures"], 1);
        assert_eq!(body["poll"]["last_error"], "timed out");
    }
}
