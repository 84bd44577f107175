use crate::application::polling_scheduler::OverlapPolicy;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub source: SourceSettings,
    pub polling: PollingSettings,
    pub server: ServerSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub endpoint: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingSettings {
    pub interval_ms: u64,
    pub overlap: OverlapPolicy,
    pub retain_aqi_on_zero: bool,
    pub initial_aqi: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub title: String,
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl PollingSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl AppConfig {
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  source.endpoint             : {}", self.source.endpoint);
        tracing::info!("  source.timeout_ms           : {}", self.source.timeout_ms);
        tracing::info!("  polling.interval_ms         : {}", self.polling.interval_ms);
        tracing::info!("  polling.overlap             : {:?}", self.polling.overlap);
        tracing::info!("  polling.retain_aqi_on_zero  : {}", self.polling.retain_aqi_on_zero);
        tracing::info!("  server.bind                 : {}", self.server.bind);
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from(DEFAULT_CONFIG_PATH)
}

/// Defaults, then the optional file at `path`, then `DASHBOARD__*` environment
/// variables (e.g. `DASHBOARD__SOURCE__ENDPOINT`).
pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("source.endpoint", "http://localhost:8000/api/readings")?
        .set_default("source.timeout_ms", 2_000_i64)?
        .set_default("polling.interval_ms", 3_000_i64)?
        .set_default("polling.overlap", "overlap")?
        .set_default("polling.retain_aqi_on_zero", true)?
        .set_default("polling.initial_aqi", 0_i64)?
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("dashboard.title", "Environmental Monitoring Dashboard")?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: AppConfig = settings.try_deserialize()?;
    anyhow::ensure!(
        cfg.polling.interval_ms > 0,
        "polling.interval_ms must be greater than zero"
    );

    Ok(cfg)
}
