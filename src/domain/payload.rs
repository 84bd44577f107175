// Wire shape of the sensor server's readings endpoint
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RemotePayload {
    pub latest: LatestReading,
    #[serde(default)]
    pub timestamps: Vec<String>,
    #[serde(default)]
    pub water_levels: Vec<f64>,
    #[serde(default)]
    pub temperatures: Vec<f64>,
    #[serde(default)]
    pub humidities: Vec<f64>,
    #[serde(default)]
    pub aqi_levels: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatestReading {
    pub water_level: f64,
    pub temperature: f64,
    pub humidity: f64,
    #[serde(default)]
    pub aqi: Option<f64>,
    pub timestamp: String,
}
