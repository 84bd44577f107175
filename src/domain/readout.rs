// Card and gauge readouts derived from the current view model
use super::view_model::ViewModel;
use serde::Serialize;

const TEMPERATURE_SCALE_MAX: f64 = 50.0;
/// The AQI gauge spans 0..=500, so each percent of its width is 5 index points.
const AQI_POINTS_PER_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HumidityBand {
    Low,
    Optimal,
    High,
}

impl HumidityBand {
    pub fn from_humidity(humidity: f64) -> Self {
        if humidity < 30.0 {
            HumidityBand::Low
        } else if humidity > 70.0 {
            HumidityBand::High
        } else {
            HumidityBand::Optimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HumidityBand::Low => "Low Humidity",
            HumidityBand::Optimal => "Optimal Humidity",
            HumidityBand::High => "High Humidity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readouts {
    /// Water level used as-is; the tank gauge is not clamped.
    pub water_fill_percent: f64,
    pub temperature_fill_percent: f64,
    pub aqi_marker_percent: f64,
    pub humidity_band: HumidityBand,
    pub humidity_label: &'static str,
}

impl Readouts {
    pub fn derive(vm: &ViewModel) -> Self {
        let humidity_band = HumidityBand::from_humidity(vm.humidity);
        Self {
            water_fill_percent: vm.water_level,
            temperature_fill_percent: (vm.temperature / TEMPERATURE_SCALE_MAX * 100.0).min(100.0),
            aqi_marker_percent: (vm.aqi as f64 / AQI_POINTS_PER_PERCENT).min(100.0),
            humidity_band,
            humidity_label: humidity_band.label(),
        }
    }
}
