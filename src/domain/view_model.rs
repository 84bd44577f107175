// Normalized snapshot of current and historical readings
use serde::Serialize;

pub const NOT_YET_UPDATED: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub water_level: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub aqi: i64,
    pub last_updated: String,
    pub history: HistorySeries,
}

impl ViewModel {
    /// Zeroed view model shown before the first successful poll.
    pub fn initial(aqi: i64) -> Self {
        Self {
            water_level: 0.0,
            temperature: 0.0,
            humidity: 0.0,
            aqi,
            last_updated: NOT_YET_UPDATED.to_string(),
            history: HistorySeries::default(),
        }
    }

    pub fn has_updated(&self) -> bool {
        self.last_updated != NOT_YET_UPDATED
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::initial(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub timestamp: String,
    pub water_level: f64,
    pub temperature: f64,
    pub humidity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aqi: Option<f64>,
}

/// Ordered readings sharing one timeline.
///
/// The AQI column is either carried by every point or by none of them;
/// [`HistorySeries::new`] enforces that.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistorySeries {
    points: Vec<HistoryPoint>,
}

impl HistorySeries {
    pub fn new(mut points: Vec<HistoryPoint>) -> Self {
        if points.iter().any(|p| p.aqi.is_none()) {
            for point in &mut points {
                point.aqi = None;
            }
        }
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn timestamps(&self) -> Vec<String> {
        self.points.iter().map(|p| p.timestamp.clone()).collect()
    }

    pub fn water_levels(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.water_level).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.temperature).collect()
    }

    pub fn humidities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.humidity).collect()
    }

    /// Empty when the AQI column is absent.
    pub fn aqi_levels(&self) -> Vec<f64> {
        self.points.iter().filter_map(|p| p.aqi).collect()
    }
}
