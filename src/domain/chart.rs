// Chart dataset domain models
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisId {
    X,
    Percentage,
    Temperature,
    Aqi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPosition {
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAxis {
    pub id: AxisId,
    pub title: String,
    pub position: AxisPosition,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Whether gridlines are drawn across the chart area.
    pub grid_lines: bool,
}

impl ChartAxis {
    pub fn category(id: AxisId, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            position: AxisPosition::Bottom,
            min: None,
            max: None,
            grid_lines: true,
        }
    }

    pub fn linear(
        id: AxisId,
        title: &str,
        position: AxisPosition,
        min: f64,
        max: f64,
        grid_lines: bool,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            position,
            min: Some(min),
            max: Some(max),
            grid_lines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub fill_color: Option<String>,
    pub axis: AxisId,
    pub values: Vec<f64>,
}

impl SeriesData {
    pub fn new(
        id: &str,
        name: &str,
        color: Option<&str>,
        fill_color: Option<&str>,
        axis: AxisId,
        values: Vec<f64>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.map(str::to_string),
            fill_color: fill_color.map(str::to_string),
            axis,
            values,
        }
    }
}

/// The AQI line and its dedicated axis travel together so one cannot be
/// present without the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiOverlay {
    pub series: SeriesData,
    pub axis: ChartAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub water_level: SeriesData,
    pub temperature: SeriesData,
    pub humidity: SeriesData,
    pub x_axis: ChartAxis,
    pub percentage_axis: ChartAxis,
    pub temperature_axis: ChartAxis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aqi: Option<AqiOverlay>,
}

impl ChartDataset {
    /// Series in legend order.
    pub fn series(&self) -> Vec<&SeriesData> {
        let mut series = vec![&self.water_level, &self.temperature, &self.humidity];
        if let Some(overlay) = &self.aqi {
            series.push(&overlay.series);
        }
        series
    }

    pub fn axes(&self) -> Vec<&ChartAxis> {
        let mut axes = vec![&self.x_axis, &self.percentage_axis, &self.temperature_axis];
        if let Some(overlay) = &self.aqi {
            axes.push(&overlay.axis);
        }
        axes
    }
}
