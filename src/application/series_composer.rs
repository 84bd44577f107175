// Series composer - Multi-axis chart dataset from the normalized history
use crate::domain::chart::{AqiOverlay, AxisId, AxisPosition, ChartAxis, ChartDataset, SeriesData};
use crate::domain::view_model::HistorySeries;

pub fn compose(history: &HistorySeries) -> ChartDataset {
    let aqi_levels = history.aqi_levels();

    // The AQI line and axis only exist when there is AQI history to draw.
    let aqi = (!aqi_levels.is_empty()).then(|| AqiOverlay {
        series: SeriesData::new(
            "aqi",
            "AQI",
            Some("rgba(109, 40, 217, 1)"),
            Some("rgba(109, 40, 217, 0.2)"),
            AxisId::Aqi,
            aqi_levels,
        ),
        axis: ChartAxis::linear(AxisId::Aqi, "AQI", AxisPosition::Right, 0.0, 500.0, false),
    });

    ChartDataset {
        labels: history.timestamps(),
        water_level: SeriesData::new(
            "water_level",
            "Water Level (%)",
            Some("rgba(30, 64, 175, 1)"),
            Some("rgba(30, 64, 175, 0.2)"),
            AxisId::Percentage,
            history.water_levels(),
        ),
        temperature: SeriesData::new(
            "temperature",
            "Temperature (°C)",
            Some("rgba(185, 28, 28, 1)"),
            Some("rgba(185, 28, 28, 0.2)"),
            AxisId::Temperature,
            history.temperatures(),
        ),
        humidity: SeriesData::new(
            "humidity",
            "Humidity (%)",
            Some("rgba(22, 101, 52, 1)"),
            Some("rgba(22, 101, 52, 0.2)"),
            AxisId::Percentage,
            history.humidities(),
        ),
        x_axis: ChartAxis::category(AxisId::X, "Time"),
        percentage_axis: ChartAxis::linear(
            AxisId::Percentage,
            "Percentage (%)",
            AxisPosition::Left,
            0.0,
            100.0,
            true,
        ),
        temperature_axis: ChartAxis::linear(
            AxisId::Temperature,
            "Temperature (°C)",
            AxisPosition::Right,
            0.0,
            50.0,
            false,
        ),
        aqi,
    }
}
