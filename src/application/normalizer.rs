// Snapshot normalizer - Turns a raw payload into the next view model
use crate::domain::payload::RemotePayload;
use crate::domain::view_model::{HistoryPoint, HistorySeries, ViewModel};

#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    /// When set, an incoming AQI that rounds to 0 is treated like a missing
    /// reading and the previous value is kept. This mirrors the upstream
    /// dashboard and hides a genuine reading of 0. Fractional readings below
    /// 0.5 count as 0 here, so the view model never shows a 0 it would have
    /// retained over.
    retain_aqi_on_zero: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            retain_aqi_on_zero: true,
        }
    }
}

impl Normalizer {
    pub fn new(retain_aqi_on_zero: bool) -> Self {
        Self { retain_aqi_on_zero }
    }

    /// Build a complete replacement view model. Only the AQI value is
    /// carried over from `previous`, and only when the payload lacks one.
    pub fn normalize(&self, raw: RemotePayload, previous: &ViewModel) -> ViewModel {
        let aqi = self.resolve_aqi(raw.latest.aqi, previous.aqi);

        ViewModel {
            water_level: raw.latest.water_level,
            temperature: raw.latest.temperature,
            humidity: raw.latest.humidity,
            aqi,
            last_updated: raw.latest.timestamp,
            history: build_history(
                raw.timestamps,
                raw.water_levels,
                raw.temperatures,
                raw.humidities,
                raw.aqi_levels,
            ),
        }
    }

    fn resolve_aqi(&self, incoming: Option<f64>, previous: i64) -> i64 {
        match incoming.map(|value| value.round() as i64) {
            Some(0) if self.retain_aqi_on_zero => previous,
            Some(value) => value,
            None => previous,
        }
    }
}

fn build_history(
    timestamps: Vec<String>,
    water_levels: Vec<f64>,
    temperatures: Vec<f64>,
    humidities: Vec<f64>,
    aqi_levels: Option<Vec<f64>>,
) -> HistorySeries {
    let lengths = [
        timestamps.len(),
        water_levels.len(),
        temperatures.len(),
        humidities.len(),
    ];
    let len = lengths.iter().copied().min().unwrap_or(0);

    if lengths.iter().any(|l| *l != len) {
        tracing::warn!(
            timestamps = lengths[0],
            water_levels = lengths[1],
            temperatures = lengths[2],
            humidities = lengths[3],
            "History arrays differ in length; truncating to {}",
            len
        );
    }

    let mut aqi_levels = match aqi_levels {
        Some(levels) if levels.len() == len => Some(levels.into_iter()),
        Some(levels) => {
            tracing::warn!(
                aqi_levels = levels.len(),
                history = len,
                "AQI history is not aligned with timestamps; dropping it"
            );
            None
        }
        None => None,
    };

    let points = timestamps
        .into_iter()
        .zip(water_levels)
        .zip(temperatures)
        .zip(humidities)
        .map(|(((timestamp, water_level), temperature), humidity)| HistoryPoint {
            timestamp,
            water_level,
            temperature,
            humidity,
            aqi: aqi_levels.as_mut().and_then(Iterator::next),
        })
        .collect();

    HistorySeries::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::LatestReading;

    fn payload(aqi: Option<f64>, aqi_levels: Option<Vec<f64>>) -> RemotePayload {
        RemotePayload {
            latest: LatestReading {
                water_level: 55.2,
                temperature: 21.0,
                humidity: 48.0,
                aqi,
                timestamp: "12:00:01".to_string(),
            },
            timestamps: vec!["12:00:01".to_string()],
            water_levels: vec![55.2],
            temperatures: vec![21.0],
            humidities: vec![48.0],
            aqi_levels,
        }
    }

    fn previous_with_aqi(aqi: i64) -> ViewModel {
        ViewModel::initial(aqi)
    }

    #[test]
    fn test_copies_latest_values_verbatim() {
        let vm = Normalizer::default().normalize(payload(Some(35.0), None), &ViewModel::default());

        assert_eq!(vm.water_level, 55.2);
        assert_eq!(vm.temperature, 21.0);
        assert_eq!(vm.humidity, 48.0);
        assert_eq!(vm.aqi, 35);
        assert_eq!(vm.last_updated, "12:00:01");
    }

    #[test]
    fn test_missing_aqi_keeps_previous() {
        let vm = Normalizer::default().normalize(payload(None, None), &previous_with_aqi(42));
        assert_eq!(vm.aqi, 42);
    }

    #[test]
    fn test_zero_aqi_is_treated_as_missing() {
        // A reported 0 is indistinguishable from "no reading" here.
        let vm = Normalizer::default().normalize(payload(Some(0.0), None), &previous_with_aqi(42));
        assert_eq!(vm.aqi, 42);
    }

    #[test]
    fn test_fraction_rounding_to_zero_keeps_previous() {
        let vm = Normalizer::default().normalize(payload(Some(0.3), None), &previous_with_aqi(42));
        assert_eq!(vm.aqi, 42);

        let vm = Normalizer::default().normalize(payload(Some(0.6), None), &previous_with_aqi(42));
        assert_eq!(vm.aqi, 1);
    }

    #[test]
    fn test_zero_aqi_accepted_when_retention_disabled() {
        let vm = Normalizer::new(false).normalize(payload(Some(0.0), None), &previous_with_aqi(42));
        assert_eq!(vm.aqi, 0);
    }

    #[test]
    fn test_missing_aqi_levels_yields_empty_column() {
        let mut previous = previous_with_aqi(42);
        previous.history = HistorySeries::new(vec![HistoryPoint {
            timestamp: "11:59:59".to_string(),
            water_level: 1.0,
            temperature: 1.0,
            humidity: 1.0,
            aqi: Some(40.0),
        }]);

        let vm = Normalizer::default().normalize(payload(Some(35.0), None), &previous);

        assert!(vm.history.aqi_levels().is_empty());
        assert_eq!(vm.history.timestamps(), vec!["12:00:01"]);
    }

    #[test]
    fn test_aligned_aqi_levels_are_attached() {
        let raw = payload(Some(35.0), Some(vec![35.0]));
        let vm = Normalizer::default().normalize(raw, &ViewModel::default());
        assert_eq!(vm.history.aqi_levels(), vec![35.0]);
    }

    #[test]
    fn test_misaligned_arrays_are_truncated() {
        let mut raw = payload(Some(35.0), Some(vec![30.0, 31.0, 32.0]));
        raw.timestamps = vec!["a".into(), "b".into(), "c".into()];
        raw.water_levels = vec![1.0, 2.0, 3.0];
        raw.temperatures = vec![10.0, 11.0];
        raw.humidities = vec![40.0, 41.0, 42.0];

        let vm = Normalizer::default().normalize(raw, &ViewModel::default());

        assert_eq!(vm.history.timestamps(), vec!["a", "b"]);
        assert_eq!(vm.history.water_levels(), vec![1.0, 2.0]);
        // AQI column no longer matches the truncated timeline
        assert!(vm.history.aqi_levels().is_empty());
    }

    #[test]
    fn test_empty_history() {
        let mut raw = payload(Some(35.0), Some(vec![]));
        raw.timestamps.clear();
        raw.water_levels.clear();
        raw.temperatures.clear();
        raw.humidities.clear();

        let vm = Normalizer::default().normalize(raw, &ViewModel::default());
        assert!(vm.history.is_empty());
    }
}
