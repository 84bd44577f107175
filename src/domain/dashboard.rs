// Dashboard domain model
use super::aqi::AqiTier;
use super::chart::ChartDataset;
use super::readout::Readouts;
use super::view_model::ViewModel;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AqiSummary {
    pub value: i64,
    pub tier: AqiTier,
    pub range: (i64, i64),
    pub label: &'static str,
    pub description: &'static str,
}

impl AqiSummary {
    pub fn new(value: i64, tier: AqiTier) -> Self {
        Self {
            value,
            tier,
            range: tier.range(),
            label: tier.label(),
            description: tier.description(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub view_model: ViewModel,
    pub aqi: AqiSummary,
    pub chart: ChartDataset,
    pub readouts: Readouts,
}

impl Dashboard {
    pub fn new(
        title: String,
        view_model: ViewModel,
        aqi: AqiSummary,
        chart: ChartDataset,
        readouts: Readouts,
    ) -> Self {
        Self {
            title,
            view_model,
            aqi,
            chart,
            readouts,
        }
    }
}
