// Dashboard service - Use case for building dashboards
use crate::application::dashboard_state::DashboardState;
use crate::application::series_composer::compose;
use crate::domain::aqi::classify;
use crate::domain::dashboard::{AqiSummary, Dashboard};
use crate::domain::readout::Readouts;
use crate::domain::view_model::ViewModel;

#[derive(Clone)]
pub struct DashboardService {
    state: DashboardState,
    title: String,
}

impl DashboardService {
    pub fn new(state: DashboardState, title: String) -> Self {
        Self { state, title }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Dashboard for the current view model
    pub fn get_dashboard(&self) -> Dashboard {
        self.build(self.state.snapshot())
    }

    /// Tier, chart and readouts are derived fresh on every call.
    pub fn build(&self, view_model: ViewModel) -> Dashboard {
        let aqi = AqiSummary::new(view_model.aqi, classify(view_model.aqi));
        let chart = compose(&view_model.history);
        let readouts = Readouts::derive(&view_model);
        tracing::trace!(
            series = chart.series().len(),
            axes = chart.axes().len(),
            "Composed chart"
        );

        Dashboard::new(self.title.clone(), view_model, aqi, chart, readouts)
    }
}
