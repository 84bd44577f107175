// Domain layer - Readings, tiers and chart models
pub mod aqi;
pub mod chart;
pub mod dashboard;
pub mod payload;
pub mod readout;
pub mod view_model;
