//! Reusable Dioxus RSX components for the frequency analysis apps.

mod chart_container;
mod chart_header;
mod empty_state;
mod error_display;
mod frequency_chart;
mod frequency_table;
mod histogram;
mod loading_spinner;
mod sample_data_guide;
mod sidebar;
mod station_metrics;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use frequency_chart::FrequencyChart;
pub use frequency_table::FrequencyTable;
pub use histogram::Histogram;
pub use loading_spinner::LoadingSpinner;
pub use sample_data_guide::SampleDataGuide;
pub use sidebar::Sidebar;
pub use station_metrics::StationMetricsPanel;
