//! Station Evaluation Metrics Panel
//!
//! Renders the multi-distribution comparison for a station: AIC-delta
//! and p-value tier badges per candidate, the goodness-of-fit ranking
//! with the winner highlighted, and the data-quality summary with its
//! recommendations.
//!
//! Data flow:
//! 1. `build.rs` copies `analysis_result.json` into `OUT_DIR`.
//! 2. `include_str!` embeds the JSON into the WASM binary.
//! 3. On mount, the JSON is parsed into `AppState`.
//! 4. The shared `StationMetricsPanel` component classifies and renders.

use dioxus::prelude::*;
use rfa_chart_ui::components::{ChartHeader, ErrorDisplay, LoadingSpinner, StationMetricsPanel};
use rfa_chart_ui::state::AppState;
use rfa_data::parse;

/// Pre-computed multi-distribution analysis for the demo station.
const ANALYSIS_RESULT_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/analysis_result.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("station-metrics-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse embedded fixture on mount
    use_effect(move || {
        if ANALYSIS_RESULT_JSON.trim().is_empty() {
            state
                .error_msg
                .set(Some("No analysis result embedded in this build.".to_string()));
            state.loading.set(false);
            return;
        }
        match parse::parse_analysis_result(ANALYSIS_RESULT_JSON) {
            Ok(analysis) => {
                state.analysis.set(Some(analysis));
            }
            Err(e) => {
                log::error!("Failed to parse analysis result: {e:#}");
                state
                    .error_msg
                    .set(Some(format!("Failed to load analysis result: {e}")));
            }
        }
        state.loading.set(false);
    });

    let analysis = state.analysis.read().clone().unwrap_or_default();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Station Evaluation".to_string(),
                unit_description: "Goodness of fit across candidate distributions".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                StationMetricsPanel { analysis }
            }
        }
    }
}
