//! Frequency Curve Chart
//!
//! Plots the fitted distribution's frequency curve against the observed
//! annual maxima on a logarithmic probability axis, with fixed tick
//! positions and reference lines at the 100-year (P = 1%) and 10-year
//! (P = 10%) events.
//!
//! Data flow:
//! 1. `build.rs` copies `frequency_curve.json` into `OUT_DIR`.
//! 2. `include_str!` embeds the JSON into the WASM binary.
//! 3. On mount, the JSON is parsed into `AppState`.
//! 4. The shared `FrequencyChart` component renders via the D3 bridge.

use dioxus::prelude::*;
use rfa_chart_ui::components::{ChartHeader, ErrorDisplay, FrequencyChart, LoadingSpinner};
use rfa_chart_ui::state::AppState;
use rfa_data::parse;

/// Pre-computed frequency curve result for the demo station.
const FREQUENCY_CURVE_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/frequency_curve.json"));

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "frequency-curve-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("frequency-curve-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse embedded fixture on mount
    use_effect(move || {
        if FREQUENCY_CURVE_JSON.trim().is_empty() {
            state
                .error_msg
                .set(Some("No frequency curve data embedded in this build.".to_string()));
            state.loading.set(false);
            return;
        }
        match parse::parse_frequency_curve(FREQUENCY_CURVE_JSON) {
            Ok(curve) => {
                state.frequency_curve.set(Some(curve));
            }
            Err(e) => {
                log::error!("Failed to parse frequency curve: {e:#}");
                state
                    .error_msg
                    .set(Some(format!("Failed to load frequency curve data: {e}")));
            }
        }
        state.loading.set(false);
    });

    let title = state
        .frequency_curve
        .read()
        .as_ref()
        .and_then(|curve| curve.distribution.clone())
        .map(|distribution| format!("Frequency Curve: {distribution}"))
        .unwrap_or_else(|| "Frequency Curve".to_string());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title,
                unit_description: "Annual maximum rainfall (mm) over exceedance probability".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                FrequencyChart { id: CHART_ID.to_string() }
            }
        }
    }
}
