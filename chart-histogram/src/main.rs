//! Annual Sample Histogram
//!
//! Bins the annual index values from the basic frequency table and
//! overlays the fitted curve (thinned) on a secondary axis. Years with
//! missing or non-positive values are dropped from the sample; if
//! nothing valid remains the app shows a placeholder instead of an
//! empty chart.
//!
//! Data flow:
//! 1. `build.rs` copies the fixture JSON files into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount, both files are parsed into `AppState`.
//! 4. The shared `Histogram` component bins and renders via the D3 bridge.

use dioxus::prelude::*;
use rfa_chart_ui::components::{ChartHeader, ErrorDisplay, Histogram, LoadingSpinner};
use rfa_chart_ui::state::AppState;
use rfa_data::parse;

/// Basic frequency records (one per water year).
const BASIC_FREQUENCY_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/basic_frequency.json"));
/// Fitted curve used for the optional density overlay.
const FREQUENCY_CURVE_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/frequency_curve.json"));

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "rainfall-histogram";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("histogram-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse embedded fixtures on mount
    use_effect(move || {
        if BASIC_FREQUENCY_JSON.trim().is_empty() {
            state
                .error_msg
                .set(Some("No sample data embedded in this build.".to_string()));
            state.loading.set(false);
            return;
        }
        match parse::parse_basic_frequency(BASIC_FREQUENCY_JSON) {
            Ok(records) => {
                state.basic_frequency.set(records);
            }
            Err(e) => {
                log::error!("Failed to parse basic frequency records: {e:#}");
                state
                    .error_msg
                    .set(Some(format!("Failed to load sample data: {e}")));
                state.loading.set(false);
                return;
            }
        }

        // The overlay is optional; a parse failure only costs the curve.
        if !FREQUENCY_CURVE_JSON.trim().is_empty() {
            match parse::parse_frequency_curve(FREQUENCY_CURVE_JSON) {
                Ok(curve) => state.frequency_curve.set(Some(curve)),
                Err(e) => log::error!("Failed to parse overlay curve: {e:#}"),
            }
        }

        state.loading.set(false);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Annual Maximum Histogram".to_string(),
                unit_description: "Number of years per rainfall depth bin (mm)".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                Histogram { id: CHART_ID.to_string() }
            }
        }
    }
}
