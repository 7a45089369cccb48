//! Design Frequency Table
//!
//! Reduces the backend's full theoretical grid to the canonical design
//! frequencies, bands each retained row by its return period, and shows
//! the raw empirical table underneath.
//!
//! Data flow:
//! 1. `build.rs` copies `frequency_table.json` into `OUT_DIR`.
//! 2. `include_str!` embeds the JSON into the WASM binary.
//! 3. On mount, the JSON is parsed into `AppState`.
//! 4. The shared `FrequencyTable` component filters and renders.

use dioxus::prelude::*;
use rfa_chart_ui::components::{ChartHeader, ErrorDisplay, FrequencyTable, LoadingSpinner};
use rfa_chart_ui::state::AppState;
use rfa_data::parse;

/// Pre-computed frequency table for the demo station.
const FREQUENCY_TABLE_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/frequency_table.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("frequency-table-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse embedded fixture on mount
    use_effect(move || {
        if FREQUENCY_TABLE_JSON.trim().is_empty() {
            state
                .error_msg
                .set(Some("No frequency table data embedded in this build.".to_string()));
            state.loading.set(false);
            return;
        }
        match parse::parse_frequency_table(FREQUENCY_TABLE_JSON) {
            Ok(table) => {
                state.frequency_table.set(Some(table));
            }
            Err(e) => {
                log::error!("Failed to parse frequency table: {e:#}");
                state
                    .error_msg
                    .set(Some(format!("Failed to load frequency table data: {e}")));
            }
        }
        state.loading.set(false);
    });

    let table = state.frequency_table.read().clone();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Design Frequency Table".to_string(),
                unit_description: "Discharge Q (m³/s) at the canonical design frequencies".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                FrequencyTable { table: table.unwrap_or_default() }
            }
        }
    }
}
