//! Rainfall Analysis Dashboard
//!
//! Hosts every analysis view behind the sidebar navigation. The
//! dashboard owns the selected-section and sidebar-visibility state and
//! plays the "parent container" role for the sidebar's section-change
//! and close notifications: on narrow viewports the sidebar starts
//! hidden behind a toggle button and closes itself after navigation.
//!
//! Data flow:
//! 1. `build.rs` copies all fixture JSON files into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount, each file is parsed into `AppState`; a file that fails
//!    to parse only blanks its own section.
//! 4. The shared components render whichever section is selected.

use dioxus::prelude::*;
use rfa_chart_ui::components::{
    ChartHeader, FrequencyChart, FrequencyTable, Histogram, LoadingSpinner, SampleDataGuide,
    Sidebar, StationMetricsPanel,
};
use rfa_chart_ui::state::AppState;
use rfa_data::parse;

const ANALYSIS_RESULT_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/analysis_result.json"));
const FREQUENCY_CURVE_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/frequency_curve.json"));
const FREQUENCY_TABLE_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/frequency_table.json"));
const BASIC_FREQUENCY_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/basic_frequency.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut selected_section = use_signal(|| "guide".to_string());
    let mut sidebar_open = use_signal(|| true);

    // Parse embedded fixtures on mount. Each section degrades on its
    // own; a bad file never takes the whole dashboard down.
    use_effect(move || {
        if !ANALYSIS_RESULT_JSON.trim().is_empty() {
            match parse::parse_analysis_result(ANALYSIS_RESULT_JSON) {
                Ok(analysis) => state.analysis.set(Some(analysis)),
                Err(e) => log::error!("Failed to parse analysis result: {e:#}"),
            }
        }
        if !FREQUENCY_CURVE_JSON.trim().is_empty() {
            match parse::parse_frequency_curve(FREQUENCY_CURVE_JSON) {
                Ok(curve) => state.frequency_curve.set(Some(curve)),
                Err(e) => log::error!("Failed to parse frequency curve: {e:#}"),
            }
        }
        if !FREQUENCY_TABLE_JSON.trim().is_empty() {
            match parse::parse_frequency_table(FREQUENCY_TABLE_JSON) {
                Ok(table) => state.frequency_table.set(Some(table)),
                Err(e) => log::error!("Failed to parse frequency table: {e:#}"),
            }
        }
        if !BASIC_FREQUENCY_JSON.trim().is_empty() {
            match parse::parse_basic_frequency(BASIC_FREQUENCY_JSON) {
                Ok(records) => state.basic_frequency.set(records),
                Err(e) => log::error!("Failed to parse basic frequency records: {e:#}"),
            }
        }
        state.loading.set(false);
    });

    let section = selected_section();

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if sidebar_open() {
                Sidebar {
                    active_section: section.clone(),
                    on_section_change: move |next: String| selected_section.set(next),
                    on_close: move |_| sidebar_open.set(false),
                }
            }

            div {
                style: "flex: 1; padding: 16px;",

                button {
                    style: "margin-bottom: 12px; padding: 4px 10px; font-size: 13px; cursor: pointer;",
                    onclick: move |_| { let v = sidebar_open(); sidebar_open.set(!v); },
                    if sidebar_open() { "Hide menu" } else { "Show menu" }
                }

                if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    SectionView { section }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SectionViewProps {
    section: String,
}

/// Renders the currently selected dashboard section.
#[component]
fn SectionView(props: SectionViewProps) -> Element {
    let state = use_context::<AppState>();

    match props.section.as_str() {
        "frequency-curve" => rsx! {
            ChartHeader {
                title: "Frequency Curve".to_string(),
                unit_description: "Annual maximum rainfall (mm) over exceedance probability".to_string(),
            }
            FrequencyChart { id: "dashboard-frequency-chart".to_string() }
        },
        "frequency-table" => {
            let table = state.frequency_table.read().clone().unwrap_or_default();
            rsx! {
                ChartHeader {
                    title: "Design Frequency Table".to_string(),
                    unit_description: "Discharge Q (m³/s) at the canonical design frequencies".to_string(),
                }
                FrequencyTable { table }
            }
        }
        "histogram" => rsx! {
            ChartHeader {
                title: "Annual Maximum Histogram".to_string(),
                unit_description: "Number of years per rainfall depth bin (mm)".to_string(),
            }
            Histogram { id: "dashboard-histogram".to_string() }
        },
        "metrics" => {
            let analysis = state.analysis.read().clone().unwrap_or_default();
            rsx! {
                ChartHeader {
                    title: "Station Evaluation".to_string(),
                    unit_description: "Goodness of fit across candidate distributions".to_string(),
                }
                StationMetricsPanel { analysis }
            }
        }
        // "guide" and anything unknown land on the usage guide
        _ => rsx! {
            SampleDataGuide {}
        },
    }
}
