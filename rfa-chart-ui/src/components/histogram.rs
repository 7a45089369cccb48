//! Histogram of the annual sample with an optional fitted-density overlay.

use crate::components::{ChartContainer, EmptyState};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use rfa_data::models::CurvePoint;
use rfa_freq::histogram::{build_histogram, clean_sample, sparse_sample, summarize};

/// Overlay uses every 20th theoretical point; the full grid is far
/// denser than the histogram needs.
const DENSITY_OVERLAY_STEP: usize = 20;

#[derive(Props, Clone, PartialEq)]
pub struct HistogramProps {
    /// DOM id for the chart container (D3 renders into this)
    #[props(default = "rainfall-histogram".to_string())]
    pub id: String,
}

/// Histogram fed from `AppState.basic_frequency`, with descriptive stat
/// chips below the chart. Invalid and non-positive sample values are
/// dropped; an all-invalid sample shows the placeholder instead of a
/// zero-bin chart.
#[component]
pub fn Histogram(props: HistogramProps) -> Element {
    let state = use_context::<AppState>();
    let records = state.basic_frequency.read().clone();
    let sample = clean_sample(records.iter().map(|r| r.index_value));
    let summary = summarize(&sample);

    let id = props.id.clone();
    use_effect(move || {
        let records = state.basic_frequency.read().clone();
        let sample = clean_sample(records.iter().map(|r| r.index_value));
        let histogram = match build_histogram(&sample) {
            Some(h) => h,
            None => {
                js_bridge::destroy_chart(&id);
                return;
            }
        };

        js_bridge::init_charts();

        // Thin the theoretical curve into a light density overlay when
        // a fitted curve is around.
        let overlay: Vec<CurvePoint> = state
            .frequency_curve
            .read()
            .as_ref()
            .and_then(|curve| curve.theoretical_curve.clone())
            .map(|points| sparse_sample(&points, DENSITY_OVERLAY_STEP))
            .unwrap_or_default();

        log::info!(
            "[RFA Debug] histogram: {} valid of {} records, {} bins",
            sample.len(),
            records.len(),
            histogram.counts.len()
        );

        let data_json = serde_json::to_string(&serde_json::json!({
            "histogram": &histogram,
            "overlay": &overlay,
        }))
        .unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "xAxisLabel": "Annual maximum (mm)",
            "yAxisLabel": "Count",
            "overlayLabel": "Fitted curve",
            "barColor": "#2196F3",
            "overlayColor": "#D32F2F",
            "secondaryAxis": !overlay.is_empty(),
        }))
        .unwrap_or_default();

        js_bridge::render_histogram_chart(&id, &data_json, &config_json);
    });

    let summary = match summary {
        Some(s) => s,
        None => {
            return rsx! {
                EmptyState {
                    message: "No valid data for histogram.".to_string(),
                }
            }
        }
    };

    let mean_text = format!("{:.2}", summary.mean);
    let min_text = format!("{:.2}", summary.min);
    let max_text = format!("{:.2}", summary.max);

    rsx! {
        div {
            ChartContainer {
                id: props.id.clone(),
                loading: false,
                min_height: 360,
            }
            div {
                style: "margin-top: 8px; display: flex; gap: 12px; flex-wrap: wrap; font-size: 12px;",
                StatChip { label: "Years".to_string(), value: summary.count.to_string() }
                StatChip { label: "Min".to_string(), value: min_text }
                StatChip { label: "Max".to_string(), value: max_text }
                StatChip { label: "Mean".to_string(), value: mean_text }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatChipProps {
    label: String,
    value: String,
}

#[component]
fn StatChip(props: StatChipProps) -> Element {
    rsx! {
        div {
            style: "padding: 6px 12px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            span { style: "color: #757575; margin-right: 6px;", "{props.label}" }
            strong { "{props.value}" }
        }
    }
}
