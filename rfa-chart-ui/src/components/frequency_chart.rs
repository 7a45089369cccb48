//! Frequency curve chart host: theoretical line plus empirical scatter
//! on a logarithmic probability axis, drawn by D3 through the bridge.

use crate::components::{ChartContainer, EmptyState};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use rfa_freq::axis::{padded_range, PROBABILITY_TICKS, REFERENCE_PROBABILITIES};

#[derive(Props, Clone, PartialEq)]
pub struct FrequencyChartProps {
    /// DOM id for the chart container (D3 renders into this)
    #[props(default = "frequency-curve-chart".to_string())]
    pub id: String,
}

/// Frequency curve chart fed from `AppState.frequency_curve`.
///
/// Renders the empty state unless both the theoretical curve and the
/// empirical points are present.
#[component]
pub fn FrequencyChart(props: FrequencyChartProps) -> Element {
    let state = use_context::<AppState>();
    let curve = state.frequency_curve.read().clone();
    let plottable = curve.as_ref().map(|c| c.is_plottable()).unwrap_or(false);
    let warnings = curve
        .as_ref()
        .map(|c| c.quality_warnings.clone())
        .unwrap_or_default();
    // Backend sample statistics, shown as a caption above the plot.
    let stats_line = curve.as_ref().and_then(|c| c.statistics).map(|stats| {
        format!(
            "Mean = {:.2}, Cv = {:.3}, Cs = {:.3}, n = {}",
            stats.mean, stats.cv, stats.cs, stats.n
        )
    });

    let id = props.id.clone();
    use_effect(move || {
        let curve = match &*state.frequency_curve.read() {
            Some(c) if c.is_plottable() => c.clone(),
            _ => {
                web_sys::console::log_1(&"[RFA Debug] frequency chart: nothing to plot".into());
                js_bridge::destroy_chart(&id);
                return;
            }
        };

        js_bridge::init_charts();

        // D3 draws the line in data order, so sort by probability first.
        let mut theoretical = curve.theoretical_curve.clone().unwrap_or_default();
        theoretical.sort_by(|a, b| {
            a.probability_percent
                .partial_cmp(&b.probability_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let empirical = curve.empirical_points.clone().unwrap_or_default();

        let y_range = padded_range(
            theoretical
                .iter()
                .chain(empirical.iter())
                .map(|point| point.discharge),
        );

        let distribution = curve
            .distribution
            .clone()
            .unwrap_or_else(|| "fitted".to_string());

        let data_json = serde_json::to_string(&serde_json::json!({
            "theoretical": &theoretical,
            "empirical": &empirical,
        }))
        .unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "seriesLabel": format!("{} distribution", distribution),
            "pointsLabel": "Observed",
            "xAxisLabel": "Exceedance probability P (%)",
            "ticks": PROBABILITY_TICKS,
            "referenceLines": REFERENCE_PROBABILITIES,
            "yRange": y_range.map(|(lo, hi)| vec![lo, hi]),
            "lineColor": "#D32F2F",
            "pointColor": "#1565C0",
            "smooth": true,
        }))
        .unwrap_or_default();

        web_sys::console::log_1(
            &format!(
                "[RFA Debug] frequency chart: {} theoretical / {} empirical points",
                theoretical.len(),
                empirical.len()
            )
            .into(),
        );
        js_bridge::render_frequency_chart(&id, &data_json, &config_json);
    });

    if !plottable {
        return rsx! {
            EmptyState {
                message: "Frequency curve data is not available.".to_string(),
            }
        };
    }

    rsx! {
        div {
            if let Some(line) = stats_line {
                p {
                    style: "margin: 0 0 4px 0; font-size: 12px; color: #666;",
                    "{line}"
                }
            }
            ChartContainer {
                id: props.id.clone(),
                loading: false,
                min_height: 420,
            }
            if !warnings.is_empty() {
                div {
                    style: "padding: 8px 12px; margin-top: 8px; background: #FFF3E0; color: #E65100; border: 1px solid #FFCC80; border-radius: 4px; font-size: 12px;",
                    for warning in warnings.iter() {
                        div { "{warning}" }
                    }
                }
            }
        }
    }
}
