//! Frequency summary table reduced to the canonical design frequencies.

use crate::components::EmptyState;
use dioxus::prelude::*;
use rfa_data::models::{FrequencyRow, FrequencyTableResult};
use rfa_freq::format::format_compact;
use rfa_freq::return_period::{
    classify_return_period, is_canonical_probability, return_period_years, ReturnPeriodBand,
};

const TH_STYLE: &str =
    "padding: 6px 10px; border: 1px solid #E0E0E0; background: #F5F5F5; text-align: left;";
const TD_STYLE: &str = "padding: 6px 10px; border: 1px solid #E0E0E0;";

fn band_color(band: ReturnPeriodBand) -> &'static str {
    match band {
        ReturnPeriodBand::Rare => "#FF5722",
        ReturnPeriodBand::Uncommon => "#FFA000",
        ReturnPeriodBand::Average => "#2196F3",
        ReturnPeriodBand::Frequent => "#4CAF50",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FrequencyTableProps {
    pub table: FrequencyTableResult,
}

/// Theoretical design-frequency table with band badges, plus the raw
/// empirical table when the backend shipped one.
#[component]
pub fn FrequencyTable(props: FrequencyTableProps) -> Element {
    let design_rows: Vec<FrequencyRow> = props
        .table
        .theoretical_curve
        .iter()
        .filter(|row| {
            row.probability_value()
                .map(is_canonical_probability)
                .unwrap_or(false)
        })
        .cloned()
        .collect();

    if design_rows.is_empty() {
        return rsx! {
            EmptyState {
                message: "No theoretical frequency data available.".to_string(),
            }
        };
    }

    let empirical = props.table.empirical_points.clone().unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px; max-width: 760px;",

            if let Some(warning) = props.table.warning.clone() {
                div {
                    style: "padding: 10px 12px; background: #FFF3E0; color: #E65100; border: 1px solid #FFCC80; border-radius: 4px; font-size: 13px;",
                    strong { "Warning: " }
                    "{warning}"
                }
            }

            div {
                h4 { style: "margin: 0 0 6px 0; font-size: 14px;", "Design frequencies" }
                table {
                    style: "border-collapse: collapse; font-size: 13px; width: 100%;",
                    thead {
                        tr {
                            th { style: TH_STYLE, "P (%)" }
                            th { style: TH_STYLE, "Return period (years)" }
                            th { style: TH_STYLE, "Discharge Q" }
                            th { style: TH_STYLE, "Band" }
                        }
                    }
                    tbody {
                        for row in design_rows.iter() {
                            DesignFrequencyRow { row: row.clone() }
                        }
                    }
                }
            }

            BandLegend {}

            if !empirical.is_empty() {
                div {
                    h4 { style: "margin: 0 0 6px 0; font-size: 14px;", "Empirical points" }
                    table {
                        style: "border-collapse: collapse; font-size: 13px; width: 100%;",
                        thead {
                            tr {
                                th { style: TH_STYLE, "No." }
                                th { style: TH_STYLE, "P (%)" }
                                th { style: TH_STYLE, "Discharge Q" }
                                th { style: TH_STYLE, "Return period (years)" }
                            }
                        }
                        tbody {
                            for row in empirical.iter() {
                                EmpiricalRow { row: row.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DesignFrequencyRowProps {
    row: FrequencyRow,
}

/// One retained theoretical row: compact-formatted discharge, band badge,
/// and a marker when the backend clamped a negative quantile.
#[component]
fn DesignFrequencyRow(props: DesignFrequencyRowProps) -> Element {
    let probability = props.row.probability_value().unwrap_or(0.0);
    let years = return_period_years(probability).unwrap_or(0);
    let band = classify_return_period(years as f64);
    let band_label = band.label();
    let color = band_color(band);

    let period_text = props
        .row
        .return_period_years
        .clone()
        .unwrap_or_else(|| years.to_string());
    let discharge_text = props
        .row
        .discharge_value()
        .map(format_compact)
        .unwrap_or_else(|| props.row.discharge.clone());
    let clamp_title = props
        .row
        .original_value
        .as_deref()
        .map(|original| format!("Clamped to 0 from {original}"))
        .unwrap_or_default();
    let badge_style = format!(
        "display: inline-block; padding: 1px 8px; border-radius: 10px; background: {color}; color: white; font-size: 11px; font-weight: bold;"
    );

    rsx! {
        tr {
            td { style: TD_STYLE, "{props.row.probability_percent}" }
            td { style: TD_STYLE, "{period_text}" }
            td {
                style: TD_STYLE,
                "{discharge_text}"
                if props.row.clamped {
                    span {
                        style: "color: #E65100; cursor: help;",
                        title: "{clamp_title}",
                        " *"
                    }
                }
            }
            td {
                style: TD_STYLE,
                span { style: "{badge_style}", "{band_label}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct EmpiricalRowProps {
    row: FrequencyRow,
}

/// Empirical rows pass through exactly as the backend formatted them.
#[component]
fn EmpiricalRow(props: EmpiricalRowProps) -> Element {
    let order_text = props
        .row
        .order
        .map(|o| o.to_string())
        .unwrap_or_default();
    let period_text = props.row.return_period_years.clone().unwrap_or_default();

    rsx! {
        tr {
            td { style: TD_STYLE, "{order_text}" }
            td { style: TD_STYLE, "{props.row.probability_percent}" }
            td { style: TD_STYLE, "{props.row.discharge}" }
            td { style: TD_STYLE, "{period_text}" }
        }
    }
}

/// Legend explaining the band badge colors.
#[component]
fn BandLegend() -> Element {
    rsx! {
        div {
            style: "padding: 8px 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px; display: flex; gap: 16px; flex-wrap: wrap;",
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                span {
                    style: "display: inline-block; width: 16px; height: 12px; background: #FF5722; border-radius: 2px;",
                }
                "Rare (T ≥ 50 years)"
            }
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                span {
                    style: "display: inline-block; width: 16px; height: 12px; background: #FFA000; border-radius: 2px;",
                }
                "Uncommon (T ≥ 20 years)"
            }
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                span {
                    style: "display: inline-block; width: 16px; height: 12px; background: #2196F3; border-radius: 2px;",
                }
                "Average (T ≥ 10 years)"
            }
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                span {
                    style: "display: inline-block; width: 16px; height: 12px; background: #4CAF50; border-radius: 2px;",
                }
                "Frequent (T < 10 years)"
            }
        }
    }
}
