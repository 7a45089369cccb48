//! Statistical evaluation panel for the fitted distributions.
//!
//! Renders the backend's distribution comparison as tier badges, the
//! goodness-of-fit ranking with the winner highlighted, and the
//! quality-control summary. All numbers are shipped by the backend; the
//! panel only classifies them for display.

use crate::components::EmptyState;
use dioxus::prelude::*;
use rfa_data::models::{AnalysisResult, DistributionFit, GoodnessRank, QcSummary};
use rfa_freq::fit::{
    classify_aic_delta, classify_p_value, classify_score, min_aic, AicTier, PValueTier, ScoreTier,
};

const TH_STYLE: &str =
    "padding: 6px 10px; border: 1px solid #E0E0E0; background: #F5F5F5; text-align: left;";
const TD_STYLE: &str = "padding: 6px 10px; border: 1px solid #E0E0E0;";

fn p_value_color(tier: PValueTier) -> &'static str {
    match tier {
        PValueTier::Adequate => "#4CAF50",
        PValueTier::Borderline => "#FFA000",
        PValueTier::Inadequate => "#C62828",
    }
}

fn aic_color(tier: AicTier) -> &'static str {
    match tier {
        AicTier::Best => "#4CAF50",
        AicTier::Good => "#8BC34A",
        AicTier::Fair => "#FFA000",
        AicTier::Poor => "#C62828",
    }
}

fn score_color(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::High => "#4CAF50",
        ScoreTier::Medium => "#FFA000",
        ScoreTier::Low => "#C62828",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StationMetricsPanelProps {
    pub analysis: AnalysisResult,
}

/// Evaluation panel: candidate comparison, ranking, QC summary.
#[component]
pub fn StationMetricsPanel(props: StationMetricsPanelProps) -> Element {
    let comparison = match &props.analysis.distribution_comparison {
        Some(c) if !c.is_empty() => c.clone(),
        _ => {
            return rsx! {
                EmptyState {
                    message: "No distribution comparison available for this station.".to_string(),
                }
            }
        }
    };

    let best_aic = min_aic(comparison.values().map(|f| f.aic));
    let ranking = props.analysis.goodness_ranking.clone().unwrap_or_default();
    let qc = props.analysis.qc_summary.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px; max-width: 760px;",

            div {
                h4 { style: "margin: 0 0 6px 0; font-size: 14px;", "Candidate distributions" }
                table {
                    style: "border-collapse: collapse; font-size: 13px; width: 100%;",
                    thead {
                        tr {
                            th { style: TH_STYLE, "Distribution" }
                            th { style: TH_STYLE, "AIC" }
                            th { style: TH_STYLE, "ΔAIC" }
                            th { style: TH_STYLE, "Chi-Square" }
                            th { style: TH_STYLE, "p-value" }
                            th { style: TH_STYLE, "Grade" }
                        }
                    }
                    tbody {
                        for (name, fit) in comparison.iter() {
                            DistributionRow {
                                name: name.clone(),
                                fit: fit.clone(),
                                best_aic,
                            }
                        }
                    }
                }
            }

            if !ranking.is_empty() {
                div {
                    h4 { style: "margin: 0 0 6px 0; font-size: 14px;", "Goodness-of-fit ranking" }
                    table {
                        style: "border-collapse: collapse; font-size: 13px; width: 100%;",
                        thead {
                            tr {
                                th { style: TH_STYLE, "Rank" }
                                th { style: TH_STYLE, "Distribution" }
                                th { style: TH_STYLE, "AIC" }
                                th { style: TH_STYLE, "p-value" }
                            }
                        }
                        tbody {
                            for entry in ranking.iter() {
                                RankingRow { entry: entry.clone() }
                            }
                        }
                    }
                }
            }

            if let Some(qc) = qc {
                QcSection { qc }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DistributionRowProps {
    name: String,
    fit: DistributionFit,
    /// None when no candidate carries an AIC at all.
    #[props(!optional)]
    best_aic: Option<f64>,
}

/// One candidate row with ΔAIC and p-value tier badges.
#[component]
fn DistributionRow(props: DistributionRowProps) -> Element {
    let aic_text = props
        .fit
        .aic
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "—".to_string());
    let chi_text = props
        .fit
        .chi_square
        .map(|v| format!("{v:.3}"))
        .unwrap_or_else(|| "—".to_string());
    let p_text = props
        .fit
        .p_value
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "—".to_string());
    let grade = props.fit.quality_grade.clone().unwrap_or_else(|| "—".to_string());

    let delta_cell = match (props.fit.aic, props.best_aic) {
        (Some(aic), Some(best)) => {
            let tier = classify_aic_delta(aic - best);
            let label = format!("{:.1} · {}", aic - best, tier.label());
            rsx! { Badge { label, color: aic_color(tier).to_string() } }
        }
        _ => rsx! { "—" },
    };
    let p_cell = match props.fit.p_value {
        Some(p) => {
            let tier = classify_p_value(p);
            rsx! {
                Badge {
                    label: tier.label().to_string(),
                    color: p_value_color(tier).to_string(),
                }
            }
        }
        None => rsx! { "" },
    };

    rsx! {
        tr {
            td { style: TD_STYLE, "{props.name}" }
            td { style: TD_STYLE, "{aic_text}" }
            td { style: TD_STYLE, {delta_cell} }
            td { style: TD_STYLE, "{chi_text}" }
            td {
                style: TD_STYLE,
                "{p_text} "
                {p_cell}
            }
            td { style: TD_STYLE, "{grade}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RankingRowProps {
    entry: GoodnessRank,
}

/// Ranking row; the top-ranked distribution gets the highlight treatment.
#[component]
fn RankingRow(props: RankingRowProps) -> Element {
    let top = props.entry.rank == 1;
    let row_style = if top {
        "background: #E8F5E9; border-left: 3px solid #4CAF50; font-weight: bold;"
    } else {
        ""
    };
    let aic_text = props
        .entry
        .aic
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "—".to_string());
    let p_text = props
        .entry
        .p_value
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        tr {
            style: "{row_style}",
            td { style: TD_STYLE, "{props.entry.rank}" }
            td {
                style: TD_STYLE,
                "{props.entry.distribution}"
                if top {
                    " ★"
                }
            }
            td { style: TD_STYLE, "{aic_text}" }
            td { style: TD_STYLE, "{p_text}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct QcSectionProps {
    qc: QcSummary,
}

/// Quality-control block: score bars, grade flag, warning, recommendations.
#[component]
fn QcSection(props: QcSectionProps) -> Element {
    let quality_score = props.qc.quality_score.unwrap_or(0.0);
    let completeness = props.qc.completeness.unwrap_or(0.0);
    let professional = props.qc.professional_grade.unwrap_or(false);

    let (flag_label, flag_color) = if professional {
        ("Professional grade record", "#4CAF50")
    } else {
        ("Below professional grade", "#FFA000")
    };

    rsx! {
        div {
            h4 { style: "margin: 0 0 6px 0; font-size: 14px;", "Data quality" }

            ScoreBar { label: "Overall score".to_string(), value: quality_score }
            ScoreBar { label: "Completeness".to_string(), value: completeness }

            div {
                style: "margin: 8px 0;",
                Badge { label: flag_label.to_string(), color: flag_color.to_string() }
            }

            if let Some(warning) = props.qc.warning.clone() {
                div {
                    style: "padding: 10px 12px; margin: 8px 0; background: #FFF3E0; color: #E65100; border: 1px solid #FFCC80; border-radius: 4px; font-size: 13px;",
                    strong { "Warning: " }
                    "{warning}"
                }
            }

            if !props.qc.recommendations.is_empty() {
                div {
                    style: "font-size: 13px;",
                    strong { "Recommendations" }
                    ul {
                        style: "margin: 4px 0 0 0; padding-left: 20px;",
                        for recommendation in props.qc.recommendations.iter() {
                            li { "{recommendation}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ScoreBarProps {
    label: String,
    value: f64,
}

/// Horizontal 0-100 progress bar with threshold coloring.
#[component]
fn ScoreBar(props: ScoreBarProps) -> Element {
    let clamped = props.value.clamp(0.0, 100.0);
    let color = score_color(classify_score(clamped));
    let fill_style = format!(
        "width: {clamped:.0}%; height: 100%; background: {color}; border-radius: 3px;"
    );
    let percent_text = format!("{clamped:.0}%");

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; margin: 4px 0; font-size: 13px;",
            span { style: "width: 110px; color: #616161;", "{props.label}" }
            div {
                style: "flex: 1; height: 10px; background: #E0E0E0; border-radius: 3px; overflow: hidden;",
                div { style: "{fill_style}" }
            }
            span { style: "width: 44px; text-align: right;", "{percent_text}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BadgeProps {
    label: String,
    color: String,
}

#[component]
fn Badge(props: BadgeProps) -> Element {
    let style = format!(
        "display: inline-block; padding: 1px 8px; border-radius: 10px; background: {}; color: white; font-size: 11px; font-weight: bold;",
        props.color
    );
    rsx! {
        span { style: "{style}", "{props.label}" }
    }
}
