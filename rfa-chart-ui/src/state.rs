//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use rfa_data::models::{
    AnalysisResult, BasicFrequencyRecord, FrequencyCurveResult, FrequencyTableResult,
};

/// Shared application state for the frequency analysis apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading its embedded fixtures
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Multi-distribution comparison result (evaluation panel)
    pub analysis: Signal<Option<AnalysisResult>>,
    /// Fitted frequency curve with empirical plotting positions
    pub frequency_curve: Signal<Option<FrequencyCurveResult>>,
    /// Display frequency table
    pub frequency_table: Signal<Option<FrequencyTableResult>>,
    /// Basic frequency records (histogram sample source)
    pub basic_frequency: Signal<Vec<BasicFrequencyRecord>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            analysis: Signal::new(None),
            frequency_curve: Signal::new(None),
            frequency_table: Signal::new(None),
            basic_frequency: Signal::new(Vec::new()),
        }
    }
}
