//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while embedded results are parsed.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 48px; color: #757575;",
            "Loading analysis results..."
        }
    }
}
