//! Chart container component the D3 bridge renders into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (the render wrappers poll for
    /// this element before drawing)
    pub id: String,
    /// Whether the chart is still waiting on data
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels, so the layout holds still while D3 draws
    #[props(default = 380)]
    pub min_height: u32,
}

/// A container div for D3.js charts with a loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #757575;",
                    "Rendering chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
