//! Empty-state placeholder for absent analysis sections.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
}

/// Placeholder shown when a result section is missing or has no usable
/// rows. Analysis data is externally owned, so "absent" is a normal
/// state, not an error.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "padding: 24px; margin: 8px 0; text-align: center; color: #757575; background: #FAFAFA; border: 1px dashed #BDBDBD; border-radius: 4px;",
            "{props.message}"
        }
    }
}
