//! Sidebar navigation with collapsible section groups.
//!
//! Three groups (data, analysis, quick actions), each with its own
//! open/closed toggle flipped only by its own header. Clicking a link
//! notifies the parent of the selected section and asks it to close the
//! sidebar, which the parent honors on small screens.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Currently active section id, used to highlight the matching link
    #[props(default = String::new())]
    pub active_section: String,
    /// Fired with the section id when a link is clicked
    pub on_section_change: EventHandler<String>,
    /// Fired alongside every section change so the parent can close the
    /// sidebar on mobile layouts
    pub on_close: EventHandler<()>,
}

/// Navigation sidebar for the analysis dashboard.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let mut data_open = use_signal(|| true);
    let mut analysis_open = use_signal(|| true);
    let mut actions_open = use_signal(|| true);

    let on_section_change = props.on_section_change;
    let on_close = props.on_close;
    let navigate = move |section: &'static str| {
        on_section_change.call(section.to_string());
        on_close.call(());
    };

    rsx! {
        nav {
            style: "width: 230px; padding: 12px 0; background: #FAFAFA; border-right: 1px solid #E0E0E0; font-size: 14px;",

            SidebarGroup {
                title: "Data".to_string(),
                open: data_open(),
                on_toggle: move |_| { let v = data_open(); data_open.set(!v); },
                SidebarLink {
                    label: "Sample data guide".to_string(),
                    active: props.active_section == "guide",
                    on_click: move |_| navigate("guide"),
                }
                SidebarLink {
                    label: "Annual series".to_string(),
                    active: props.active_section == "histogram",
                    on_click: move |_| navigate("histogram"),
                }
            }

            SidebarGroup {
                title: "Analysis".to_string(),
                open: analysis_open(),
                on_toggle: move |_| { let v = analysis_open(); analysis_open.set(!v); },
                SidebarLink {
                    label: "Frequency curve".to_string(),
                    active: props.active_section == "frequency-curve",
                    on_click: move |_| navigate("frequency-curve"),
                }
                SidebarLink {
                    label: "Frequency table".to_string(),
                    active: props.active_section == "frequency-table",
                    on_click: move |_| navigate("frequency-table"),
                }
                SidebarLink {
                    label: "Station evaluation".to_string(),
                    active: props.active_section == "metrics",
                    on_click: move |_| navigate("metrics"),
                }
            }

            SidebarGroup {
                title: "Quick actions".to_string(),
                open: actions_open(),
                on_toggle: move |_| { let v = actions_open(); actions_open.set(!v); },
                SidebarLink {
                    label: "Best-fit summary".to_string(),
                    active: false,
                    on_click: move |_| navigate("metrics"),
                }
                SidebarLink {
                    label: "Download sample CSV".to_string(),
                    active: false,
                    on_click: move |_| navigate("guide"),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SidebarGroupProps {
    title: String,
    open: bool,
    on_toggle: EventHandler<MouseEvent>,
    children: Element,
}

/// Collapsible group with a clickable header. Only the header toggles
/// the group; links stay hidden while it is closed.
#[component]
fn SidebarGroup(props: SidebarGroupProps) -> Element {
    let marker = if props.open { "▾" } else { "▸" };
    rsx! {
        div {
            style: "margin-bottom: 4px;",
            div {
                style: "padding: 6px 16px; font-weight: bold; color: #424242; cursor: pointer; user-select: none;",
                onclick: move |evt| props.on_toggle.call(evt),
                "{marker} {props.title}"
            }
            if props.open {
                {props.children}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SidebarLinkProps {
    label: String,
    active: bool,
    on_click: EventHandler<MouseEvent>,
}

#[component]
fn SidebarLink(props: SidebarLinkProps) -> Element {
    let style = if props.active {
        "display: block; padding: 5px 16px 5px 28px; cursor: pointer; background: #E3F2FD; color: #1565C0; border-right: 3px solid #2196F3;"
    } else {
        "display: block; padding: 5px 16px 5px 28px; cursor: pointer; color: #616161;"
    };
    rsx! {
        div {
            style: "{style}",
            onclick: move |evt| props.on_click.call(evt),
            "{props.label}"
        }
    }
}
