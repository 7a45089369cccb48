//! Static usage guide for the expected station data format.

use dioxus::prelude::*;

/// Sample input file embedded at compile time and offered for download.
static SAMPLE_CSV: &str = include_str!("../../assets/sample-rainfall.csv");

const TH_STYLE: &str =
    "padding: 6px 10px; border: 1px solid #E0E0E0; background: #F5F5F5; text-align: left;";
const TD_STYLE: &str = "padding: 6px 10px; border: 1px solid #E0E0E0;";

/// Informational panel describing the input format the analysis backend
/// expects, with a short example table and a sample file download link.
#[component]
pub fn SampleDataGuide() -> Element {
    // Data URL so the download works without a server round trip.
    let href = format!(
        "data:text/csv;charset=utf-8,{}",
        String::from(js_sys::encode_uri_component(SAMPLE_CSV))
    );

    rsx! {
        div {
            style: "max-width: 640px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "Sample data guide"
            }
            p {
                style: "margin: 0 0 12px 0; font-size: 13px; color: #616161;",
                "Upload one row per observation with a year, a month, and the "
                "measured rainfall depth. The analysis aggregates each year to "
                "its maximum before fitting, so partial years are tolerated."
            }

            table {
                style: "border-collapse: collapse; font-size: 13px; margin-bottom: 12px;",
                thead {
                    tr {
                        th { style: TH_STYLE, "Year" }
                        th { style: TH_STYLE, "Month" }
                        th { style: TH_STYLE, "Rainfall (mm)" }
                    }
                }
                tbody {
                    tr {
                        td { style: TD_STYLE, "1984" }
                        td { style: TD_STYLE, "6" }
                        td { style: TD_STYLE, "212.4" }
                    }
                    tr {
                        td { style: TD_STYLE, "1984" }
                        td { style: TD_STYLE, "7" }
                        td { style: TD_STYLE, "318.9" }
                    }
                    tr {
                        td { style: TD_STYLE, "1985" }
                        td { style: TD_STYLE, "6" }
                        td { style: TD_STYLE, "176.2" }
                    }
                    tr {
                        td { style: TD_STYLE, "1985" }
                        td { style: TD_STYLE, "7" }
                        td { style: TD_STYLE, "254.8" }
                    }
                }
            }

            a {
                href: "{href}",
                download: "sample-rainfall.csv",
                style: "display: inline-block; padding: 6px 14px; background: #2196F3; color: white; border-radius: 4px; text-decoration: none; font-size: 13px;",
                "Download sample CSV"
            }
        }
    }
}
