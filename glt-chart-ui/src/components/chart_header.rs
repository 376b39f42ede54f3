//! Page header: chart title plus the host-visible summary line.

use dioxus::prelude::*;
use glt_core::dataset::DatasetSummary;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Year range and base temperature; all-zero until the dataset loads
    pub summary: DatasetSummary,
}

/// Title and "{min} - {max}: base temperature {t}℃" description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let description = format!(
        "{} - {}: base temperature {}℃",
        props.summary.min_year, props.summary.max_year, props.summary.base_temperature
    );
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 8px;",
            h1 {
                id: "title",
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
            h3 {
                id: "description",
                style: "margin: 0; font-size: 14px; color: #666; font-weight: normal;",
                "{description}"
            }
        }
    }
}
