//! Monthly Global Land-Surface Temperature
//!
//! Calendar heat map of monthly temperature variance: one colored cell per
//! (year, month), decade/month axes, a color legend and hover tooltips.
//!
//! Data flow:
//! 1. On mount: fetch the variance dataset (single JSON document).
//! 2. On dataset change: derive scales and rebuild the rendering surface,
//!    tearing down the previous one first.
//! 3. Pointer events on cells drive the tooltip state machine; handlers
//!    from a torn-down surface are ignored.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use glt_chart_ui::components::{ChartHeader, ErrorDisplay, HeatMap, LoadingSpinner, TooltipOverlay};
use glt_chart_ui::fetch;
use glt_chart_ui::state::AppState;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("heat-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Fetch the dataset once on mount ───
    use_effect(move || {
        spawn(async move {
            match fetch::fetch_dataset(fetch::DATASET_URL).await {
                Ok(dataset) => {
                    info!("loaded {} variance records", dataset.records.len());
                    state.dataset.set(Some(dataset));
                    state.loading.set(false);
                }
                Err(e) => {
                    // Summary values stay at their zero defaults.
                    state.error_msg.set(Some(format!("Failed to load temperature data: {e}")));
                    state.loading.set(false);
                }
            }
        });
    });

    // ─── Effect 2: Rebuild the rendering surface when the dataset changes ───
    use_effect(move || {
        let Some(dataset) = state.dataset.read().clone() else {
            return;
        };
        let rendered = state.surfaces.write().render(&dataset).is_some();
        state.summary.set(dataset.summary());
        state.tooltip.write().reset();
        if rendered {
            state.error_msg.set(None);
        } else {
            state.error_msg.set(Some("Dataset contained no records.".to_string()));
        }
    });

    // Release the surface on unmount; stale pointer handlers become no-ops.
    use_drop(move || {
        state.surfaces.write().teardown();
        state.tooltip.write().reset();
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1020px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "Monthly Global Land-Surface Temperature".to_string(),
                summary: (state.summary)(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                HeatMap {}
            }

            TooltipOverlay {}
        }
    }
}
