//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use glt_core::dataset::{Dataset, DatasetSummary};
use glt_core::surface::SurfaceManager;
use glt_core::tooltip::TooltipController;

/// Shared application state for the heat-map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset is still being retrieved
    pub loading: Signal<bool>,
    /// Error message if retrieval or parsing failed
    pub error_msg: Signal<Option<String>>,
    /// The current dataset (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Host-visible summary values, zero until the first load
    pub summary: Signal<DatasetSummary>,
    /// Owner of the single live rendering surface
    pub surfaces: Signal<SurfaceManager>,
    /// Owner of the tooltip state machine
    pub tooltip: Signal<TooltipController>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dataset: Signal::new(None),
            summary: Signal::new(DatasetSummary::default()),
            surfaces: Signal::new(SurfaceManager::new()),
            tooltip: Signal::new(TooltipController::new()),
        }
    }
}
