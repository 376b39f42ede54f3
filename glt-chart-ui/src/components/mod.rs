//! Reusable Dioxus RSX components for the heat-map app.

mod chart_header;
mod error_display;
mod heat_map;
mod loading_spinner;
mod tooltip_overlay;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use heat_map::HeatMap;
pub use loading_spinner::LoadingSpinner;
pub use tooltip_overlay::TooltipOverlay;
