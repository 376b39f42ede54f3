//! Fixed chart geometry. Only the colors vary with data; all sizes and
//! offsets are layout constants.

/// Overall SVG size, margins included.
pub const TOTAL_WIDTH: f64 = 1000.0;
pub const TOTAL_HEIGHT: f64 = 500.0;

pub const MARGIN_TOP: f64 = 10.0;
pub const MARGIN_RIGHT: f64 = 30.0;
pub const MARGIN_BOTTOM: f64 = 60.0;
pub const MARGIN_LEFT: f64 = 60.0;

/// Drawable plot area inside the margins.
pub const PLOT_WIDTH: f64 = TOTAL_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
pub const PLOT_HEIGHT: f64 = TOTAL_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

/// Legend strip: fixed width and height, centered under the plot.
pub const LEGEND_WIDTH: f64 = 300.0;
pub const LEGEND_HEIGHT: f64 = 15.0;
pub const LEGEND_OFFSET_Y: f64 = 20.0;

/// Tooltip anchor offsets from the pointer, leftward and upward, so the
/// annotation does not occlude the hovered cell.
pub const TOOLTIP_OFFSET_X: f64 = 100.0;
pub const TOOLTIP_OFFSET_Y: f64 = 80.0;
