//! Legend strip: a discretized sample of the color ramp. Strip and swatch
//! widths are layout constants; only the colors vary with data.

use crate::color::Rgb;
use crate::layout;
use crate::scale::ScaleSet;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendSwatch {
    pub value: f64,
    pub color: Rgb,
    /// Offset within the strip.
    pub x: f64,
    pub width: f64,
}

/// Equal-width swatches in ascending value order.
pub fn build_legend(scales: &ScaleSet) -> Vec<LegendSwatch> {
    let count = scales.legend_samples.len();
    if count == 0 {
        return Vec::new();
    }
    let width = layout::LEGEND_WIDTH / count as f64;
    scales
        .legend_samples
        .iter()
        .enumerate()
        .map(|(i, &(value, color))| LegendSwatch {
            value,
            color,
            x: i as f64 * width,
            width,
        })
        .collect()
}

/// Strip origin within the plot: horizontally centered, below the x axis.
pub fn legend_origin() -> (f64, f64) {
    (
        (layout::PLOT_WIDTH - layout::LEGEND_WIDTH) / 2.0,
        layout::PLOT_HEIGHT + layout::LEGEND_OFFSET_Y,
    )
}
