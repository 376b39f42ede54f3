//! The SVG heat-map surface: cells, axes and legend for the live
//! `RenderedSurface`, with pointer events wired into the tooltip
//! controller.
//!
//! Per-cell handlers capture only the cell key and the surface generation;
//! positions and scales are resolved from the current surface at event
//! time, so a handler left over from a torn-down surface is a no-op.

use dioxus::prelude::*;
use glt_core::layout::{
    LEGEND_HEIGHT, MARGIN_LEFT, MARGIN_TOP, PLOT_HEIGHT, PLOT_WIDTH, TOTAL_HEIGHT, TOTAL_WIDTH,
};
use glt_core::legend::legend_origin;

use crate::state::AppState;

#[component]
pub fn HeatMap() -> Element {
    let mut state = use_context::<AppState>();
    let surfaces = state.surfaces.read();
    let Some(surface) = surfaces.surface() else {
        // Nothing to draw until a dataset has rendered.
        return rsx! { div { id: "heat-map" } };
    };
    let generation = surface.generation;
    let active = state.tooltip.read().state().active;
    let (legend_x, legend_y) = legend_origin();

    let cells = surface.cells.iter().map(|cell| {
        let key = cell.key;
        let fill = cell.color.to_hex();
        let stroke = if active == Some(key) { "black" } else { "none" };
        rsx! {
            rect {
                key: "{key.year}-{key.month}",
                class: "cell",
                x: "{cell.x}",
                y: "{cell.y}",
                width: "{cell.width}",
                height: "{cell.height}",
                fill: "{fill}",
                stroke: "{stroke}",
                stroke_width: "1",
                "data-year": "{key.year}",
                "data-month": "{key.month}",
                "data-temp": "{cell.absolute_temperature}",
                onmouseenter: move |event: MouseEvent| {
                    let point = event.page_coordinates();
                    let surfaces = state.surfaces.read();
                    state
                        .tooltip
                        .write()
                        .pointer_enter(&surfaces, generation, key, point.x, point.y);
                },
                onmouseleave: move |_| {
                    let surfaces = state.surfaces.read();
                    state.tooltip.write().pointer_leave(&surfaces, generation);
                },
            }
        }
    });

    let year_ticks = surface.year_ticks.iter().map(|tick| {
        rsx! {
            g {
                key: "{tick.label}",
                transform: "translate({tick.position},0)",
                line { y2: "6", stroke: "black" }
                text {
                    y: "9",
                    dy: "0.71em",
                    text_anchor: "middle",
                    font_size: "10",
                    fill: "black",
                    "{tick.label}"
                }
            }
        }
    });

    let month_ticks = surface.month_ticks.iter().map(|tick| {
        rsx! {
            g {
                key: "{tick.label}",
                transform: "translate(0,{tick.position})",
                line { x2: "-6", stroke: "black" }
                text {
                    x: "-9",
                    dy: "0.32em",
                    text_anchor: "end",
                    font_size: "10",
                    fill: "black",
                    "{tick.label}"
                }
            }
        }
    });

    let legend = surface.legend.iter().map(|swatch| {
        let fill = swatch.color.to_hex();
        rsx! {
            rect {
                key: "{swatch.x}",
                class: "legendRect",
                x: "{swatch.x}",
                y: "0",
                width: "{swatch.width}",
                height: "{LEGEND_HEIGHT}",
                fill: "{fill}",
            }
        }
    });

    rsx! {
        div {
            id: "heat-map",
            svg {
                width: "{TOTAL_WIDTH}",
                height: "{TOTAL_HEIGHT}",
                g {
                    transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                    {cells}
                    g {
                        id: "x-axis",
                        transform: "translate(0,{PLOT_HEIGHT})",
                        line {
                            x2: "{PLOT_WIDTH}",
                            stroke: "black",
                        }
                        {year_ticks}
                    }
                    g {
                        id: "y-axis",
                        line {
                            y2: "{PLOT_HEIGHT}",
                            stroke: "black",
                        }
                        {month_ticks}
                    }
                    g {
                        id: "legend",
                        transform: "translate({legend_x},{legend_y})",
                        {legend}
                    }
                }
            }
        }
    }
}
