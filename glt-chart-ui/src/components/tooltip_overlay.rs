//! Floating tooltip annotation driven by the controller state.

use dioxus::prelude::*;

use crate::state::AppState;

/// Absolutely positioned annotation box. Hidden state keeps the element in
/// the tree at opacity zero so Shown→Shown transitions never flicker.
#[component]
pub fn TooltipOverlay() -> Element {
    let state = use_context::<AppState>();
    let tooltip = state.tooltip.read();
    let tooltip_state = tooltip.state();
    let opacity = if tooltip_state.visible { "0.75" } else { "0" };
    let style = format!(
        "opacity: {}; position: absolute; left: {}px; top: {}px; \
         pointer-events: none; background-color: black; color: white; \
         border: 2px solid white; border-radius: 10px; padding: 5px; width: 200px;",
        opacity, tooltip_state.x, tooltip_state.y
    );

    rsx! {
        div {
            id: "tooltip",
            style: "{style}",
            for line in tooltip_state.content.lines() {
                div { "{line}" }
            }
        }
    }
}
