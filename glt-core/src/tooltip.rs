//! Tooltip interaction state machine.
//!
//! Two states, `Hidden` and `Shown(record)`, with event-synchronous
//! transitions driven by pointer events on cells. This is the only
//! interaction-driven mutable state in the pipeline, and it has exactly
//! one writer.

use crate::grid::{CellKey, CellView};
use crate::layout;
use crate::surface::SurfaceManager;

/// The floating annotation over the hovered cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    /// Page-space anchor of the annotation box.
    pub x: f64,
    pub y: f64,
    /// Key of the hovered cell while shown.
    pub active: Option<CellKey>,
}

#[derive(Debug, Default)]
pub struct TooltipController {
    state: TooltipState,
}

impl TooltipController {
    pub fn new() -> TooltipController {
        TooltipController::default()
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Hidden→Shown, or Shown→Shown re-anchored onto another cell without
    /// passing through Hidden. Ignored when `handler_generation` is not
    /// the live surface generation (a stale handler firing after
    /// teardown) or when the key resolves to no cell.
    pub fn pointer_enter(
        &mut self,
        surfaces: &SurfaceManager,
        handler_generation: u64,
        key: CellKey,
        page_x: f64,
        page_y: f64,
    ) {
        let Some(surface) = surfaces.surface() else {
            return;
        };
        if surface.generation != handler_generation {
            return;
        }
        let Some(cell) = surface.cell(key) else {
            return;
        };
        self.state = TooltipState {
            visible: true,
            content: format_content(cell),
            x: page_x - layout::TOOLTIP_OFFSET_X,
            y: page_y - cell.height - layout::TOOLTIP_OFFSET_Y,
            active: Some(key),
        };
    }

    /// Shown→Hidden. Content is retained; only visibility and the active
    /// key change. Stale handlers are ignored like in `pointer_enter`.
    pub fn pointer_leave(&mut self, surfaces: &SurfaceManager, handler_generation: u64) {
        let live = surfaces.surface().map(|surface| surface.generation);
        if live != Some(handler_generation) {
            return;
        }
        self.state.visible = false;
        self.state.active = None;
    }

    /// Back to the default hidden state. Called on every re-render and
    /// teardown.
    pub fn reset(&mut self) {
        self.state = TooltipState::default();
    }
}

/// Year, month name, absolute temperature and signed variance, one per line.
fn format_content(cell: &CellView) -> String {
    format!(
        "Year: {} - Month: {}\n{:.1}℃\n{:+.1}℃",
        cell.record.year,
        cell.record.month_name(),
        cell.absolute_temperature,
        cell.record.variance
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, VarianceRecord};

    fn dataset() -> Dataset {
        Dataset {
            base_temperature: 8.66,
            records: vec![
                VarianceRecord {
                    year: 1753,
                    month: 0,
                    variance: -1.366,
                },
                VarianceRecord {
                    year: 2015,
                    month: 11,
                    variance: 2.322,
                },
            ],
        }
    }

    #[test]
    fn test_round_trip_hidden_shown_hidden() {
        let mut manager = SurfaceManager::new();
        manager.render(&dataset());
        let generation = manager.generation();
        let mut tooltip = TooltipController::new();
        assert!(!tooltip.state().visible);

        let key = CellKey { year: 1753, month: 0 };
        tooltip.pointer_enter(&manager, generation, key, 400.0, 300.0);
        let shown = tooltip.state();
        assert!(shown.visible);
        assert_eq!(shown.active, Some(key));
        assert!(shown.content.contains("1753"));
        assert!(shown.content.contains("January"));
        // 8.66 - 1.366 = 7.294, shown to one decimal
        assert!(shown.content.contains("7.3℃"));
        assert!(shown.content.contains("-1.4℃"));

        tooltip.pointer_leave(&manager, generation);
        assert!(!tooltip.state().visible);
        assert_eq!(tooltip.state().active, None);
    }

    #[test]
    fn test_anchor_offsets() {
        let mut manager = SurfaceManager::new();
        manager.render(&dataset());
        let generation = manager.generation();
        let cell_height = manager.surface().unwrap().scales.month.bandwidth();
        let mut tooltip = TooltipController::new();

        tooltip.pointer_enter(
            &manager,
            generation,
            CellKey { year: 2015, month: 11 },
            400.0,
            300.0,
        );
        assert_eq!(tooltip.state().x, 300.0);
        assert!((tooltip.state().y - (300.0 - cell_height - 80.0)).abs() < 1e-9);
    }

    #[test]
    fn test_shown_to_shown_reanchors() {
        let mut manager = SurfaceManager::new();
        manager.render(&dataset());
        let generation = manager.generation();
        let mut tooltip = TooltipController::new();

        tooltip.pointer_enter(&manager, generation, CellKey { year: 1753, month: 0 }, 100.0, 100.0);
        tooltip.pointer_enter(&manager, generation, CellKey { year: 2015, month: 11 }, 800.0, 50.0);
        let state = tooltip.state();
        // Still shown, repopulated for the new cell.
        assert!(state.visible);
        assert_eq!(state.active, Some(CellKey { year: 2015, month: 11 }));
        assert!(state.content.contains("December"));
        assert!(state.content.contains("+2.3℃"));
        // 8.66 + 2.322 = 10.982
        assert!(state.content.contains("11.0℃"));
    }

    #[test]
    fn test_stale_handler_after_teardown_is_ignored() {
        let mut manager = SurfaceManager::new();
        manager.render(&dataset());
        let stale_generation = manager.generation();
        let mut tooltip = TooltipController::new();

        manager.teardown();
        tooltip.pointer_enter(
            &manager,
            stale_generation,
            CellKey { year: 1753, month: 0 },
            400.0,
            300.0,
        );
        assert_eq!(tooltip.state(), &TooltipState::default());

        // Same after a re-render created a newer surface.
        manager.render(&dataset());
        tooltip.pointer_enter(
            &manager,
            stale_generation,
            CellKey { year: 1753, month: 0 },
            400.0,
            300.0,
        );
        assert_eq!(tooltip.state(), &TooltipState::default());
        tooltip.pointer_leave(&manager, stale_generation);
        assert_eq!(tooltip.state(), &TooltipState::default());
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut manager = SurfaceManager::new();
        manager.render(&dataset());
        let generation = manager.generation();
        let mut tooltip = TooltipController::new();
        tooltip.pointer_enter(
            &manager,
            generation,
            CellKey { year: 1800, month: 6 },
            400.0,
            300.0,
        );
        assert!(!tooltip.state().visible);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut manager = SurfaceManager::new();
        manager.render(&dataset());
        let generation = manager.generation();
        let mut tooltip = TooltipController::new();
        tooltip.pointer_enter(&manager, generation, CellKey { year: 1753, month: 0 }, 10.0, 10.0);
        assert!(tooltip.state().visible);
        tooltip.reset();
        assert_eq!(tooltip.state(), &TooltipState::default());
    }
}
