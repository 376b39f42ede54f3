//! Rendered-surface assembly and lifecycle.
//!
//! `SurfaceManager` guarantees at most one live surface: every render
//! disposes the previous surface before building the new one, and every
//! transition bumps a generation counter. Pointer handlers capture the
//! generation of the surface they were attached to, so a handler that
//! fires after teardown identifies itself as stale and is ignored.

use crate::axis::{self, Tick};
use crate::dataset::{Dataset, DatasetSummary};
use crate::grid::{self, CellKey, CellView};
use crate::legend::{self, LegendSwatch};
use crate::scale::ScaleSet;

/// Everything one render pass produces, tagged with its generation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSurface {
    pub generation: u64,
    pub summary: DatasetSummary,
    pub scales: ScaleSet,
    pub cells: Vec<CellView>,
    pub year_ticks: Vec<Tick>,
    pub month_ticks: Vec<Tick>,
    pub legend: Vec<LegendSwatch>,
}

impl RenderedSurface {
    /// Resolve a cell by key. Scans from the back so a duplicate
    /// (year, month) resolves to the record that painted last.
    pub fn cell(&self, key: CellKey) -> Option<&CellView> {
        self.cells.iter().rev().find(|cell| cell.key == key)
    }
}

#[derive(Debug, Default)]
pub struct SurfaceManager {
    surface: Option<RenderedSurface>,
    generation: u64,
}

impl SurfaceManager {
    pub fn new() -> SurfaceManager {
        SurfaceManager::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn surface(&self) -> Option<&RenderedSurface> {
        self.surface.as_ref()
    }

    /// Dispose any prior surface, then build one for `dataset`. An empty
    /// dataset leaves no surface live (nothing to draw), without error.
    pub fn render(&mut self, dataset: &Dataset) -> Option<&RenderedSurface> {
        self.teardown();
        let scales = ScaleSet::derive(dataset)?;
        let cells = grid::build_cells(dataset, &scales);
        self.surface = Some(RenderedSurface {
            generation: self.generation,
            summary: dataset.summary(),
            cells,
            year_ticks: axis::year_ticks(&scales.year),
            month_ticks: axis::month_ticks(&scales.month),
            legend: legend::build_legend(&scales),
            scales,
        });
        self.surface.as_ref()
    }

    /// Drop the live surface and invalidate all handlers attached to it.
    pub fn teardown(&mut self) {
        self.surface = None;
        self.generation += 1;
    }
}
