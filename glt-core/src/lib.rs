//! Core pipeline for the monthly global land-surface temperature heat map.
//!
//! Everything here is pure data: a `Dataset` of (year, month, variance)
//! records goes in, and positioned, colored, labeled geometry comes out.
//! The crate has no DOM types, so the whole pipeline runs under native
//! `cargo test`. The Dioxus layer in `glt-chart-ui` only translates these
//! structs into SVG elements and routes pointer events back into
//! [`tooltip::TooltipController`].

pub mod axis;
pub mod color;
pub mod dataset;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod scale;
pub mod surface;
pub mod tooltip;
