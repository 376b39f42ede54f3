//! Shared Dioxus building blocks for the temperature heat-map app.
//!
//! `state` bundles the reactive signals, `fetch` is the dataset retrieval
//! boundary, and `components` holds the page-shell and SVG chart pieces.

pub mod components;
pub mod fetch;
pub mod state;
