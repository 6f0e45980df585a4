//! Grid highlighting for placed templates.
//!
//! - [`origin`]: half-cell apex correction for cones
//! - [`enumerate`]: bounded scan selecting covered cells
//! - [`canvas`]: host renderer boundary

pub mod canvas;
pub mod enumerate;
pub mod origin;

pub use canvas::{HighlightCanvas, highlight_grid};
pub use enumerate::{
    CandidateWindow, MAX_GRID_INDEX, MAX_WINDOW_RADIUS, highlighted_cells, window_radius,
};
pub use origin::{OriginOffset, cone_origin_offset};
