//! Grid measurement for tabletop area-of-effect templates.
//!
//! `template-core` answers which grid cells a placed circle or cone covers under
//! the Pathfinder measurement rules (whole-cell steps, diagonals costing 1.5
//! steps truncated, cones measured from a cell border) and which tokens stand in
//! those cells. Every query is a pure function of the grid, the template and a
//! token snapshot; the host board supplies the grid through [`GridOracle`] and
//! paints results through [`HighlightCanvas`].
pub mod angle;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod highlight;
pub mod measure;
pub mod placement;
pub mod template;
pub mod tokens;

pub use angle::{AngularSpan, within_angle};
pub use config::{MeasureConfig, MeasureStyle};
pub use error::{CoreError, ErrorSeverity, MeasureError};
pub use geometry::{Cell, GridPosition, PixelPoint, Ray};
pub use grid::{BORDER_TOLERANCE, GridError, GridOracle, SquareGrid};
pub use highlight::{
    CandidateWindow, HighlightCanvas, OriginOffset, cone_origin_offset, highlight_grid,
    highlighted_cells,
};
pub use measure::{grid_steps, measure};
pub use placement::{TemplatePlacement, snap_direction, snap_to_grid};
pub use template::{
    Color, HighlightStyle, MeasuredTemplate, ShapeKind, TemplateError, TemplateId, TemplateShape,
};
pub use tokens::{Token, TokenFootprint, TokenId, tokens_within};
