//! Cone apex correction.
//!
//! Cones are aimed from a grid intersection: their area is measured from the
//! border of the apex cell rather than its center. When the apex is dropped inside
//! a cell, the measurement origin is pushed half a cell toward the cone's facing
//! on every axis that is not already on a border.

use crate::geometry::{PixelPoint, round_half_up, sign};
use crate::grid::GridOracle;

/// Measurement origin shift, in cells, along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct OriginOffset {
    pub x: f64,
    pub y: f64,
}

impl OriginOffset {
    pub const NONE: Self = Self { x: 0.0, y: 0.0 };

    /// Applies the offset to `apex` on the given grid.
    pub fn apply<G>(self, apex: PixelPoint, grid: &G) -> PixelPoint
    where
        G: GridOracle + ?Sized,
    {
        let size = grid.cell_size();
        apex.offset(self.x * size, self.y * size)
    }
}

/// Half-cell offset for a cone facing `direction` with its apex at `apex`.
///
/// Each axis is `0` when the apex sits on a cell border, otherwise `±0.5`:
/// x follows the sign of the cosine and y the negated sine of the anticlockwise
/// angle (pixel-y grows downward). Trig values are rounded to two decimals so
/// axis-parallel facings give an exact zero.
pub fn cone_origin_offset<G>(apex: PixelPoint, direction: f64, grid: &G) -> OriginOffset
where
    G: GridOracle + ?Sized,
{
    let anticlockwise = (-direction).rem_euclid(360.0).to_radians();
    let origin = grid.origin();

    let x = if grid.is_on_border(apex.x, origin.x) {
        0.0
    } else {
        sign(two_decimals(anticlockwise.cos())) / 2.0
    };
    let y = if grid.is_on_border(apex.y, origin.y) {
        0.0
    } else {
        -sign(two_decimals(anticlockwise.sin())) / 2.0
    };

    OriginOffset { x, y }
}

fn two_decimals(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}
