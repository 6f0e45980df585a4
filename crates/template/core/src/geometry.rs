//! Pixel and grid coordinate primitives.
//!
//! Hosts describe the board in pixels (the canvas space templates and tokens are
//! drawn in), while the measurement rules reason in whole grid cells. This module
//! holds the small value types that bridge the two spaces.

use std::fmt;

/// A point in board pixel space. The y axis grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by the given pixel deltas.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})px", self.x, self.y)
    }
}

/// Discrete grid position expressed in (column, row) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    pub col: i32,
    pub row: i32,
}

impl GridPosition {
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns the position offset by the given number of columns and rows.
    #[must_use]
    pub const fn shifted(self, cols: i32, rows: i32) -> Self {
        Self::new(self.col + cols, self.row + rows)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

/// One highlighted grid square.
///
/// Cells are transient: the enumerator produces a fresh set every time a template
/// is measured. `top_left` is the cell's stable identity for renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub position: GridPosition,
    pub top_left: PixelPoint,
    pub center: PixelPoint,
}

/// Straight segment between two pixel points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

impl Ray {
    pub const fn new(from: PixelPoint, to: PixelPoint) -> Self {
        Self { from, to }
    }

    pub fn dx(&self) -> f64 {
        self.to.x - self.from.x
    }

    pub fn dy(&self) -> f64 {
        self.to.y - self.from.y
    }

    /// Euclidean length in pixels.
    pub fn length(&self) -> f64 {
        self.dx().hypot(self.dy())
    }

    /// Screen angle of the ray in degrees, normalized into `[0, 360)`.
    ///
    /// 0° points right and angles grow clockwise on screen (pixel-y points down).
    pub fn angle_degrees(&self) -> f64 {
        normalize_degrees(self.dy().atan2(self.dx()).to_degrees())
    }
}

/// Wraps any angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs due to rounding.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rounds to the nearest integer with halves going toward positive infinity.
///
/// Board coordinates are rounded this way everywhere, so `-2.5` lands on `-2`
/// rather than `-3` as [`f64::round`] would produce.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Sign of `value` as `-1.0`, `0.0` or `1.0`. Zero (of either sign) maps to `0.0`.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
