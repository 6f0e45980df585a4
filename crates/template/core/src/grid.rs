//! Grid adapter consumed by the measurement core.
//!
//! The board owns the grid; measurement only reads it. [`GridOracle`] is the seam
//! hosts implement (or they use the bundled [`SquareGrid`]), exposing cell size,
//! scale, alignment and the active [`MeasureStyle`].

use crate::config::MeasureStyle;
use crate::error::{CoreError, ErrorSeverity};
use crate::geometry::{Cell, GridPosition, PixelPoint};

/// Fraction of a cell edge within which a pixel still counts as on the border.
pub const BORDER_TOLERANCE: f64 = 1e-9;

/// Read-only square grid description supplied by the host board.
pub trait GridOracle: Send + Sync {
    /// Edge length of one cell in pixels.
    fn cell_size(&self) -> f64;

    /// Game units (e.g. feet) represented by one cell edge.
    fn distance_per_cell(&self) -> f64;

    /// Pixel position where column 0 / row 0 begins.
    fn origin(&self) -> PixelPoint {
        PixelPoint::ORIGIN
    }

    /// Ruleset used to turn pixel separations into game distance.
    fn measure_style(&self) -> MeasureStyle {
        MeasureStyle::default()
    }

    /// Grid cell containing the given pixel.
    fn pixel_to_grid(&self, point: PixelPoint) -> GridPosition {
        let size = self.cell_size();
        let origin = self.origin();
        GridPosition::new(
            ((point.x - origin.x) / size).floor() as i32,
            ((point.y - origin.y) / size).floor() as i32,
        )
    }

    /// Top-left pixel of the given cell.
    fn grid_to_pixel(&self, position: GridPosition) -> PixelPoint {
        let size = self.cell_size();
        let origin = self.origin();
        PixelPoint::new(
            origin.x + f64::from(position.col) * size,
            origin.y + f64::from(position.row) * size,
        )
    }

    /// Builds the full [`Cell`] record for a grid position.
    fn cell(&self, position: GridPosition) -> Cell {
        let top_left = self.grid_to_pixel(position);
        let half = self.cell_size() * 0.5;
        Cell {
            position,
            top_left,
            center: top_left.offset(half, half),
        }
    }

    /// Returns true if `value` (pixels along one axis) lies on a cell border,
    /// within [`BORDER_TOLERANCE`] of a cell edge.
    fn is_on_border(&self, value: f64, axis_origin: f64) -> bool {
        let size = self.cell_size();
        let offset = (value - axis_origin).rem_euclid(size);
        let tolerance = size * BORDER_TOLERANCE;
        offset <= tolerance || size - offset <= tolerance
    }

    /// Checks the preconditions every measurement relies on.
    fn validate(&self) -> Result<(), GridError> {
        let size = self.cell_size();
        if !size.is_finite() || size <= 0.0 {
            return Err(GridError::InvalidCellSize(size));
        }
        let scale = self.distance_per_cell();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GridError::InvalidDistancePerCell(scale));
        }
        let origin = self.origin();
        if !origin.is_finite() {
            return Err(GridError::NonFiniteOrigin(origin));
        }
        let probe = GridPosition::ORIGIN.shifted(1, 1);
        let resolved = self.pixel_to_grid(self.cell(probe).center);
        if resolved != probe {
            return Err(GridError::AdapterMismatch {
                expected: probe,
                resolved,
            });
        }
        Ok(())
    }
}

/// Plain square grid with optional pixel alignment offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareGrid {
    pub cell_size: f64,
    pub distance_per_cell: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: PixelPoint,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: MeasureStyle,
}

impl SquareGrid {
    /// Creates a grid aligned at pixel (0, 0) using the default measure style.
    pub fn new(cell_size: f64, distance_per_cell: f64) -> Result<Self, GridError> {
        let grid = Self {
            cell_size,
            distance_per_cell,
            origin: PixelPoint::ORIGIN,
            style: MeasureStyle::default(),
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Shifts the start of column/row 0 to `origin` (builder pattern).
    #[must_use]
    pub fn with_origin(mut self, origin: PixelPoint) -> Self {
        self.origin = origin;
        self
    }

    /// Selects the measurement ruleset (builder pattern).
    #[must_use]
    pub fn with_style(mut self, style: MeasureStyle) -> Self {
        self.style = style;
        self
    }
}

impl GridOracle for SquareGrid {
    fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn distance_per_cell(&self) -> f64 {
        self.distance_per_cell
    }

    fn origin(&self) -> PixelPoint {
        self.origin
    }

    fn measure_style(&self) -> MeasureStyle {
        self.style
    }
}

/// Grid configuration that cannot support measurement.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Cell size is zero, negative or not finite.
    #[error("cell size must be a positive finite pixel count, got {0}")]
    InvalidCellSize(f64),

    /// Distance-per-cell is zero, negative or not finite.
    #[error("distance per cell must be a positive finite value, got {0}")]
    InvalidDistancePerCell(f64),

    /// Grid alignment offset is not finite.
    #[error("grid origin {0} is not finite")]
    NonFiniteOrigin(PixelPoint),

    /// The adapter's pixel/grid conversions disagree with each other.
    #[error("grid adapter resolved the center of cell {expected} to {resolved}")]
    AdapterMismatch {
        expected: GridPosition,
        resolved: GridPosition,
    },
}

impl CoreError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCellSize(_) | Self::InvalidDistancePerCell(_) | Self::NonFiniteOrigin(_) => {
                ErrorSeverity::Validation
            }
            Self::AdapterMismatch { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCellSize(_) => "GRID_INVALID_CELL_SIZE",
            Self::InvalidDistancePerCell(_) => "GRID_INVALID_DISTANCE_PER_CELL",
            Self::NonFiniteOrigin(_) => "GRID_NON_FINITE_ORIGIN",
            Self::AdapterMismatch { .. } => "GRID_ADAPTER_MISMATCH",
        }
    }
}
