//! Tokens caught inside a template's highlighted area.
//!
//! Both highlighted cells and token boxes are projected into whole grid units
//! (pixel value divided by cell size, rounded to nearest) before comparing, so a
//! token is caught when any highlighted cell's grid point falls inside its
//! half-open footprint.

use std::fmt;

use crate::error::MeasureError;
use crate::geometry::round_half_up;
use crate::grid::GridOracle;
use crate::highlight::highlighted_cells;
use crate::template::MeasuredTemplate;

/// Unique identifier for a token on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenId(pub u32);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Snapshot of a token's placement in pixels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub id: TokenId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Token {
    pub fn new(id: TokenId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            name: String::new(),
            x,
            y,
            width,
            height,
        }
    }

    /// Sets the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Occupied area in whole grid units.
    pub fn footprint(&self, cell_size: f64) -> TokenFootprint {
        TokenFootprint {
            x: grid_units(self.x, cell_size),
            y: grid_units(self.y, cell_size),
            width: grid_units(self.width, cell_size),
            height: grid_units(self.height, cell_size),
        }
    }
}

/// Token area in grid units; contains points with `x <= p.x < x + width` (same for y).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenFootprint {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl TokenFootprint {
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

fn grid_units(pixels: f64, cell_size: f64) -> i64 {
    round_half_up(pixels / cell_size) as i64
}

/// Tokens overlapping any cell highlighted by `template`, each reported once in
/// snapshot order.
pub fn tokens_within<'a, G>(
    template: &MeasuredTemplate,
    grid: &G,
    tokens: &'a [Token],
) -> Result<Vec<&'a Token>, MeasureError>
where
    G: GridOracle + ?Sized,
{
    let cell_size = grid.cell_size();
    let covered: Vec<(i64, i64)> = highlighted_cells(template, grid)?
        .iter()
        .map(|cell| {
            (
                grid_units(cell.top_left.x, cell_size),
                grid_units(cell.top_left.y, cell_size),
            )
        })
        .collect();

    let caught: Vec<&Token> = tokens
        .iter()
        .filter(|token| {
            let footprint = token.footprint(cell_size);
            covered.iter().any(|&(x, y)| footprint.contains(x, y))
        })
        .collect();

    tracing::debug!(
        template = %template.id,
        cells = covered.len(),
        tokens = tokens.len(),
        caught = caught.len(),
        "located tokens within template"
    );
    Ok(caught)
}
