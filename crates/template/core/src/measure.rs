//! Ruleset distance between two board points.
//!
//! Under [`MeasureStyle::Pathfinder`] a path is counted in whole cells: any
//! fractional cell along an axis is a full extra step, and diagonal steps cost
//! 1.5 straight steps with the total truncated, which is the tabletop "every
//! second diagonal costs double" rule. [`MeasureStyle::Euclidean`] is the host's
//! plain straight-line measurement converted to game units.

use crate::config::MeasureStyle;
use crate::error::MeasureError;
use crate::geometry::{PixelPoint, Ray};
use crate::grid::GridOracle;

/// Distance in game units between two pixel points on `grid`.
///
/// Fails only if the grid cannot be measured on (see [`GridOracle::validate`]).
pub fn measure<G>(p0: PixelPoint, p1: PixelPoint, grid: &G) -> Result<f64, MeasureError>
where
    G: GridOracle + ?Sized,
{
    grid.validate()?;
    Ok(measure_on_valid_grid(p0, p1, grid))
}

/// [`measure`] without re-validating the grid; callers must have validated it.
pub(crate) fn measure_on_valid_grid<G>(p0: PixelPoint, p1: PixelPoint, grid: &G) -> f64
where
    G: GridOracle + ?Sized,
{
    let ray = Ray::new(p0, p1);
    match grid.measure_style() {
        MeasureStyle::Pathfinder => {
            grid_steps(ray.dx(), ray.dy(), grid.cell_size()) as f64 * grid.distance_per_cell()
        }
        MeasureStyle::Euclidean => ray.length() / grid.cell_size() * grid.distance_per_cell(),
    }
}

/// Number of grid steps needed to cover a pixel delta.
///
/// `floor(1.5 * diagonal + straight)` where diagonal = `min(nx, ny)` and
/// straight = `|nx - ny|`, computed as `max + min / 2`. Saturates at `u64::MAX`.
pub fn grid_steps(dx: f64, dy: f64, cell_size: f64) -> u64 {
    let nx = cells_spanned(dx, cell_size);
    let ny = cells_spanned(dy, cell_size);
    nx.max(ny).saturating_add(nx.min(ny) / 2)
}

/// Whole cells crossed along one axis; a partial cell counts as a full one.
///
/// The float-to-int cast saturates for deltas beyond `u64::MAX` cells.
fn cells_spanned(delta: f64, cell_size: f64) -> u64 {
    (delta.abs() / cell_size).ceil() as u64
}
