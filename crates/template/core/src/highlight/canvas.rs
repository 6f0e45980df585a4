//! Boundary to the host renderer that paints highlighted cells.

use crate::error::MeasureError;
use crate::geometry::Cell;
use crate::grid::GridOracle;
use crate::highlight::enumerate::highlighted_cells;
use crate::template::{HighlightStyle, MeasuredTemplate, TemplateId};

/// Per-template highlight layers owned by the host renderer.
pub trait HighlightCanvas {
    /// Removes everything previously painted for `template`.
    fn clear(&mut self, template: TemplateId);

    /// Paints one cell on `template`'s layer.
    fn paint(&mut self, template: TemplateId, cell: &Cell, style: HighlightStyle);
}

/// Repaints `template`'s highlight layer and returns the number of painted cells.
///
/// The layer is cleared before painting so stale cells from a previous placement
/// never linger. Shapes without grid highlighting leave the layer empty.
pub fn highlight_grid<C, G>(
    canvas: &mut C,
    template: &MeasuredTemplate,
    grid: &G,
) -> Result<usize, MeasureError>
where
    C: HighlightCanvas + ?Sized,
    G: GridOracle + ?Sized,
{
    let cells = highlighted_cells(template, grid)?;

    canvas.clear(template.id);
    for cell in &cells {
        canvas.paint(template.id, cell, template.style);
    }
    Ok(cells.len())
}
