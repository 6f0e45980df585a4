//! Drag-to-create placement of new templates.
//!
//! While a player drags out a template, the pointer positions are turned into
//! template geometry. With grid-stepped measurement the origin and destination
//! snap to the half-cell lattice, circles and cones turn in 45° increments, rays
//! in 5° increments, and lengths are whole cells, so the preview always matches
//! what the cell enumerator will highlight.

use crate::config::{MeasureConfig, MeasureStyle};
use crate::error::MeasureError;
use crate::geometry::{PixelPoint, Ray, normalize_degrees, round_half_up};
use crate::grid::GridOracle;
use crate::template::{MeasuredTemplate, ShapeKind, TemplateId, TemplateShape};

/// Distance in game units given to a template when it is first dropped.
pub const INITIAL_DISTANCE: f64 = 1.0;

/// Template being dragged out by the player.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplatePlacement {
    template: MeasuredTemplate,
    style: MeasureStyle,
    area_direction_step: f64,
    ray_direction_step: f64,
    snap_resolution: u32,
}

impl TemplatePlacement {
    /// Starts a placement of `kind` where the pointer went down.
    pub fn begin<G>(
        id: TemplateId,
        kind: ShapeKind,
        pointer: PixelPoint,
        grid: &G,
        config: &MeasureConfig,
    ) -> Result<Self, MeasureError>
    where
        G: GridOracle + ?Sized,
    {
        grid.validate()?;

        let style = config.style;
        let origin = if style.is_grid_stepped() {
            snap_to_grid(pointer, config.origin_snap_resolution, grid)
        } else {
            pointer
        };
        let shape = match kind {
            ShapeKind::Circle => TemplateShape::Circle,
            ShapeKind::Cone => TemplateShape::cone_with_angle(config.default_cone_angle),
            ShapeKind::Ray => TemplateShape::Ray {
                width: config.default_ray_width,
            },
            ShapeKind::Rectangle => TemplateShape::Rectangle,
        };

        let template = MeasuredTemplate::new(id, shape, origin, INITIAL_DISTANCE);
        template.validate()?;
        tracing::debug!(template = %id, %kind, %origin, %style, "placement started");

        Ok(Self {
            template,
            style,
            area_direction_step: config.area_direction_step,
            ray_direction_step: config.ray_direction_step,
            snap_resolution: config.origin_snap_resolution,
        })
    }

    /// Updates direction and distance for the pointer now at `destination`.
    ///
    /// `grid` must be the grid the placement was started on.
    pub fn drag_to<G>(&mut self, destination: PixelPoint, grid: &G) -> &MeasuredTemplate
    where
        G: GridOracle + ?Sized,
    {
        let stepped = self.style.is_grid_stepped();
        let destination = if stepped {
            snap_to_grid(destination, self.snap_resolution, grid)
        } else {
            destination
        };

        let ray = Ray::new(self.template.origin, destination);
        let angle = ray.angle_degrees();
        let cells = ray.length() / grid.cell_size();
        let kind = self.template.kind();

        self.template.direction = match (stepped, kind) {
            (true, ShapeKind::Circle | ShapeKind::Cone) => {
                snap_direction(angle, self.area_direction_step)
            }
            (true, ShapeKind::Ray) => snap_direction(angle, self.ray_direction_step),
            (true, ShapeKind::Rectangle) | (false, _) => angle,
        };
        self.template.distance = match (stepped, kind) {
            (true, ShapeKind::Circle | ShapeKind::Cone | ShapeKind::Ray) => {
                cells.floor() * grid.distance_per_cell()
            }
            (true, ShapeKind::Rectangle) | (false, _) => cells * grid.distance_per_cell(),
        };

        tracing::trace!(
            template = %self.template.id,
            direction = self.template.direction,
            distance = self.template.distance,
            "placement dragged"
        );
        &self.template
    }

    pub fn template(&self) -> &MeasuredTemplate {
        &self.template
    }

    /// Completes the placement, yielding the template to store on the board.
    pub fn finish(self) -> MeasuredTemplate {
        self.template
    }
}

/// Snaps `point` to the lattice with `resolution` subdivisions per cell.
///
/// A resolution of 1 snaps to cell corners, 2 adds edge midpoints and centers.
pub fn snap_to_grid<G>(point: PixelPoint, resolution: u32, grid: &G) -> PixelPoint
where
    G: GridOracle + ?Sized,
{
    let step = grid.cell_size() / f64::from(resolution.max(1));
    let origin = grid.origin();
    let snap = |value: f64, base: f64| base + round_half_up((value - base) / step) * step;
    PixelPoint::new(snap(point.x, origin.x), snap(point.y, origin.y))
}

/// Rounds `degrees` to the nearest multiple of `step`, result in `[0, 360)`.
///
/// Non-positive steps leave the angle untouched apart from normalization.
pub fn snap_direction(degrees: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return normalize_degrees(degrees);
    }
    let snapped = ((normalize_degrees(degrees) + step / 2.0) / step).floor() * step;
    normalize_degrees(snapped)
}
