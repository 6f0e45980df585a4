//! Grid cell enumeration for circle and cone templates.
//!
//! The enumerator scans a square window of cells around the cell holding the
//! template origin and keeps every cell whose center is within the template's
//! distance (and, for cones, inside the angular span). Each candidate is judged
//! independently, so the result never depends on scan order.

use crate::angle::AngularSpan;
use crate::error::MeasureError;
use crate::geometry::{Cell, GridPosition, Ray};
use crate::grid::GridOracle;
use crate::highlight::origin::cone_origin_offset;
use crate::measure::measure_on_valid_grid;
use crate::template::{MeasuredTemplate, TemplateError, TemplateShape};

/// Largest window radius, in cells, the enumerator will scan.
pub const MAX_WINDOW_RADIUS: i32 = 4096;

/// Largest column or row index a template origin may resolve to.
pub const MAX_GRID_INDEX: u32 = 1 << 24;

/// Square block of candidate cells centered on the template's anchor cell.
///
/// The radius is `ceil(1.5 * distance / distance_per_cell)`. Every metric used
/// here charges at least `max(nx, ny)` cells, and a cell `k` columns away from
/// the anchor is at least `k` partial cells from any (corrected) origin, so
/// qualifying cells always lie within `ceil(distance / distance_per_cell)`; the
/// 1.5 factor is headroom on top of that bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateWindow {
    pub anchor: GridPosition,
    pub radius: i32,
}

impl CandidateWindow {
    /// Window around the cell holding `template.origin`.
    ///
    /// Fails when the origin cell lies beyond [`MAX_GRID_INDEX`] or the radius
    /// exceeds [`MAX_WINDOW_RADIUS`], so every scanned position fits in `i32`.
    pub fn for_template<G>(template: &MeasuredTemplate, grid: &G) -> Result<Self, TemplateError>
    where
        G: GridOracle + ?Sized,
    {
        let anchor = grid.pixel_to_grid(template.origin);
        let out_of_range = |index: i32| index.unsigned_abs() > MAX_GRID_INDEX;
        if out_of_range(anchor.col) || out_of_range(anchor.row) {
            return Err(TemplateError::OriginOutOfRange(anchor));
        }
        let radius = window_radius(template.distance, grid.distance_per_cell());
        if radius > MAX_WINDOW_RADIUS {
            return Err(TemplateError::ReachTooLarge {
                radius,
                limit: MAX_WINDOW_RADIUS,
            });
        }
        Ok(Self { anchor, radius })
    }

    pub fn contains(&self, position: GridPosition) -> bool {
        (position.col - self.anchor.col).abs() <= self.radius
            && (position.row - self.anchor.row).abs() <= self.radius
    }

    /// Candidate positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> + '_ {
        let radius = self.radius;
        (-radius..=radius).flat_map(move |row| {
            (-radius..=radius).map(move |col| self.anchor.shifted(col, row))
        })
    }

    /// Number of candidate cells.
    pub fn area(&self) -> u64 {
        let side = 2 * u64::from(self.radius.unsigned_abs()) + 1;
        side * side
    }
}

/// Cells scanned outward from the anchor cell for a template of `distance`.
///
/// Saturates at `i32::MAX` for reaches too large to scan.
pub fn window_radius(distance: f64, distance_per_cell: f64) -> i32 {
    if distance <= 0.0 {
        return 0;
    }
    (1.5 * distance / distance_per_cell).ceil() as i32
}

/// Grid cells covered by `template` on `grid`.
///
/// Circles and cones are enumerated; rays and rectangles are not highlighted on
/// the grid and yield an empty set. Cells are returned in row-major scan order
/// without duplicates.
pub fn highlighted_cells<G>(template: &MeasuredTemplate, grid: &G) -> Result<Vec<Cell>, MeasureError>
where
    G: GridOracle + ?Sized,
{
    grid.validate()?;
    template.validate()?;

    let span = match template.shape {
        TemplateShape::Circle => None,
        TemplateShape::Cone { half_angle } => {
            Some(AngularSpan::for_cone(template.direction, half_angle))
        }
        TemplateShape::Ray { .. } | TemplateShape::Rectangle => {
            tracing::debug!(
                template = %template.id,
                kind = %template.kind(),
                "shape is not grid highlighted"
            );
            return Ok(Vec::new());
        }
    };

    let origin = if span.is_some() && grid.measure_style().is_grid_stepped() {
        cone_origin_offset(template.origin, template.direction, grid).apply(template.origin, grid)
    } else {
        template.origin
    };

    let window = CandidateWindow::for_template(template, grid)?;
    tracing::trace!(
        template = %template.id,
        anchor = %window.anchor,
        radius = window.radius,
        "scanning candidate window"
    );

    let mut cells = Vec::new();
    for position in window.positions() {
        let cell = grid.cell(position);
        let ray = Ray::new(origin, cell.center);

        if let Some(span) = span {
            // A zero-length ray has no angle; the apex cell is judged on distance alone.
            if ray.length() > 0.0 && !span.contains(ray.angle_degrees()) {
                continue;
            }
        }

        if measure_on_valid_grid(cell.center, origin, grid) <= template.distance {
            cells.push(cell);
        }
    }

    tracing::debug!(
        template = %template.id,
        kind = %template.kind(),
        candidates = window.area(),
        cells = cells.len(),
        "enumerated highlighted cells"
    );
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeasureStyle;
    use crate::error::CoreError;
    use crate::geometry::PixelPoint;
    use crate::grid::SquareGrid;
    use crate::template::TemplateId;

    fn grid() -> SquareGrid {
        SquareGrid::new(100.0, 5.0).unwrap()
    }

    fn positions(cells: &[Cell]) -> Vec<(i32, i32)> {
        cells
            .iter()
            .map(|cell| (cell.position.col, cell.position.row))
            .collect()
    }

    #[test]
    fn circle_centered_in_cell_uses_stepped_radius() {
        // Origin at the center of cell (5, 5); 10 ft = 2 steps.
        let template = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(550.0, 550.0), 10.0);
        let cells = highlighted_cells(&template, &grid()).unwrap();

        // 5x5 block minus its four corners (a 2-diagonal corner costs 3 steps).
        assert_eq!(cells.len(), 21);
        let found = positions(&cells);
        for (col, row) in [(3, 3), (7, 3), (3, 7), (7, 7)] {
            assert!(!found.contains(&(col, row)), "corner {col},{row} included");
        }
        for (col, row) in [(5, 5), (7, 5), (6, 6), (7, 6), (3, 4), (5, 3)] {
            assert!(found.contains(&(col, row)), "cell {col},{row} missing");
        }
    }

    #[test]
    fn circle_on_intersection_covers_burst_pattern() {
        // Origin on the corner shared by cells (1,1), (2,1), (1,2), (2,2).
        let template = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(200.0, 200.0), 10.0);
        let cells = highlighted_cells(&template, &grid()).unwrap();

        // 4x4 block from (0,0) to (3,3) minus its corners.
        assert_eq!(cells.len(), 12);
        let found = positions(&cells);
        for (col, row) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            assert!(!found.contains(&(col, row)));
        }
        assert!(found.contains(&(0, 1)));
        assert!(found.contains(&(2, 3)));
    }

    #[test]
    fn cells_come_back_row_major() {
        let template = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(550.0, 550.0), 5.0);
        let cells = highlighted_cells(&template, &grid()).unwrap();
        assert_eq!(
            positions(&cells),
            vec![(4, 4), (5, 4), (6, 4), (4, 5), (5, 5), (6, 5), (4, 6), (5, 6), (6, 6)]
        );
        assert_eq!(cells[0].top_left, PixelPoint::new(400.0, 400.0));
        assert_eq!(cells[0].center, PixelPoint::new(450.0, 450.0));
    }

    #[test]
    fn cone_from_intersection_respects_angle_and_distance() {
        // Apex on a grid intersection, facing right, 90° wide, 15 ft long.
        let template =
            MeasuredTemplate::cone(TemplateId(2), PixelPoint::new(200.0, 200.0), 15.0, 0.0, 45.0);
        let cells = highlighted_cells(&template, &grid()).unwrap();
        let found = positions(&cells);

        // Center (250,250) sits at exactly 45° from the apex: boundary is inclusive.
        assert!(found.contains(&(2, 2)));
        assert!(found.contains(&(2, 1)));
        // 18° off axis, 3 steps away.
        assert!(found.contains(&(4, 2)));
        // Center at 31° but 4 steps away.
        assert!(!found.contains(&(4, 3)));
        // Center at 72°, outside the span.
        assert!(!found.contains(&(2, 3)));
        // Behind the apex.
        assert!(!found.contains(&(1, 2)));

        assert_eq!(
            found,
            vec![(3, 0), (2, 1), (3, 1), (4, 1), (2, 2), (3, 2), (4, 2), (3, 3)]
        );
    }

    #[test]
    fn cone_direction_boundary_example() {
        // Apex on an intersection so no correction applies. Facing right with a
        // 45° half-angle, a cell centered 40° off the facing is inside the cone
        // and one centered 50° off is not, at equal distance.
        let grid = grid();
        let apex = PixelPoint::new(0.0, 0.0);
        let template = MeasuredTemplate::cone(TemplateId(3), apex, 50.0, 0.0, 45.0);
        let cells = highlighted_cells(&template, &grid).unwrap();

        let angle_to = |col: i32, row: i32| {
            Ray::new(apex, grid.cell(GridPosition::new(col, row)).center).angle_degrees()
        };
        let near_40 = angle_to(6, 5);
        let near_50 = angle_to(5, 6);
        assert!((near_40 - 40.0).abs() < 0.5, "got {near_40}");
        assert!((near_50 - 50.0).abs() < 0.5, "got {near_50}");

        let found = positions(&cells);
        assert!(found.contains(&(6, 5)));
        assert!(!found.contains(&(5, 6)));
        // Exactly on the 45° edge.
        assert!(found.contains(&(1, 1)));
    }

    #[test]
    fn cone_apex_inside_cell_measures_from_border() {
        // Apex at the center of cell (2,2) facing right: origin moves to x = 300.
        let template =
            MeasuredTemplate::cone(TemplateId(4), PixelPoint::new(250.0, 250.0), 5.0, 0.0, 45.0);
        let cells = highlighted_cells(&template, &grid()).unwrap();

        // Only the cell directly in front of the corrected origin (center 350,250).
        assert_eq!(positions(&cells), vec![(3, 2)]);
    }

    #[test]
    fn zero_distance_yields_at_most_origin_cell() {
        let centered = MeasuredTemplate::circle(TemplateId(5), PixelPoint::new(250.0, 350.0), 0.0);
        assert_eq!(
            positions(&highlighted_cells(&centered, &grid()).unwrap()),
            vec![(2, 3)]
        );

        let on_corner = MeasuredTemplate::circle(TemplateId(5), PixelPoint::new(200.0, 300.0), 0.0);
        assert!(highlighted_cells(&on_corner, &grid()).unwrap().is_empty());

        let negative = MeasuredTemplate::circle(TemplateId(5), PixelPoint::new(250.0, 350.0), -5.0);
        assert!(highlighted_cells(&negative, &grid()).unwrap().is_empty());
    }

    #[test]
    fn zero_length_ray_skips_angle_test_for_apex_cell() {
        // Euclidean style applies no apex correction, so the apex stays on the
        // cell center and that cell is kept despite having no direction.
        let grid = grid().with_style(MeasureStyle::Euclidean);
        let template =
            MeasuredTemplate::cone(TemplateId(6), PixelPoint::new(250.0, 250.0), 0.0, 270.0, 10.0);
        assert_eq!(
            positions(&highlighted_cells(&template, &grid).unwrap()),
            vec![(2, 2)]
        );
    }

    #[test]
    fn half_turn_cone_matches_circle() {
        let origin = PixelPoint::new(200.0, 200.0);
        let circle = MeasuredTemplate::circle(TemplateId(7), origin, 15.0);
        let cone = MeasuredTemplate::cone(TemplateId(7), origin, 15.0, 90.0, 180.0);

        assert_eq!(
            highlighted_cells(&circle, &grid()).unwrap(),
            highlighted_cells(&cone, &grid()).unwrap()
        );
    }

    #[test]
    fn zero_width_cone_keeps_only_the_facing_line() {
        // From an intersection facing down-right, only the diagonal centers qualify.
        let template =
            MeasuredTemplate::cone(TemplateId(8), PixelPoint::new(0.0, 0.0), 15.0, 45.0, 0.0);
        let found = positions(&highlighted_cells(&template, &grid()).unwrap());
        assert_eq!(found, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn rays_and_rectangles_are_not_highlighted() {
        let origin = PixelPoint::new(250.0, 250.0);
        let ray = MeasuredTemplate::new(
            TemplateId(9),
            TemplateShape::Ray { width: 5.0 },
            origin,
            30.0,
        );
        let rect = MeasuredTemplate::new(TemplateId(9), TemplateShape::Rectangle, origin, 30.0);
        assert!(highlighted_cells(&ray, &grid()).unwrap().is_empty());
        assert!(highlighted_cells(&rect, &grid()).unwrap().is_empty());
    }

    #[test]
    fn window_radius_scales_with_distance() {
        assert_eq!(window_radius(0.0, 5.0), 0);
        assert_eq!(window_radius(-10.0, 5.0), 0);
        assert_eq!(window_radius(10.0, 5.0), 3);
        assert_eq!(window_radius(15.0, 5.0), 5);

        let window = CandidateWindow {
            anchor: GridPosition::new(2, 2),
            radius: 1,
        };
        assert_eq!(window.area(), 9);
        assert_eq!(window.positions().count(), 9);
        assert!(window.contains(GridPosition::new(3, 1)));
        assert!(!window.contains(GridPosition::new(4, 2)));
    }

    #[test]
    fn invalid_inputs_are_reported() {
        let template = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(0.0, 0.0), 10.0);
        let broken = SquareGrid {
            distance_per_cell: -5.0,
            ..grid()
        };
        assert!(matches!(
            highlighted_cells(&template, &broken),
            Err(MeasureError::Grid(_))
        ));

        let template = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(0.0, 0.0), f64::NAN);
        assert!(matches!(
            highlighted_cells(&template, &grid()),
            Err(MeasureError::Template(_))
        ));
    }

    #[test]
    fn euclidean_style_covers_centers_within_radius() {
        let origin = PixelPoint::new(0.0, 0.0);
        let template = MeasuredTemplate::circle(TemplateId(1), origin, 15.0);

        let stepped = highlighted_cells(&template, &grid()).unwrap();
        let euclidean_grid = grid().with_style(MeasureStyle::Euclidean);
        let euclidean = highlighted_cells(&template, &euclidean_grid).unwrap();

        assert_eq!(stepped.len(), 24);
        assert_eq!(euclidean.len(), 32);
        assert!(euclidean
            .iter()
            .all(|cell| Ray::new(origin, cell.center).length() <= 300.0));
    }

    #[test]
    fn far_away_origin_is_rejected() {
        let template = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(1e12, 1e12), 5.0);
        let err = highlighted_cells(&template, &grid()).unwrap_err();
        assert!(matches!(
            err,
            MeasureError::Template(TemplateError::OriginOutOfRange(_))
        ));
        assert_eq!(err.error_code(), "TEMPLATE_ORIGIN_OUT_OF_RANGE");

        let negative = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(-1e12, 0.0), 5.0);
        assert!(highlighted_cells(&negative, &grid()).is_err());
    }

    #[test]
    fn oversized_reach_is_rejected() {
        let huge = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(50.0, 50.0), 1e15);
        assert!(matches!(
            highlighted_cells(&huge, &grid()),
            Err(MeasureError::Template(TemplateError::ReachTooLarge {
                limit: MAX_WINDOW_RADIUS,
                ..
            }))
        ));

        let fine_scale = SquareGrid {
            distance_per_cell: 1e-9,
            ..grid()
        };
        let small = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(50.0, 50.0), 5.0);
        assert!(highlighted_cells(&small, &fine_scale).is_err());
    }

    #[test]
    fn largest_allowed_reach_is_scanned() {
        // 1.5 * 13650 / 5 = 4095 cells.
        let template = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(50.0, 50.0), 13650.0);
        let window = CandidateWindow::for_template(&template, &grid()).unwrap();
        assert_eq!(window.radius, 4095);
        assert_eq!(window_radius(1e300, 1e-300), i32::MAX);
    }
}
