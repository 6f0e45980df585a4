//! Measurement settings and tunable placement parameters.

/// Ruleset used to convert pixel separations into game distance.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MeasureStyle {
    /// Whole-cell steps where every diagonal costs 1.5 straight steps (truncated),
    /// cones measured from the border of the apex cell.
    #[default]
    Pathfinder,
    /// Straight-line distance between points, no snapping or origin correction.
    ///
    /// Grid highlighting under this style is an approximation: a cell is covered
    /// when its center lies within the straight-line radius.
    Euclidean,
}

impl MeasureStyle {
    /// Returns true if measurement counts whole grid steps.
    pub const fn is_grid_stepped(self) -> bool {
        matches!(self, Self::Pathfinder)
    }
}

/// Measurement configuration chosen by the host (the "measure style" setting plus
/// placement defaults used while dragging out new templates).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeasureConfig {
    pub style: MeasureStyle,
    /// Full opening angle in degrees given to newly placed cones.
    pub default_cone_angle: f64,
    /// Width in game units given to newly placed rays.
    pub default_ray_width: f64,
    /// Direction increment in degrees for circles and cones while dragging.
    pub area_direction_step: f64,
    /// Direction increment in degrees for rays while dragging.
    pub ray_direction_step: f64,
    /// Snap lattice subdivisions per cell for template origins (2 = half cells).
    pub origin_snap_resolution: u32,
}

impl MeasureConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CONE_ANGLE: f64 = 90.0;
    pub const DEFAULT_RAY_WIDTH: f64 = 5.0;
    pub const DEFAULT_AREA_DIRECTION_STEP: f64 = 45.0;
    pub const DEFAULT_RAY_DIRECTION_STEP: f64 = 5.0;
    pub const DEFAULT_ORIGIN_SNAP_RESOLUTION: u32 = 2;

    pub fn new() -> Self {
        Self {
            style: MeasureStyle::default(),
            default_cone_angle: Self::DEFAULT_CONE_ANGLE,
            default_ray_width: Self::DEFAULT_RAY_WIDTH,
            area_direction_step: Self::DEFAULT_AREA_DIRECTION_STEP,
            ray_direction_step: Self::DEFAULT_RAY_DIRECTION_STEP,
            origin_snap_resolution: Self::DEFAULT_ORIGIN_SNAP_RESOLUTION,
        }
    }

    pub fn with_style(style: MeasureStyle) -> Self {
        Self {
            style,
            ..Self::new()
        }
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self::new()
    }
}
