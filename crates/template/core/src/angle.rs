//! Wraparound-aware angular containment for cone spans.

use crate::geometry::normalize_degrees;

/// Returns true if `value` lies within the closed arc from `min` to `max`.
///
/// All inputs are normalized into `[0, 360)` first. When `min > max` the arc
/// passes through 0°, e.g. `within_angle(315.0, 45.0, 10.0)` holds.
pub fn within_angle(min: f64, max: f64, value: f64) -> bool {
    let min = normalize_degrees(min);
    let max = normalize_degrees(max);
    let value = normalize_degrees(value);

    if min <= max {
        value >= min && value <= max
    } else {
        value >= min || value <= max
    }
}

/// Set of directions a cone covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngularSpan {
    /// Every direction; the cone is at least as wide as a full turn.
    Full,
    /// Closed arc from `min` to `max`, both normalized into `[0, 360)`.
    Arc { min: f64, max: f64 },
}

impl AngularSpan {
    /// Span of a cone facing `direction` with the given half-angle.
    ///
    /// A half-angle of 180° or more collapses both edges onto the same normalized
    /// angle, so it is treated as [`AngularSpan::Full`] explicitly.
    pub fn for_cone(direction: f64, half_angle: f64) -> Self {
        let half_angle = half_angle.abs();
        if half_angle >= 180.0 {
            return Self::Full;
        }
        Self::Arc {
            min: normalize_degrees(direction - half_angle),
            max: normalize_degrees(direction + half_angle),
        }
    }

    pub fn contains(&self, degrees: f64) -> bool {
        match *self {
            Self::Full => true,
            Self::Arc { min, max } => within_angle(min, max, degrees),
        }
    }
}
