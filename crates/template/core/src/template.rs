//! Measured template descriptions.
//!
//! A template is the placed area-of-effect shape a player drags onto the board.
//! Shapes form a closed set so every consumer handles each kind explicitly; only
//! circles and cones take part in grid highlighting.

use std::fmt;

use crate::error::{CoreError, ErrorSeverity};
use crate::geometry::{GridPosition, PixelPoint};

/// Stable identity of a placed template, used to key its highlight layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateId(pub u32);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template#{}", self.0)
    }
}

/// Tag of a template shape, used for tool selection and diagnostics.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum ShapeKind {
    Circle,
    Cone,
    Ray,
    Rectangle,
}

impl ShapeKind {
    /// Returns true if grid highlighting applies to this shape.
    pub const fn is_area(self) -> bool {
        matches!(self, Self::Circle | Self::Cone)
    }
}

/// Geometry-specific parameters of a template.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemplateShape {
    /// Burst/emanation of radius `distance` around the origin.
    Circle,
    /// Cone of length `distance` spanning `direction ± half_angle`.
    Cone { half_angle: f64 },
    /// Line of length `distance` and `width` game units.
    Ray { width: f64 },
    /// Rectangle whose diagonal is given by `distance` and `direction`.
    Rectangle,
}

impl TemplateShape {
    /// Cone with the given full opening angle in degrees.
    pub fn cone_with_angle(angle: f64) -> Self {
        Self::Cone {
            half_angle: angle * 0.5,
        }
    }

    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle => ShapeKind::Circle,
            Self::Cone { .. } => ShapeKind::Cone,
            Self::Ray { .. } => ShapeKind::Ray,
            Self::Rectangle => ShapeKind::Rectangle,
        }
    }
}

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self(0x000000);
    pub const RED: Self = Self(0xFF0000);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFF_FFFF)
    }
}

/// Colors a renderer uses when painting a template's cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightStyle {
    pub border: Color,
    pub fill: Color,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            border: Color::BLACK,
            fill: Color::RED,
        }
    }
}

/// A template placed on the board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasuredTemplate {
    pub id: TemplateId,
    pub shape: TemplateShape,
    /// Anchor point in pixels (cone apex, circle center, ray start).
    pub origin: PixelPoint,
    /// Radius or length in game units.
    pub distance: f64,
    /// Degrees, 0 = pointing right, clockwise on screen.
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: HighlightStyle,
}

impl MeasuredTemplate {
    pub fn new(id: TemplateId, shape: TemplateShape, origin: PixelPoint, distance: f64) -> Self {
        Self {
            id,
            shape,
            origin,
            distance,
            direction: 0.0,
            style: HighlightStyle::default(),
        }
    }

    pub fn circle(id: TemplateId, origin: PixelPoint, distance: f64) -> Self {
        Self::new(id, TemplateShape::Circle, origin, distance)
    }

    pub fn cone(
        id: TemplateId,
        origin: PixelPoint,
        distance: f64,
        direction: f64,
        half_angle: f64,
    ) -> Self {
        Self::new(id, TemplateShape::Cone { half_angle }, origin, distance).with_direction(direction)
    }

    /// Sets the facing direction in degrees (builder pattern).
    #[must_use]
    pub fn with_direction(mut self, direction: f64) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the highlight colors (builder pattern).
    #[must_use]
    pub fn with_style(mut self, style: HighlightStyle) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Rejects geometry that would poison measurement with NaN or infinities.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if !self.origin.is_finite() {
            return Err(TemplateError::NonFiniteOrigin(self.origin));
        }
        if !self.distance.is_finite() {
            return Err(TemplateError::NonFiniteDistance(self.distance));
        }
        if !self.direction.is_finite() {
            return Err(TemplateError::NonFiniteDirection(self.direction));
        }
        match self.shape {
            TemplateShape::Cone { half_angle } if !half_angle.is_finite() => {
                Err(TemplateError::NonFiniteAngle(half_angle))
            }
            TemplateShape::Ray { width } if !width.is_finite() => {
                Err(TemplateError::NonFiniteWidth(width))
            }
            TemplateShape::Circle
            | TemplateShape::Cone { .. }
            | TemplateShape::Ray { .. }
            | TemplateShape::Rectangle => Ok(()),
        }
    }
}

/// Template geometry that cannot be measured.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("template origin {0} is not finite")]
    NonFiniteOrigin(PixelPoint),

    #[error("template distance {0} is not finite")]
    NonFiniteDistance(f64),

    #[error("template direction {0} is not finite")]
    NonFiniteDirection(f64),

    #[error("cone half-angle {0} is not finite")]
    NonFiniteAngle(f64),

    #[error("ray width {0} is not finite")]
    NonFiniteWidth(f64),

    #[error("template origin resolves to cell {0}, outside the addressable grid")]
    OriginOutOfRange(GridPosition),

    #[error("template reach of {radius} cells exceeds the scan limit of {limit}")]
    ReachTooLarge { radius: i32, limit: i32 },
}

impl CoreError for TemplateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFiniteOrigin(_) => "TEMPLATE_NON_FINITE_ORIGIN",
            Self::NonFiniteDistance(_) => "TEMPLATE_NON_FINITE_DISTANCE",
            Self::NonFiniteDirection(_) => "TEMPLATE_NON_FINITE_DIRECTION",
            Self::NonFiniteAngle(_) => "TEMPLATE_NON_FINITE_ANGLE",
            Self::NonFiniteWidth(_) => "TEMPLATE_NON_FINITE_WIDTH",
            Self::OriginOutOfRange(_) => "TEMPLATE_ORIGIN_OUT_OF_RANGE",
            Self::ReachTooLarge { .. } => "TEMPLATE_REACH_TOO_LARGE",
        }
    }
}
