//! Common error infrastructure for template-core.
//!
//! Measurement itself is total once its preconditions hold, so the only failures
//! are malformed inputs supplied by the host: a grid whose cell size or scale
//! would make the metric divide by zero, or template geometry that is not finite.
//! Domain-specific errors live next to the types they validate ([`GridError`],
//! [`TemplateError`]) and are folded into [`MeasureError`] at the query surface.
//!
//! [`GridError`]: crate::grid::GridError
//! [`TemplateError`]: crate::template::TemplateError

use crate::grid::GridError;
use crate::template::TemplateError;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero cell size, NaN template origin
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs in a host adapter and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all template-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failure of a measurement query (`measure`, `highlighted_cells`, `tokens_within`).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MeasureError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl CoreError for MeasureError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Grid(err) => err.severity(),
            Self::Template(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Grid(err) => err.error_code(),
            Self::Template(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_error_delegates_classification() {
        let err = MeasureError::from(GridError::InvalidCellSize(0.0));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "GRID_INVALID_CELL_SIZE");
        assert!(!err.severity().is_internal());

        let err = MeasureError::from(TemplateError::NonFiniteDistance(f64::NAN));
        assert_eq!(err.error_code(), "TEMPLATE_NON_FINITE_DISTANCE");
        assert_eq!(err.severity().as_str(), "validation");
    }
}
