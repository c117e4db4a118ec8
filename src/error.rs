//! Error type shared by the geometry, rendering, and scaling layers.

use thiserror::Error;

/// Errors raised while validating input or talking to a drawing surface.
#[derive(Debug, Error)]
pub enum DrawError {
    /// A coordinate was NaN or infinite.
    #[error("invalid geometry: {field} is {value}")]
    InvalidGeometry { field: &'static str, value: f64 },

    /// Stroke thickness must be finite and positive.
    #[error("invalid stroke thickness {0}")]
    InvalidThickness(f64),

    /// Device pixel ratio must be finite and positive.
    #[error("invalid device pixel ratio {0}")]
    InvalidRatio(f64),

    /// Colour token did not match a named colour or hex notation.
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    /// Cairo reported a failure; propagated unchanged.
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    /// Any other surface-level failure.
    #[error("surface error: {0}")]
    Surface(String),
}

pub type Result<T, E = DrawError> = std::result::Result<T, E>;

/// Rejects NaN and infinite values, naming the offending field.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DrawError::InvalidGeometry { field, value })
    }
}
