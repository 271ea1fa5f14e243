use thiserror::Error;

/// Reasons a shape cannot be built from the given dimensions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{dimension} must be positive, got {value}")]
    NonPositive { dimension: &'static str, value: f64 },
    #[error("{dimension} must be finite, got {value}")]
    NonFinite { dimension: &'static str, value: f64 },
    #[error("dimensions give area {area} and perimeter {perimeter}, outside the representable range")]
    OutOfRange { area: f64, perimeter: f64 },
}

pub type Result<T> = std::result::Result<T, ShapeError>;

/// Checks that a single dimension is finite and strictly positive.
pub(crate) fn check_dimension(dimension: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ShapeError::NonFinite { dimension, value });
    }
    if value <= 0.0 {
        return Err(ShapeError::NonPositive { dimension, value });
    }
    Ok(value)
}

/// Checks that valid dimensions did not overflow or underflow once combined.
pub(crate) fn check_measurements(area: f64, perimeter: f64) -> Result<()> {
    let in_range = |v: f64| v.is_finite() && v > 0.0;
    if in_range(area) && in_range(perimeter) {
        Ok(())
    } else {
        Err(ShapeError::OutOfRange { area, perimeter })
    }
}
