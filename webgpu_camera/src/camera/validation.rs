/// Input checks shared by the camera setters.
///
/// Every rejection is logged at ERROR severity (with file:line) before the
/// error is returned, so a NaN fed in from the host shows up in the log even
/// when the caller drops the `Result`.

use glam::Vec3;
use crate::error::{Error, Result};

/// Log an error on behalf of `source` and hand it back.
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    crate::camera_error!(source, "{}", error);
    error
}

/// Reject NaN and infinities.
pub(crate) fn finite(source: &str, name: &str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(log_and_return_error(
            source,
            Error::NonFiniteInput(format!("{} = {}", name, value)),
        ))
    }
}

/// Reject vectors with any NaN or infinite component.
pub(crate) fn finite_vec3(source: &str, name: &str, value: Vec3) -> Result<Vec3> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(log_and_return_error(
            source,
            Error::NonFiniteInput(format!("{} = {}", name, value)),
        ))
    }
}

/// Finite and strictly positive.
pub(crate) fn positive(source: &str, name: &str, value: f32) -> Result<f32> {
    let value = finite(source, name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(log_and_return_error(
            source,
            Error::InvalidParameter(format!("{} must be > 0 (got {})", name, value)),
        ))
    }
}

/// Finite and >= 0.
pub(crate) fn non_negative(source: &str, name: &str, value: f32) -> Result<f32> {
    let value = finite(source, name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(log_and_return_error(
            source,
            Error::InvalidParameter(format!("{} must be >= 0 (got {})", name, value)),
        ))
    }
}

/// Vertical field of view, radians, inside (0, pi).
pub(crate) fn field_of_view(source: &str, value: f32) -> Result<f32> {
    let value = finite(source, "field_of_view", value)?;
    if value > 0.0 && value < std::f32::consts::PI {
        Ok(value)
    } else {
        Err(log_and_return_error(
            source,
            Error::InvalidParameter(format!("field_of_view must be in (0, pi) (got {})", value)),
        ))
    }
}

/// `low < high`, both already known to be finite.
pub(crate) fn ordered(source: &str, low_name: &str, low: f32, high_name: &str, high: f32) -> Result<()> {
    if low < high {
        Ok(())
    } else {
        Err(log_and_return_error(
            source,
            Error::InvalidParameter(format!(
                "{} ({}) must be below {} ({})",
                low_name, low, high_name, high
            )),
        ))
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
