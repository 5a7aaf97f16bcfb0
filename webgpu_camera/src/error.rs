//! Error types for webgpu_camera
//!
//! Cameras clamp distance, pitch and zoom instead of failing. Errors are only
//! raised for inputs that would poison the matrices (NaN / infinity) or for
//! parameters that describe no valid projection at all.

use std::fmt;

/// Result type for camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A setter or motion method received NaN or infinity.
    /// Carries the name of the offending parameter.
    NonFiniteInput(String),

    /// A parameter is finite but outside its valid domain
    /// (aspect ratio <= 0, near >= far, inverted bounds, ...)
    InvalidParameter(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonFiniteInput(name) => write!(f, "Non-finite input: {}", name),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
