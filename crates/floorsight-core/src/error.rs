//! Error types for floorsight.

use thiserror::Error;

/// The main error type for floorsight operations.
///
/// Geometric outcomes such as a ray running parallel to a plane or missing the
/// floor are not errors; only precondition violations end up here.
#[derive(Error, Debug)]
pub enum FloorsightError {
    /// Field of view outside the open interval (0, 180) degrees.
    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    /// Aspect ratio that is not strictly positive.
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f64),

    /// Room dimensions that are not strictly positive.
    #[error("room size must be positive, got {width} x {height}")]
    InvalidRoomSize { width: f64, height: f64 },

    /// A pose component that is NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),

    /// Viewport dimensions that are not strictly positive.
    #[error("viewport size must be positive, got {width} x {height}")]
    InvalidViewport { width: f64, height: f64 },

    /// A command targeted the selected camera while none is selected.
    #[error("no camera selected - call add_camera() or select_camera() first")]
    NoCameraSelected,

    /// A camera index that does not exist in the scene.
    #[error("camera {0} not found")]
    CameraNotFound(usize),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for floorsight operations.
pub type Result<T> = std::result::Result<T, FloorsightError>;

/// Rejects NaN and infinite values for the named quantity.
pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FloorsightError::NonFinite(what))
    }
}
