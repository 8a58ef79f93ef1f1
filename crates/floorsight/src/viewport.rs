//! Fitting a floorplan to a viewport.
//!
//! The overview camera looks straight down at the floorplan. One floorplan
//! dimension is widened so the floorplan has the viewport's aspect ratio,
//! then the camera is raised until its field of view spans the floorplan
//! width.

use floorsight_core::{FloorsightError, Result, DEFAULT_ROOM_SIZE};

/// Side length of the floorplan shown on startup, in meters.
pub const DEFAULT_FLOORPLAN_SIZE: f64 = DEFAULT_ROOM_SIZE;
/// Viewport width used when no real viewport size is known.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 900.0;
/// Viewport height used when no real viewport size is known.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

/// Result of [`fit_floorplan`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorplanFit {
    /// Floorplan width after matching the viewport aspect ratio.
    pub width: f64,
    /// Floorplan height after matching the viewport aspect ratio.
    pub height: f64,
    /// Height of the overview camera above the floor.
    pub camera_height: f64,
}

/// Fits a `desired_width` x `desired_height` floorplan into a viewport.
///
/// The floorplan only ever grows, so the desired area stays fully visible.
/// `overview_fov_degrees` is the overview camera's horizontal field of view.
pub fn fit_floorplan(
    desired_width: f64,
    desired_height: f64,
    viewport_width: f64,
    viewport_height: f64,
    overview_fov_degrees: f64,
) -> Result<FloorplanFit> {
    let positive = |v: f64| v > 0.0 && v.is_finite();
    if !(positive(viewport_width) && positive(viewport_height)) {
        return Err(FloorsightError::InvalidViewport {
            width: viewport_width,
            height: viewport_height,
        });
    }
    if !(positive(desired_width) && positive(desired_height)) {
        return Err(FloorsightError::InvalidRoomSize {
            width: desired_width,
            height: desired_height,
        });
    }
    if !(overview_fov_degrees > 0.0 && overview_fov_degrees < 180.0) {
        return Err(FloorsightError::InvalidFieldOfView(overview_fov_degrees));
    }

    let viewport_aspect = viewport_width / viewport_height;
    let floorplan_aspect = desired_width / desired_height;

    let (width, height) = if viewport_aspect > floorplan_aspect {
        (viewport_aspect * desired_height, desired_height)
    } else {
        (desired_width, desired_width / viewport_aspect)
    };

    let half_fov = (overview_fov_degrees * 0.5).to_radians();
    let camera_height = (width * 0.5) / half_fov.tan();

    log::debug!("floorplan fitted to {width} x {height}, overview camera at {camera_height}");

    Ok(FloorplanFit {
        width,
        height,
        camera_height,
    })
}
