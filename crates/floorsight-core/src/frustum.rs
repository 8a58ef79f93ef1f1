//! Corner rays of a camera's view frustum.

use glam::DVec3;

use crate::camera::{euler_rotation, Camera};
use crate::plane::Ray;

/// Number of corner rays bounding a rectangular field of view.
pub const CORNER_COUNT: usize = 4;

/// The four corner rays of a camera, in cyclic order around the view axis:
/// top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRays {
    eye: DVec3,
    rays: [Ray; CORNER_COUNT],
}

impl CornerRays {
    /// Wraps four rays cast from `eye` in cyclic order.
    ///
    /// The ray origins are not required to equal `eye`; the projector uses
    /// `eye` only as the center for boundary-arc angles.
    pub fn new(eye: DVec3, rays: [Ray; CORNER_COUNT]) -> Self {
        Self { eye, rays }
    }

    /// Returns the camera eye point.
    pub fn eye(&self) -> DVec3 {
        self.eye
    }

    /// Returns the rays in cyclic order.
    pub fn rays(&self) -> &[Ray; CORNER_COUNT] {
        &self.rays
    }

    pub fn top_left(&self) -> &Ray {
        &self.rays[0]
    }

    pub fn top_right(&self) -> &Ray {
        &self.rays[1]
    }

    pub fn bottom_right(&self) -> &Ray {
        &self.rays[2]
    }

    pub fn bottom_left(&self) -> &Ray {
        &self.rays[3]
    }
}

/// Returns the (yaw, pitch) half-angles in degrees for a camera.
///
/// The vertical half-angle is the horizontal one divided by the aspect ratio.
/// This is a linear approximation, not the pinhole `atan(tan(h) / aspect)`.
pub fn half_angles(camera: &Camera) -> (f64, f64) {
    let half_yaw = camera.field_of_view() * 0.5;
    (half_yaw, half_yaw / camera.aspect_ratio())
}

/// Computes the four corner rays of the camera's field of view.
///
/// Each direction is the base pose rotation composed with a
/// (+/-half_yaw, +/-half_pitch, 0) offset rotation, applied to the forward
/// axis. Rays are recomputed on every call so they always reflect the
/// current pose.
pub fn compute_corner_rays(camera: &Camera) -> CornerRays {
    let (half_yaw, half_pitch) = half_angles(camera);
    let base = camera.pose().rotation();
    let eye = camera.position();

    let offsets = [
        (half_yaw, half_pitch),
        (-half_yaw, half_pitch),
        (-half_yaw, -half_pitch),
        (half_yaw, -half_pitch),
    ];

    let rays = offsets.map(|(yaw, pitch)| {
        let direction = base * euler_rotation(yaw, pitch, 0.0) * DVec3::X;
        Ray::from_unit(eye, direction)
    });

    CornerRays::new(eye, rays)
}
