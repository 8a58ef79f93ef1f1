//! Camera pose and intrinsics.
//!
//! Angles are stored in degrees. The world is Z-up and the camera's local
//! forward axis is +X; positive yaw turns counter-clockwise seen from above
//! and positive pitch raises the view axis above the horizon.

use glam::{DQuat, DVec3};

use crate::error::{ensure_finite, FloorsightError, Result};

/// Default horizontal field of view in degrees.
pub const DEFAULT_FIELD_OF_VIEW: f64 = 60.0;
/// Default aspect ratio (width / height).
pub const DEFAULT_ASPECT_RATIO: f64 = 4.0 / 3.0;
/// Default mounting height of a new camera.
pub const DEFAULT_HEIGHT: f64 = 1.5;

/// Builds the rotation for intrinsic yaw, then pitch, then roll (degrees).
///
/// Composing Euler angles this way locks at pitch = +/-90 degrees.
pub fn euler_rotation(yaw: f64, pitch: f64, roll: f64) -> DQuat {
    DQuat::from_rotation_z(yaw.to_radians())
        * DQuat::from_rotation_y(-pitch.to_radians())
        * DQuat::from_rotation_x(roll.to_radians())
}

/// Position and orientation of a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    position: DVec3,
    yaw: f64,
    pitch: f64,
    roll: f64,
}

impl Pose {
    /// Creates a pose, rejecting non-finite components.
    pub fn new(position: DVec3, yaw: f64, pitch: f64, roll: f64) -> Result<Self> {
        if !position.is_finite() {
            return Err(FloorsightError::NonFinite("position"));
        }
        ensure_finite(yaw, "yaw")?;
        ensure_finite(pitch, "pitch")?;
        ensure_finite(roll, "roll")?;
        Ok(Self {
            position,
            yaw,
            pitch,
            roll,
        })
    }

    /// Returns the position in world units.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Returns the yaw in degrees.
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Returns the pitch in degrees.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Returns the roll in degrees.
    pub fn roll(&self) -> f64 {
        self.roll
    }

    /// Returns the base rotation of this pose.
    pub fn rotation(&self) -> DQuat {
        euler_rotation(self.yaw, self.pitch, self.roll)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, DEFAULT_HEIGHT),
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

/// A placed camera: a pose plus horizontal field of view and aspect ratio.
///
/// All setters validate their input, so a `Camera` always satisfies
/// `0 < field_of_view < 180` and `aspect_ratio > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pose: Pose,
    field_of_view: f64,
    aspect_ratio: f64,
}

impl Camera {
    /// Creates a camera with default intrinsics at the default height.
    pub fn new() -> Self {
        Self {
            pose: Pose::default(),
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }

    /// Creates a camera from a pose and intrinsics.
    pub fn with_intrinsics(pose: Pose, field_of_view: f64, aspect_ratio: f64) -> Result<Self> {
        let mut camera = Self::new();
        camera.pose = pose;
        camera.set_field_of_view(field_of_view)?;
        camera.set_aspect_ratio(aspect_ratio)?;
        Ok(camera)
    }

    /// Restores the default pose and intrinsics.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the pose.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Returns the eye position.
    pub fn position(&self) -> DVec3 {
        self.pose.position
    }

    /// Returns the yaw in degrees.
    pub fn yaw(&self) -> f64 {
        self.pose.yaw
    }

    /// Returns the pitch in degrees.
    pub fn pitch(&self) -> f64 {
        self.pose.pitch
    }

    /// Returns the roll in degrees.
    pub fn roll(&self) -> f64 {
        self.pose.roll
    }

    /// Returns the horizontal field of view in degrees.
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// Returns the aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Replaces the whole pose.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Sets the eye position.
    pub fn set_position(&mut self, position: DVec3) -> Result<()> {
        if !position.is_finite() {
            return Err(FloorsightError::NonFinite("position"));
        }
        self.pose.position = position;
        Ok(())
    }

    /// Sets the yaw in degrees.
    pub fn set_yaw(&mut self, yaw: f64) -> Result<()> {
        ensure_finite(yaw, "yaw")?;
        self.pose.yaw = yaw;
        Ok(())
    }

    /// Sets the pitch in degrees.
    pub fn set_pitch(&mut self, pitch: f64) -> Result<()> {
        ensure_finite(pitch, "pitch")?;
        self.pose.pitch = pitch;
        Ok(())
    }

    /// Sets the roll in degrees.
    pub fn set_roll(&mut self, roll: f64) -> Result<()> {
        ensure_finite(roll, "roll")?;
        self.pose.roll = roll;
        Ok(())
    }

    /// Sets the horizontal field of view in degrees.
    pub fn set_field_of_view(&mut self, field_of_view: f64) -> Result<()> {
        if !(field_of_view > 0.0 && field_of_view < 180.0) {
            return Err(FloorsightError::InvalidFieldOfView(field_of_view));
        }
        self.field_of_view = field_of_view;
        Ok(())
    }

    /// Sets the aspect ratio (width / height).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) -> Result<()> {
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(FloorsightError::InvalidAspectRatio(aspect_ratio));
        }
        self.aspect_ratio = aspect_ratio;
        Ok(())
    }

    /// Returns the unit view direction of the base pose.
    pub fn direction(&self) -> DVec3 {
        self.pose.rotation() * DVec3::X
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
