//! Core geometry for floorsight.
//!
//! This crate computes what a placed camera sees on the floor of a
//! rectangular room:
//! - [`compute_corner_rays`] derives the four frustum corner rays from a [`Camera`] pose
//! - [`FloorProjector`] clips those rays against the ground and the [`RoomBoundary`]
//!   planes and stitches the hits into a closed [`ProjectionOutline`]
//! - [`stitch_boundary_arc`] closes gaps left by rays that never reach the floor

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors return Self-derived values which don't need must_use
#![allow(clippy::must_use_candidate)]
// Tests compare exact float results
#![allow(clippy::float_cmp)]

pub mod camera;
pub mod error;
pub mod frustum;
pub mod options;
pub mod plane;
pub mod projection;
pub mod room;

pub use camera::{euler_rotation, Camera, Pose};
pub use error::{FloorsightError, Result};
pub use frustum::{compute_corner_rays, half_angles, CornerRays, CORNER_COUNT};
pub use options::ProjectorOptions;
pub use plane::{Intersection, Plane, Ray, DEFAULT_PARALLEL_EPSILON};
pub use projection::{
    compute_floor_projection, nearest_hit, polar_angle, stitch_boundary_arc, BoundaryArc,
    FloorProjector, LineVertex, ProjectedPoint, ProjectionOutline, Segment,
};
pub use room::{RoomBoundary, Wall, DEFAULT_ROOM_SIZE};

// Re-export glam types for convenience
pub use glam::{DQuat, DVec2, DVec3};
