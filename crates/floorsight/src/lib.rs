//! floorsight: preview what a security camera sees on a floorplan.
//!
//! A camera placed in a rectangular room is described by its position,
//! yaw/pitch/roll and field of view. floorsight casts the four corner rays of
//! its field of view, clips them against the floor and the room boundary and
//! returns the footprint as a closed outline of line segments that a renderer
//! can draw on a 2D floorplan.
//!
//! # Quick Start
//!
//! ```
//! use floorsight::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let mut scene = FloorplanScene::new(20.0, 12.0)?;
//!     scene.add_camera();
//!     scene.set_selected_camera_pitch(-40.0)?;
//!     scene.set_selected_camera_yaw(30.0)?;
//!
//!     for projection in scene.camera_projections() {
//!         for segment in projection.outline.segments() {
//!             println!("{:?} -> {:?}", segment.start, segment.end);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Coordinates
//!
//! The world is Z-up with the room centered on the origin in the XY plane. A
//! camera with zero yaw, pitch and roll looks along +X; positive pitch looks
//! up and positive yaw turns counter-clockwise seen from above.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

mod init;
pub mod scene;
pub mod viewport;

// Re-export core types
pub use floorsight_core::{
    camera::{Camera, Pose},
    compute_corner_rays, compute_floor_projection,
    error::{FloorsightError, Result},
    options::ProjectorOptions,
    stitch_boundary_arc, BoundaryArc, CornerRays, FloorProjector, Intersection, LineVertex, Plane,
    ProjectedPoint, ProjectionOutline, Ray, RoomBoundary, Segment, Wall, DQuat, DVec2, DVec3,
};

pub use init::init;
pub use scene::{CameraProjection, FloorplanScene};
pub use viewport::{fit_floorplan, FloorplanFit};
