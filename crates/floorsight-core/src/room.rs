//! Rectangular room boundary centered on the origin.

use glam::{DVec2, DVec3};

use crate::error::{FloorsightError, Result};
use crate::plane::Plane;

/// Side length of the default square room, in meters.
pub const DEFAULT_ROOM_SIZE: f64 = 50.0;

/// A wall segment on the floorplan.
///
/// Walls are stored with the room but are not yet consulted by the floor
/// projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    /// Start point in floor coordinates.
    pub start: DVec2,
    /// End point in floor coordinates.
    pub end: DVec2,
}

/// The rectangular extent of a room, `[-w/2, w/2] x [-h/2, h/2]` on the floor.
///
/// The ground plane and the four boundary planes are rebuilt together on
/// every resize so they always match the current size.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomBoundary {
    width: f64,
    height: f64,
    planes: [Plane; 5],
    walls: Vec<Wall>,
}

fn validate_size(width: f64, height: f64) -> Result<()> {
    let valid = |v: f64| v > 0.0 && v.is_finite();
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(FloorsightError::InvalidRoomSize { width, height })
    }
}

fn build_planes(width: f64, height: f64) -> [Plane; 5] {
    let half_width = width * 0.5;
    let half_height = height * 0.5;
    [
        Plane::ground(),
        Plane::from_unit(DVec3::new(0.0, half_height, 0.0), DVec3::Y),
        Plane::from_unit(DVec3::new(0.0, -half_height, 0.0), DVec3::Y),
        Plane::from_unit(DVec3::new(-half_width, 0.0, 0.0), DVec3::X),
        Plane::from_unit(DVec3::new(half_width, 0.0, 0.0), DVec3::X),
    ]
}

impl Default for RoomBoundary {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_SIZE,
            height: DEFAULT_ROOM_SIZE,
            planes: build_planes(DEFAULT_ROOM_SIZE, DEFAULT_ROOM_SIZE),
            walls: Vec::new(),
        }
    }
}

impl RoomBoundary {
    /// Creates a room of the given size.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        validate_size(width, height)?;
        Ok(Self {
            width,
            height,
            planes: build_planes(width, height),
            walls: Vec::new(),
        })
    }

    /// Returns the room width (extent along X).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the room height (extent along Y).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns half the width and half the height.
    pub fn half_extents(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Resizes the room. On error the previous size is kept.
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<()> {
        validate_size(width, height)?;
        self.width = width;
        self.height = height;
        self.planes = build_planes(width, height);
        log::debug!("room resized to {width} x {height}");
        Ok(())
    }

    /// Returns the ground plane.
    pub fn ground_plane(&self) -> &Plane {
        &self.planes[0]
    }

    /// Returns the four boundary planes: top, bottom, left, right.
    pub fn boundary_planes(&self) -> &[Plane] {
        &self.planes[1..]
    }

    /// Returns all intersection candidates: the ground plane followed by the
    /// four boundary planes.
    pub fn planes(&self) -> &[Plane; 5] {
        &self.planes
    }

    /// Returns the four floor corners at ground level.
    pub fn corners(&self) -> [DVec3; 4] {
        let half = self.half_extents();
        [
            DVec3::new(half.x, half.y, 0.0),
            DVec3::new(-half.x, half.y, 0.0),
            DVec3::new(-half.x, -half.y, 0.0),
            DVec3::new(half.x, -half.y, 0.0),
        ]
    }

    /// Returns whether a floor point lies inside the room (edges included).
    pub fn contains(&self, point: DVec2) -> bool {
        let half = self.half_extents();
        point.x.abs() <= half.x && point.y.abs() <= half.y
    }

    /// Adds a wall segment.
    pub fn add_wall(&mut self, start: DVec2, end: DVec2) {
        self.walls.push(Wall { start, end });
    }

    /// Returns the stored wall segments.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Removes all wall segments.
    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }
}
