//! Rays, planes and ray-plane intersection.
//!
//! Missing an intersection is an ordinary outcome here, so [`Plane::intersect`]
//! reports it through [`Intersection`] rather than an error.

use glam::DVec3;

/// Default threshold below which a ray is considered parallel to a plane.
pub const DEFAULT_PARALLEL_EPSILON: f64 = 1e-9;

/// A half-line cast from an origin along a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Creates a ray, normalizing the direction.
    ///
    /// Returns `None` if the direction has zero or non-finite length.
    pub fn new(origin: DVec3, direction: DVec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Creates a ray from a direction that is already unit length.
    pub(crate) fn from_unit(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Returns the origin of the ray.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Returns the unit direction of the ray.
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Returns the point at distance `t` along the ray.
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Result of intersecting a ray with a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The ray meets the plane in front of its origin.
    Hit {
        /// Intersection point.
        point: DVec3,
        /// Distance along the ray direction, strictly positive.
        distance: f64,
    },
    /// The ray runs parallel to the plane.
    Parallel,
    /// The plane is met behind the ray origin (or exactly at it).
    Behind,
}

impl Intersection {
    /// Returns the hit point and distance, if any.
    pub fn hit(self) -> Option<(DVec3, f64)> {
        match self {
            Self::Hit { point, distance } => Some((point, distance)),
            Self::Parallel | Self::Behind => None,
        }
    }
}

/// An infinite plane through a point with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: DVec3,
    normal: DVec3,
}

impl Plane {
    /// Creates a plane, normalizing the normal.
    ///
    /// Returns `None` if the normal has zero or non-finite length.
    pub fn new(origin: DVec3, normal: DVec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self { origin, normal })
    }

    /// The ground plane: through the world origin, facing +Z.
    pub fn ground() -> Self {
        Self {
            origin: DVec3::ZERO,
            normal: DVec3::Z,
        }
    }

    /// Creates a plane from a normal that is already unit length.
    pub(crate) fn from_unit(origin: DVec3, normal: DVec3) -> Self {
        Self { origin, normal }
    }

    /// Returns the origin point of the plane.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Returns the unit normal of the plane.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the signed distance from a point to the plane.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Projects a point onto the plane.
    pub fn project(&self, point: DVec3) -> DVec3 {
        point - self.signed_distance(point) * self.normal
    }

    /// Intersects a ray with this plane.
    ///
    /// Rays with `|direction . normal| < parallel_epsilon` are reported as
    /// [`Intersection::Parallel`]; hits at a non-positive distance are
    /// [`Intersection::Behind`].
    pub fn intersect(&self, ray: &Ray, parallel_epsilon: f64) -> Intersection {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < parallel_epsilon {
            return Intersection::Parallel;
        }

        let distance = (self.origin - ray.origin()).dot(self.normal) / denom;
        if !distance.is_finite() || distance <= 0.0 {
            return Intersection::Behind;
        }

        Intersection::Hit {
            point: ray.point_at(distance),
            distance,
        }
    }
}
