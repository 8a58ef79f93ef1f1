//! Projection of a camera's field of view onto the room floor.
//!
//! Each corner ray is clipped to the first surface it meets: the ground or
//! one of the room's boundary planes. The four projected corners are joined
//! into a closed outline. Where a corner ray meets nothing, the gap is closed
//! with a boundary arc that walks the room corners lying angularly between
//! the two visible neighbors, as seen from the camera.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use crate::camera::Camera;
use crate::frustum::{compute_corner_rays, CornerRays, CORNER_COUNT};
use crate::options::ProjectorOptions;
use crate::plane::{Plane, Ray};
use crate::room::RoomBoundary;

/// A projected outline vertex.
///
/// `point` is `None` when the corner ray has no valid intersection (a
/// boundary case). `synthesized` marks room corners inserted by a boundary
/// arc, as opposed to points taken from a plane intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    point: Option<DVec3>,
    synthesized: bool,
}

impl ProjectedPoint {
    /// A point found by intersecting a ray with the ground or a boundary plane.
    pub fn hit(point: DVec3) -> Self {
        Self {
            point: Some(point),
            synthesized: false,
        }
    }

    /// A corner ray with no valid intersection.
    pub fn missing() -> Self {
        Self {
            point: None,
            synthesized: false,
        }
    }

    /// A room corner inserted while stitching a boundary arc.
    pub fn arc_vertex(point: DVec3) -> Self {
        Self {
            point: Some(point),
            synthesized: true,
        }
    }

    /// Returns the point, if any.
    pub fn point(&self) -> Option<DVec3> {
        self.point
    }

    /// Returns whether this vertex was synthesized by a boundary arc.
    pub fn is_synthesized(&self) -> bool {
        self.synthesized
    }

    /// Returns whether the corner ray found no intersection.
    pub fn is_boundary_case(&self) -> bool {
        self.point.is_none()
    }
}

/// A straight line segment between two world points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec3,
    pub end: DVec3,
}

impl Segment {
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }
}

/// A line-list vertex ready for upload by a renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

impl From<DVec3> for LineVertex {
    fn from(point: DVec3) -> Self {
        Self {
            position: point.as_vec3().to_array(),
        }
    }
}

/// The floor footprint of one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionOutline {
    corners: [ProjectedPoint; CORNER_COUNT],
    segments: Vec<Segment>,
    sight_lines: Vec<Segment>,
}

impl ProjectionOutline {
    /// Returns the projected corner for each ray, in ray order.
    pub fn corners(&self) -> &[ProjectedPoint; CORNER_COUNT] {
        &self.corners
    }

    /// Returns the outline segments in emission order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the eye-to-hit segments (empty unless enabled in the options).
    pub fn sight_lines(&self) -> &[Segment] {
        &self.sight_lines
    }

    /// Returns the number of corner rays that found no intersection.
    pub fn boundary_case_count(&self) -> usize {
        self.corners.iter().filter(|c| c.is_boundary_case()).count()
    }

    /// Returns whether the outline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Flattens outline and sight-line segments into a line list.
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        self.segments
            .iter()
            .chain(&self.sight_lines)
            .flat_map(|s| [LineVertex::from(s.start), LineVertex::from(s.end)])
            .collect()
    }
}

/// A polyline between two visible points that passes through the room
/// corners angularly between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryArc {
    vertices: Vec<ProjectedPoint>,
}

impl BoundaryArc {
    /// Returns the arc vertices, ordered by camera-relative polar angle.
    pub fn vertices(&self) -> &[ProjectedPoint] {
        &self.vertices
    }

    /// Returns whether the arc has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns one segment per consecutive vertex pair.
    pub fn segments(&self) -> Vec<Segment> {
        self.vertices
            .windows(2)
            .filter_map(|pair| Some(Segment::new(pair[0].point()?, pair[1].point()?)))
            .collect()
    }
}

/// Returns the polar angle of `point` around `center` in the floor plane,
/// in `[0, 2*PI)`.
///
/// This is `atan2(dy, dx) + PI` of the normalized horizontal offset. Returns
/// `None` when the point sits directly above or below the center.
pub fn polar_angle(center: DVec3, point: DVec3) -> Option<f64> {
    let offset = (point - center).truncate().try_normalize()?;
    let angle = offset.y.atan2(offset.x) + PI;
    Some(if angle >= TAU { angle - TAU } else { angle })
}

/// Returns the nearest intersection of `ray` with any of `planes`.
///
/// Parallel planes and planes behind the origin are skipped. On equal
/// distances the first plane wins.
pub fn nearest_hit(ray: &Ray, planes: &[Plane], parallel_epsilon: f64) -> Option<(DVec3, f64)> {
    planes
        .iter()
        .filter_map(|plane| plane.intersect(ray, parallel_epsilon).hit())
        .fold(None, |best, (point, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((point, distance)),
        })
}

/// Builds the boundary arc from `a` to `b` around the camera at `eye`.
///
/// The two points are ordered by polar angle, then every room corner whose
/// angle falls within that closed interval is inserted between them. If
/// either point has no camera-relative angle the arc is empty.
pub fn stitch_boundary_arc(eye: DVec3, a: DVec3, b: DVec3, room: &RoomBoundary) -> BoundaryArc {
    let (Some(angle_a), Some(angle_b)) = (polar_angle(eye, a), polar_angle(eye, b)) else {
        log::debug!("skipping boundary arc: endpoint directly under the camera");
        return BoundaryArc::default();
    };

    let (first, last) = if angle_a <= angle_b {
        ((angle_a, a), (angle_b, b))
    } else {
        ((angle_b, b), (angle_a, a))
    };

    let mut candidates = vec![
        (first.0, ProjectedPoint::hit(first.1)),
        (last.0, ProjectedPoint::hit(last.1)),
    ];
    candidates.extend(room.corners().into_iter().filter_map(|corner| {
        polar_angle(eye, corner).map(|angle| (angle, ProjectedPoint::arc_vertex(corner)))
    }));
    candidates.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));

    let vertices = candidates
        .into_iter()
        .filter(|(angle, _)| (first.0..=last.0).contains(angle))
        .map(|(_, vertex)| vertex)
        .collect();

    BoundaryArc { vertices }
}

/// Projects camera frustums onto the floor of a room.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloorProjector {
    options: ProjectorOptions,
}

impl FloorProjector {
    /// Creates a projector with the given options.
    pub fn new(options: ProjectorOptions) -> Self {
        Self { options }
    }

    /// Returns the projector options.
    pub fn options(&self) -> &ProjectorOptions {
        &self.options
    }

    /// Computes the floor outline of `camera` inside `room`.
    ///
    /// Pure with respect to its inputs: repeated calls on unchanged state
    /// return identical outlines.
    pub fn compute_floor_projection(&self, camera: &Camera, room: &RoomBoundary) -> ProjectionOutline {
        self.project_corner_rays(&compute_corner_rays(camera), room)
    }

    /// Projects four corner rays and stitches them into a closed outline.
    ///
    /// Edges are visited as (0,1), (1,2), (2,3), (3,0). An edge between two
    /// hits is a straight segment. A run of missing corners is bridged once,
    /// on the edge entering it, by a boundary arc from the last hit before
    /// the run to the first hit after it. Edges leaving a run or lying
    /// inside it add nothing, and a pair of hits separated by two runs is
    /// bridged only once.
    pub fn project_corner_rays(&self, rays: &CornerRays, room: &RoomBoundary) -> ProjectionOutline {
        let epsilon = self.options.parallel_epsilon;

        let corners = (*rays.rays()).map(|ray| {
            nearest_hit(&ray, room.planes(), epsilon)
                .map_or_else(ProjectedPoint::missing, |(point, _)| ProjectedPoint::hit(point))
        });

        let mut segments = Vec::new();
        let mut bridged: Vec<(usize, usize)> = Vec::new();
        for from in 0..CORNER_COUNT {
            let to = (from + 1) % CORNER_COUNT;
            let Some(start) = corners[from].point() else {
                continue;
            };

            if let Some(end) = corners[to].point() {
                segments.push(Segment::new(start, end));
                continue;
            }

            log::debug!("corner ray {to} has no floor or boundary hit");
            let resume = (1..CORNER_COUNT)
                .map(|step| (to + step) % CORNER_COUNT)
                .take_while(|&index| index != from)
                .find_map(|index| corners[index].point().map(|point| (index, point)));

            if let Some((resume_index, end)) = resume {
                let pair = (from.min(resume_index), from.max(resume_index));
                if bridged.contains(&pair) {
                    continue;
                }
                bridged.push(pair);
                let arc = stitch_boundary_arc(rays.eye(), start, end, room);
                segments.extend(arc.segments());
            }
        }

        let sight_lines = if self.options.include_sight_lines {
            rays.rays()
                .iter()
                .zip(&corners)
                .filter_map(|(ray, corner)| Some(Segment::new(ray.origin(), corner.point()?)))
                .collect()
        } else {
            Vec::new()
        };

        ProjectionOutline {
            corners,
            segments,
            sight_lines,
        }
    }
}

/// Computes the floor outline of `camera` inside `room` with default options.
pub fn compute_floor_projection(camera: &Camera, room: &RoomBoundary) -> ProjectionOutline {
    FloorProjector::default().compute_floor_projection(camera, room)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Pose;
    use glam::DVec2;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn ray_towards(eye: DVec3, target: DVec3) -> Ray {
        Ray::new(eye, target - eye).unwrap()
    }

    fn looking_down_camera() -> Camera {
        let pose = Pose::new(DVec3::new(0.0, 0.0, 3.0), 0.0, -60.0, 0.0).unwrap();
        Camera::with_intrinsics(pose, 40.0, 4.0 / 3.0).unwrap()
    }

    /// Eye at the room center with ray 0 pointing straight up.
    fn one_missing_corner() -> (CornerRays, [DVec3; 3]) {
        let eye = DVec3::new(0.0, 0.0, 2.0);
        let targets = [
            DVec3::new(-1.0, 2.0, 0.0),
            DVec3::new(-2.0, -2.0, 0.0),
            DVec3::new(2.0, 1.0, 0.0),
        ];
        let rays = CornerRays::new(
            eye,
            [
                Ray::new(eye, DVec3::Z).unwrap(),
                ray_towards(eye, targets[0]),
                ray_towards(eye, targets[1]),
                ray_towards(eye, targets[2]),
            ],
        );
        (rays, targets)
    }

    #[test]
    fn test_polar_angle() {
        let eye = DVec3::new(0.0, 0.0, 5.0);
        let angle = polar_angle(eye, DVec3::new(1.0, 1.0, 0.0)).unwrap();
        assert!((angle - 5.0 * PI / 4.0).abs() < EPS);

        let angle = polar_angle(eye, DVec3::new(-1.0, -1.0, 0.0)).unwrap();
        assert!((angle - PI / 4.0).abs() < EPS);

        // Straight ahead along -X wraps to zero rather than 2*PI.
        let angle = polar_angle(eye, DVec3::new(-3.0, 0.0, 0.0)).unwrap();
        assert!((0.0..TAU).contains(&angle));

        assert!(polar_angle(eye, DVec3::new(0.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_nearest_hit_prefers_boundary_plane() {
        let room = RoomBoundary::new(4.0, 4.0).unwrap();
        let eye = DVec3::new(0.0, 0.0, 1.0);
        // The ground hit would be at x = 10, well outside the room.
        let ray = ray_towards(eye, DVec3::new(10.0, 0.0, 0.0));

        let (ground_point, ground_distance) = room
            .ground_plane()
            .intersect(&ray, EPS)
            .hit()
            .unwrap();
        assert!(!room.contains(ground_point.truncate()));

        let (point, distance) = nearest_hit(&ray, room.planes(), EPS).unwrap();
        assert!(distance < ground_distance);
        assert!((point.x - 2.0).abs() < 1e-12);
        assert!(point.z > 0.0);
    }

    #[test]
    fn test_nearest_hit_ground_inside_room() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let eye = DVec3::new(0.0, 0.0, 2.0);
        let (point, distance) = nearest_hit(&ray_towards(eye, DVec3::new(1.0, 1.0, 0.0)), room.planes(), EPS).unwrap();
        assert!(point.z.abs() < 1e-12);
        assert!((distance - 6.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_nearest_hit_none_for_vertical_up() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let ray = Ray::new(DVec3::new(1.0, 1.0, 2.0), DVec3::Z).unwrap();
        assert!(nearest_hit(&ray, room.planes(), EPS).is_none());
    }

    #[test]
    fn test_outline_fully_on_floor() {
        let room = RoomBoundary::new(100.0, 100.0).unwrap();
        let outline = compute_floor_projection(&looking_down_camera(), &room);

        assert_eq!(outline.boundary_case_count(), 0);
        assert_eq!(outline.segments().len(), 4);
        assert!(outline.sight_lines().is_empty());
        for corner in outline.corners() {
            let point = corner.point().unwrap();
            assert!(!corner.is_synthesized());
            assert!(point.z.abs() < EPS);
            assert!(point.x > 0.0);
        }

        // Closed loop: each segment ends where the next begins.
        let segments = outline.segments();
        for i in 0..segments.len() {
            assert_eq!(segments[i].end, segments[(i + 1) % segments.len()].start);
        }
    }

    #[test]
    fn test_outline_clipped_by_small_room() {
        let room = RoomBoundary::new(2.0, 2.0).unwrap();
        let outline = compute_floor_projection(&looking_down_camera(), &room);
        let far = outline.corners()[0].point().unwrap();
        assert!((far.x - 1.0).abs() < 1e-12 || (far.y.abs() - 1.0).abs() < 1e-12);
        assert!(far.z > 0.0);
    }

    #[test]
    fn test_boundary_arc_passes_through_corner() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let (rays, targets) = one_missing_corner();
        let outline = FloorProjector::default().project_corner_rays(&rays, &room);

        assert!(outline.corners()[0].is_boundary_case());
        assert_eq!(outline.boundary_case_count(), 1);

        // Edges (1,2) and (2,3), then the arc 3 -> (5,5) -> 1.
        let segments = outline.segments();
        assert_eq!(segments.len(), 4);
        assert!((segments[2].start - targets[2]).length() < EPS);
        assert_eq!(segments[2].end, DVec3::new(5.0, 5.0, 0.0));
        assert_eq!(segments[3].start, DVec3::new(5.0, 5.0, 0.0));
        assert!((segments[3].end - targets[0]).length() < EPS);
    }

    #[test]
    fn test_stitch_boundary_arc_vertices() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let eye = DVec3::new(0.0, 0.0, 2.0);
        let a = DVec3::new(-1.0, 2.0, 0.0);
        let b = DVec3::new(2.0, 1.0, 0.0);

        let arc = stitch_boundary_arc(eye, a, b, &room);
        let vertices = arc.vertices();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0].point(), Some(b));
        assert!(vertices[1].is_synthesized());
        assert_eq!(vertices[1].point(), Some(DVec3::new(5.0, 5.0, 0.0)));
        assert_eq!(vertices[2].point(), Some(a));
        assert_eq!(arc.segments().len(), 2);

        // Argument order does not matter.
        assert_eq!(stitch_boundary_arc(eye, b, a, &room), arc);
    }

    #[test]
    fn test_stitch_boundary_arc_degenerate_endpoint() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let eye = DVec3::new(1.0, 1.0, 3.0);
        let arc = stitch_boundary_arc(eye, DVec3::new(1.0, 1.0, 0.0), DVec3::new(2.0, -2.0, 0.0), &room);
        assert!(arc.is_empty());
        assert!(arc.segments().is_empty());
    }

    #[test]
    fn test_all_corners_missing() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let eye = DVec3::new(0.0, 0.0, 2.0);
        let up = Ray::new(eye, DVec3::Z).unwrap();
        let outline = FloorProjector::default().project_corner_rays(&CornerRays::new(eye, [up; 4]), &room);
        assert_eq!(outline.boundary_case_count(), 4);
        assert!(outline.is_empty());
    }

    #[test]
    fn test_single_visible_corner_emits_nothing() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let eye = DVec3::new(0.0, 0.0, 2.0);
        let up = Ray::new(eye, DVec3::Z).unwrap();
        let down = ray_towards(eye, DVec3::new(1.0, 0.0, 0.0));
        let outline = FloorProjector::default().project_corner_rays(&CornerRays::new(eye, [up, down, up, up]), &room);
        assert_eq!(outline.boundary_case_count(), 3);
        assert!(outline.is_empty());
    }

    #[test]
    fn test_two_adjacent_missing_corners() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let eye = DVec3::new(0.0, 0.0, 2.0);
        let up = Ray::new(eye, DVec3::Z).unwrap();
        let a = DVec3::new(2.0, 1.0, 0.0);
        let b = DVec3::new(-1.0, 2.0, 0.0);
        let rays = CornerRays::new(eye, [ray_towards(eye, a), up, up, ray_towards(eye, b)]);
        let outline = FloorProjector::default().project_corner_rays(&rays, &room);

        assert_eq!(outline.boundary_case_count(), 2);
        let segments = outline.segments();
        assert_eq!(segments.len(), 3);
        assert!((segments[0].start - a).length() < EPS);
        assert_eq!(segments[0].end, DVec3::new(5.0, 5.0, 0.0));
        assert_eq!(segments[1].start, DVec3::new(5.0, 5.0, 0.0));
        assert!((segments[1].end - b).length() < EPS);
        assert!((segments[2].start - b).length() < EPS);
        assert!((segments[2].end - a).length() < EPS);
    }

    #[test]
    fn test_opposite_missing_corners_bridge_once() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let eye = DVec3::new(0.0, 0.0, 2.0);
        let up = Ray::new(eye, DVec3::Z).unwrap();
        let a = DVec3::new(2.0, 1.0, 0.0);
        let b = DVec3::new(-1.0, 2.0, 0.0);
        let rays = CornerRays::new(eye, [up, ray_towards(eye, a), up, ray_towards(eye, b)]);
        let outline = FloorProjector::default().project_corner_rays(&rays, &room);

        assert_eq!(outline.boundary_case_count(), 2);
        let segments = outline.segments();
        assert_eq!(segments.len(), 2);
        assert!((segments[0].start - a).length() < EPS);
        assert_eq!(segments[0].end, DVec3::new(5.0, 5.0, 0.0));
        assert!((segments[1].end - b).length() < EPS);
        assert_ne!(segments[0], segments[1]);
    }

    #[test]
    fn test_sight_lines() {
        let room = RoomBoundary::new(10.0, 10.0).unwrap();
        let (rays, targets) = one_missing_corner();
        let projector = FloorProjector::new(ProjectorOptions {
            include_sight_lines: true,
            ..ProjectorOptions::default()
        });
        let outline = projector.project_corner_rays(&rays, &room);

        assert_eq!(outline.sight_lines().len(), 3);
        for (line, target) in outline.sight_lines().iter().zip(targets) {
            assert_eq!(line.start, rays.eye());
            assert!((line.end - target).length() < EPS);
        }
        assert_eq!(outline.line_vertices().len(), 2 * (4 + 3));
    }

    #[test]
    fn test_line_vertices() {
        let room = RoomBoundary::new(100.0, 100.0).unwrap();
        let outline = compute_floor_projection(&looking_down_camera(), &room);
        let vertices = outline.line_vertices();
        assert_eq!(vertices.len(), 8);
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 8 * 12);
    }

    #[test]
    fn test_walls_do_not_affect_projection() {
        let mut room = RoomBoundary::new(10.0, 10.0).unwrap();
        let camera = looking_down_camera();
        let before = compute_floor_projection(&camera, &room);
        room.add_wall(DVec2::new(1.0, -5.0), DVec2::new(1.0, 5.0));
        assert_eq!(compute_floor_projection(&camera, &room), before);
    }

    proptest! {
        #[test]
        fn prop_projection_is_idempotent(
            x in -4.0..4.0f64,
            y in -4.0..4.0f64,
            z in 0.5..5.0f64,
            yaw in -180.0..180.0f64,
            pitch in -85.0..85.0f64,
            roll in -30.0..30.0f64,
        ) {
            let pose = Pose::new(DVec3::new(x, y, z), yaw, pitch, roll).unwrap();
            let camera = Camera::with_intrinsics(pose, 60.0, 4.0 / 3.0).unwrap();
            let room = RoomBoundary::new(10.0, 8.0).unwrap();
            let projector = FloorProjector::default();

            let first = projector.compute_floor_projection(&camera, &room);
            let second = projector.compute_floor_projection(&camera, &room);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_arc_is_angle_ordered(
            ex in -4.0..4.0f64,
            ey in -4.0..4.0f64,
            ax in -5.0..5.0f64,
            ay in -5.0..5.0f64,
            bx in -5.0..5.0f64,
            by in -5.0..5.0f64,
        ) {
            let room = RoomBoundary::new(10.0, 10.0).unwrap();
            let eye = DVec3::new(ex, ey, 2.0);
            let arc = stitch_boundary_arc(eye, DVec3::new(ax, ay, 0.0), DVec3::new(bx, by, 0.0), &room);

            let angles: Vec<f64> = arc
                .vertices()
                .iter()
                .filter_map(|v| polar_angle(eye, v.point()?))
                .collect();
            prop_assert_eq!(angles.len(), arc.vertices().len());
            for pair in angles.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
            if !arc.is_empty() {
                prop_assert!(!arc.vertices()[0].is_synthesized());
                prop_assert!(!arc.vertices()[arc.vertices().len() - 1].is_synthesized());
            }
        }
    }
}
