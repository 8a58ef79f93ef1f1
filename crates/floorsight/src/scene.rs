//! Floorplan scene: the room, its cameras and their floor projections.
//!
//! The scene is the command/query surface a UI drives. Commands mutate the
//! room or the selected camera; [`FloorplanScene::camera_projections`]
//! recomputes every outline on demand. Nothing is cached and no change
//! notification is sent.

use floorsight_core::{
    Camera, DVec2, DVec3, FloorProjector, FloorsightError, ProjectionOutline, ProjectorOptions,
    Result, RoomBoundary,
};

/// The floor projection of one camera in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraProjection {
    /// Index of the camera in [`FloorplanScene::cameras`].
    pub camera: usize,
    /// Eye position of the camera when the outline was computed.
    pub eye: DVec3,
    /// The projected floor outline.
    pub outline: ProjectionOutline,
}

/// A room with a list of placed cameras, one of which may be selected.
#[derive(Debug, Clone)]
pub struct FloorplanScene {
    room: RoomBoundary,
    cameras: Vec<Camera>,
    selected: Option<usize>,
    projector: FloorProjector,
}

impl Default for FloorplanScene {
    fn default() -> Self {
        Self {
            room: RoomBoundary::default(),
            cameras: Vec::new(),
            selected: None,
            projector: FloorProjector::default(),
        }
    }
}

impl FloorplanScene {
    /// Creates an empty scene for a room of the given size.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            room: RoomBoundary::new(width, height)?,
            ..Self::default()
        })
    }

    /// Replaces the projector options.
    pub fn with_options(mut self, options: ProjectorOptions) -> Self {
        self.projector = FloorProjector::new(options);
        self
    }

    /// Returns the room boundary.
    pub fn room(&self) -> &RoomBoundary {
        &self.room
    }

    /// Resizes the floorplan.
    pub fn set_floorplan_size(&mut self, width: f64, height: f64) -> Result<()> {
        self.room.set_size(width, height)?;
        log::info!("floorplan size set to {width} x {height}");
        Ok(())
    }

    /// Adds a wall segment to the room. Walls do not occlude projections yet.
    pub fn add_wall(&mut self, start: DVec2, end: DVec2) {
        self.room.add_wall(start, end);
    }

    /// Removes all walls from the room.
    pub fn clear_walls(&mut self) {
        self.room.clear_walls();
    }

    /// Returns all cameras in insertion order.
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Adds a default camera, selects it and returns its index.
    pub fn add_camera(&mut self) -> usize {
        self.cameras.push(Camera::new());
        let index = self.cameras.len() - 1;
        self.selected = Some(index);
        log::info!("added camera {index}");
        index
    }

    /// Selects the camera at `index`.
    pub fn select_camera(&mut self, index: usize) -> Result<()> {
        if index >= self.cameras.len() {
            return Err(FloorsightError::CameraNotFound(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Returns the index of the selected camera.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected camera.
    pub fn selected_camera(&self) -> Option<&Camera> {
        self.selected.and_then(|index| self.cameras.get(index))
    }

    fn selected_camera_mut(&mut self) -> Result<&mut Camera> {
        self.selected
            .and_then(|index| self.cameras.get_mut(index))
            .ok_or(FloorsightError::NoCameraSelected)
    }

    /// Returns the selected camera's yaw, or 0 when nothing is selected.
    pub fn selected_camera_yaw(&self) -> f64 {
        self.selected_camera().map_or(0.0, Camera::yaw)
    }

    /// Returns the selected camera's pitch, or 0 when nothing is selected.
    pub fn selected_camera_pitch(&self) -> f64 {
        self.selected_camera().map_or(0.0, Camera::pitch)
    }

    /// Returns the selected camera's roll, or 0 when nothing is selected.
    pub fn selected_camera_roll(&self) -> f64 {
        self.selected_camera().map_or(0.0, Camera::roll)
    }

    pub fn set_selected_camera_yaw(&mut self, yaw: f64) -> Result<()> {
        self.selected_camera_mut()?.set_yaw(yaw)
    }

    pub fn set_selected_camera_pitch(&mut self, pitch: f64) -> Result<()> {
        self.selected_camera_mut()?.set_pitch(pitch)
    }

    pub fn set_selected_camera_roll(&mut self, roll: f64) -> Result<()> {
        self.selected_camera_mut()?.set_roll(roll)
    }

    pub fn set_selected_camera_position(&mut self, position: DVec3) -> Result<()> {
        self.selected_camera_mut()?.set_position(position)
    }

    pub fn set_selected_camera_field_of_view(&mut self, field_of_view: f64) -> Result<()> {
        self.selected_camera_mut()?.set_field_of_view(field_of_view)
    }

    pub fn set_selected_camera_aspect_ratio(&mut self, aspect_ratio: f64) -> Result<()> {
        self.selected_camera_mut()?.set_aspect_ratio(aspect_ratio)
    }

    /// Restores the selected camera to its defaults.
    pub fn reset_selected_camera(&mut self) -> Result<()> {
        self.selected_camera_mut()?.reset();
        Ok(())
    }

    /// Computes the floor projection of every camera.
    pub fn camera_projections(&self) -> Vec<CameraProjection> {
        self.cameras
            .iter()
            .enumerate()
            .map(|(index, camera)| CameraProjection {
                camera: index,
                eye: camera.position(),
                outline: self.projector.compute_floor_projection(camera, &self.room),
            })
            .collect()
    }
}
