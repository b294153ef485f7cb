/// Scene orchestration: box and camera poses in, eight projected points out
use nalgebra::Vector3;
use tracing::trace;

use crate::error::Result;
use crate::geometry::{Cube, CORNER_COUNT};
use crate::projection::{project, world_to_camera, ProjectedPoint};

/// Base focal-length-like scalar; the effective projection constant is this
/// value times the camera zoom.
pub const BASE_PROJECTION_CONSTANT: f64 = 300.0;

/// Forward standoff added to the camera z position so the camera never sits
/// on the cube's plane at the default pose.
pub const Z_STANDOFF: f64 = 5.0;

/// Pose parameters for the box instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPose {
    /// Euler angles about x, y, z in degrees
    pub rotation: Vector3<f64>,
    /// Per-axis scale factors
    pub scale: Vector3<f64>,
    /// World-space translation
    pub translation: Vector3<f64>,
}

impl Default for BoxPose {
    fn default() -> Self {
        Self {
            rotation: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            translation: Vector3::zeros(),
        }
    }
}

/// Pose parameters for the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Euler angles about x, y, z in degrees
    pub orientation: Vector3<f64>,
    /// World-space position, before the forward standoff is applied
    pub position: Vector3<f64>,
    /// Multiplier on [`BASE_PROJECTION_CONSTANT`]
    pub zoom: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            orientation: Vector3::zeros(),
            position: Vector3::zeros(),
            zoom: 1.0,
        }
    }
}

/// Render one box/camera pair into projected screen points.
///
/// The output always holds exactly [`CORNER_COUNT`] points, order-matched to
/// [`crate::geometry::CORNER_LABELS`]; consumers index positionally. The
/// first corner whose camera-space z degenerates aborts the render.
pub fn render_scene(box_pose: &BoxPose, camera: &CameraPose) -> Result<Vec<ProjectedPoint>> {
    let projection_constant = BASE_PROJECTION_CONSTANT * camera.zoom;
    let camera_position = Vector3::new(
        camera.position.x,
        camera.position.y,
        camera.position.z + Z_STANDOFF,
    );

    let world_wrt_camera = world_to_camera(&camera_position, &camera.orientation);
    let cube = Cube::new(&box_pose.rotation, &box_pose.scale, &box_pose.translation);
    let cube_wrt_camera = world_wrt_camera * cube.world_matrix();
    trace!(zoom = camera.zoom, "projecting cube corners");

    let mut projected = Vec::with_capacity(CORNER_COUNT);
    for corner in Cube::corner_points() {
        let camera_space = corner.transformed(&cube_wrt_camera);
        projected.push(project(&camera_space, projection_constant)?);
    }

    Ok(projected)
}
