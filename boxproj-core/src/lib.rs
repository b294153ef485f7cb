/// BoxProj Core Library - Cube transform and projection pipeline
///
/// This library provides the stateless core for projecting a single posed
/// cube onto a 2D viewing plane: rotation/scale/translation matrix builders,
/// labeled 3D points, the canonical unit-cube template, the world-to-camera
/// transform, and the perspective projection stage. Pose parameters go in,
/// eight ordered labeled screen points come out; nothing is cached between
/// calls.

pub mod error;
pub mod transform;
pub mod geometry;
pub mod projection;
pub mod pipeline;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use geometry::{Cube, LabeledPoint, CORNER_COUNT, CORNER_LABELS};
pub use projection::{project, world_to_camera, ProjectedPoint};
pub use pipeline::{render_scene, BoxPose, CameraPose, BASE_PROJECTION_CONSTANT, Z_STANDOFF};
