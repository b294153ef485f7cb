/// Camera transform and perspective projection
use nalgebra::{Matrix4, Vector3};

use crate::error::{ProjectionError, Result};
use crate::geometry::LabeledPoint;
use crate::transform::rot_xyz;

/// A point projected onto the viewing plane.
///
/// `depth` stores the projection constant used for the divide, not true
/// depth; it is a placeholder third slot that downstream consumers ignore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub label: &'static str,
}

/// Build the matrix mapping world-space points into camera space.
///
/// The rotation block is the transpose of `rot_xyz(orientation)` (the inverse
/// of an orthonormal matrix is its transpose) and the last column is the
/// negated, un-rotated position. This matches the exact rigid inverse only
/// when the orientation is the identity; a general inverse would rotate the
/// negated position into camera axes first. The shortcut is preserved for
/// compatibility with existing consumers of the projection output.
pub fn world_to_camera(position: &Vector3<f64>, orientation: &Vector3<f64>) -> Matrix4<f64> {
    let r = rot_xyz(orientation);
    Matrix4::new(
        r[(0, 0)], r[(1, 0)], r[(2, 0)], -position.x, //
        r[(0, 1)], r[(1, 1)], r[(2, 1)], -position.y, //
        r[(0, 2)], r[(1, 2)], r[(2, 2)], -position.z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Perspective-divide a camera-space point into screen coordinates.
///
/// screen = (x/z · k, y/z · k) for projection constant k. A camera-space z of
/// zero, or a non-finite result, is reported as an error instead of letting
/// NaN/Infinity leak into the output.
pub fn project(point: &LabeledPoint, projection_constant: f64) -> Result<ProjectedPoint> {
    let p = point.position;
    if p.z == 0.0 {
        return Err(ProjectionError::CameraPlane { label: point.label });
    }

    let x = p.x / p.z * projection_constant;
    let y = p.y / p.z * projection_constant;
    if !x.is_finite() || !y.is_finite() {
        return Err(ProjectionError::NonFinite { label: point.label });
    }

    Ok(ProjectedPoint {
        x,
        y,
        depth: projection_constant,
        label: point.label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::translation;
    use approx::assert_relative_eq;

    #[test]
    fn test_project_reference_point() {
        let p = LabeledPoint::new(2.0, 4.0, 10.0, "p");
        let projected = project(&p, 300.0).unwrap();
        assert_eq!(projected.x, 60.0);
        assert_eq!(projected.y, 120.0);
        assert_eq!(projected.depth, 300.0);
        assert_eq!(projected.label, "p");
    }

    #[test]
    fn test_project_rejects_camera_plane() {
        let p = LabeledPoint::new(1.0, 1.0, 0.0, "flat");
        assert_eq!(
            project(&p, 300.0),
            Err(ProjectionError::CameraPlane { label: "flat" })
        );
    }

    #[test]
    fn test_project_rejects_non_finite() {
        let p = LabeledPoint::new(f64::NAN, 0.0, 10.0, "nan");
        assert_eq!(
            project(&p, 300.0),
            Err(ProjectionError::NonFinite { label: "nan" })
        );
        let p = LabeledPoint::new(f64::INFINITY, 0.0, 10.0, "inf");
        assert_eq!(
            project(&p, 300.0),
            Err(ProjectionError::NonFinite { label: "inf" })
        );
    }

    #[test]
    fn test_world_to_camera_identity_orientation() {
        // With no orientation the transform is a pure negated translation.
        let w = world_to_camera(&Vector3::new(1.0, 2.0, 3.0), &Vector3::zeros());
        let p = LabeledPoint::new(5.0, 5.0, 5.0, "p").transformed(&w);
        assert_eq!(p.position, nalgebra::Point3::new(4.0, 3.0, 2.0));
    }

    #[test]
    fn test_camera_inverse_is_exact_only_for_identity_orientation() {
        let position = Vector3::new(3.0, 0.0, 0.0);

        // Zero orientation: world-to-camera undoes the camera-to-world
        // matrix exactly.
        let forward = translation(&position) * rot_xyz(&Vector3::zeros());
        let round_trip = world_to_camera(&position, &Vector3::zeros()) * forward;
        assert_relative_eq!(round_trip, Matrix4::identity(), epsilon = 1e-12);

        // Non-zero orientation with off-axis position: the un-rotated
        // translation shortcut no longer cancels, so the composition is not
        // the identity.
        let orientation = Vector3::new(0.0, 90.0, 0.0);
        let forward = translation(&position) * rot_xyz(&orientation);
        let round_trip = world_to_camera(&position, &orientation) * forward;
        assert!((round_trip - Matrix4::identity()).norm() > 1.0);
    }
}
