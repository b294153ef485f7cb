/// Rotation and affine transform matrix builders
use nalgebra::{Matrix4, Vector3};

/// Create a rotation matrix about the x axis from an angle in degrees
pub fn rot_x(theta: f64) -> Matrix4<f64> {
    let (s, c) = theta.to_radians().sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, -s, 0.0, //
        0.0, s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Create a rotation matrix about the y axis from an angle in degrees
pub fn rot_y(theta: f64) -> Matrix4<f64> {
    let (s, c) = theta.to_radians().sin_cos();
    Matrix4::new(
        c, 0.0, s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        -s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Create a rotation matrix about the z axis from an angle in degrees
pub fn rot_z(theta: f64) -> Matrix4<f64> {
    let (s, c) = theta.to_radians().sin_cos();
    Matrix4::new(
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Compose the three elemental rotations for a set of Euler angles (degrees).
///
/// The product is Rx · Ry · Rz, in that exact order. Rotation matrices do not
/// commute; reordering the factors silently changes the orientation.
pub fn rot_xyz(euler: &Vector3<f64>) -> Matrix4<f64> {
    rot_x(euler.x) * rot_y(euler.y) * rot_z(euler.z)
}

/// Create a translation matrix: identity with last column (v.x, v.y, v.z, 1)
pub fn translation(v: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new(
        1.0, 0.0, 0.0, v.x, //
        0.0, 1.0, 0.0, v.y, //
        0.0, 0.0, 1.0, v.z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Create a non-uniform scale matrix: diagonal (v.x, v.y, v.z, 1)
pub fn scaling(v: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new(
        v.x, 0.0, 0.0, 0.0, //
        0.0, v.y, 0.0, 0.0, //
        0.0, 0.0, v.z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}
