/// Labeled points and the canonical unit-cube template
use nalgebra::{Matrix4, Point3, Vector3};

use crate::transform::{rot_xyz, scaling, translation};

/// An immutable labeled 3D point.
///
/// The label identifies which cube corner a numeric result corresponds to and
/// is carried unchanged through every transform and projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    pub position: Point3<f64>,
    pub label: &'static str,
}

impl LabeledPoint {
    pub fn new(x: f64, y: f64, z: f64, label: &'static str) -> Self {
        Self {
            position: Point3::new(x, y, z),
            label,
        }
    }

    /// Affine image of this point under `matrix`, treated as the homogeneous
    /// coordinate (x, y, z, 1).
    ///
    /// Only the first three rows of the matrix participate; every transform
    /// built in this crate keeps the last row at [0, 0, 0, 1].
    pub fn transformed(&self, matrix: &Matrix4<f64>) -> Self {
        let (x, y, z) = (self.position.x, self.position.y, self.position.z);
        Self {
            position: Point3::new(
                x * matrix[(0, 0)] + y * matrix[(0, 1)] + z * matrix[(0, 2)] + matrix[(0, 3)],
                x * matrix[(1, 0)] + y * matrix[(1, 1)] + z * matrix[(1, 2)] + matrix[(1, 3)],
                x * matrix[(2, 0)] + y * matrix[(2, 1)] + z * matrix[(2, 2)] + matrix[(2, 3)],
            ),
            label: self.label,
        }
    }
}

/// Number of corners in the cube template.
pub const CORNER_COUNT: usize = 8;

/// Canonical corner labels, in the fixed order consumers index by.
pub const CORNER_LABELS: [&str; CORNER_COUNT] = [
    "front-top-left",
    "front-top-right",
    "front-bottom-left",
    "front-bottom-right",
    "back-top-left",
    "back-top-right",
    "back-bottom-left",
    "back-bottom-right",
];

/// Template corner coordinates, order-matched to `CORNER_LABELS`.
/// Front = +z, top = +y, right = +x.
const CORNERS: [(f64, f64, f64); CORNER_COUNT] = [
    (-1.0, 1.0, 1.0),
    (1.0, 1.0, 1.0),
    (-1.0, -1.0, 1.0),
    (1.0, -1.0, 1.0),
    (-1.0, 1.0, -1.0),
    (1.0, 1.0, -1.0),
    (-1.0, -1.0, -1.0),
    (1.0, -1.0, -1.0),
];

/// A cube instance: the shared unit-cube template plus a per-instance world
/// matrix computed from pose parameters.
///
/// The template is constant; only the world matrix varies. The cube does not
/// pre-transform its corners, callers compose the world matrix with whatever
/// view transform they need and apply it per point.
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    world_matrix: Matrix4<f64>,
}

impl Cube {
    /// Build an instance from Euler rotation (degrees), per-axis scale and
    /// translation.
    ///
    /// The world matrix is T · (S · R): rotation applied first, then scale,
    /// then translation. The factors do not commute, so the order is fixed.
    pub fn new(rotation: &Vector3<f64>, scale: &Vector3<f64>, translate: &Vector3<f64>) -> Self {
        let r = rot_xyz(rotation);
        Self {
            world_matrix: translation(translate) * (scaling(scale) * r),
        }
    }

    pub fn world_matrix(&self) -> &Matrix4<f64> {
        &self.world_matrix
    }

    /// Center of the template, in local space.
    pub fn center() -> LabeledPoint {
        LabeledPoint::new(0.0, 0.0, 0.0, "cube-center")
    }

    /// The untransformed template corners at (±1, ±1, ±1), canonical order.
    pub fn corner_points() -> [LabeledPoint; CORNER_COUNT] {
        std::array::from_fn(|i| {
            let (x, y, z) = CORNERS[i];
            LabeledPoint::new(x, y, z, CORNER_LABELS[i])
        })
    }
}
