/// BoxProj Web - WASM bindings for the cube projection pipeline
///
/// Exposes the render entry point to JavaScript: a renderer object holding
/// the current box and camera poses, returning the eight projected corners as
/// a flat numeric array.

use nalgebra::Vector3;
use wasm_bindgen::prelude::*;

use boxproj_core::{render_scene, BoxPose, CameraPose, CORNER_LABELS};

#[wasm_bindgen]
pub struct SceneRenderer {
    box_pose: BoxPose,
    camera: CameraPose,
}

#[wasm_bindgen]
impl SceneRenderer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SceneRenderer {
        SceneRenderer {
            box_pose: BoxPose::default(),
            camera: CameraPose::default(),
        }
    }

    /// Set the box pose: rotation (degrees), per-axis scale, translation
    #[allow(clippy::too_many_arguments)]
    pub fn set_box_pose(
        &mut self,
        rx: f64,
        ry: f64,
        rz: f64,
        sx: f64,
        sy: f64,
        sz: f64,
        tx: f64,
        ty: f64,
        tz: f64,
    ) {
        self.box_pose = BoxPose {
            rotation: Vector3::new(rx, ry, rz),
            scale: Vector3::new(sx, sy, sz),
            translation: Vector3::new(tx, ty, tz),
        };
    }

    /// Set the camera pose: orientation (degrees), position, zoom
    pub fn set_camera(&mut self, rx: f64, ry: f64, rz: f64, tx: f64, ty: f64, tz: f64, zoom: f64) {
        self.camera = CameraPose {
            orientation: Vector3::new(rx, ry, rz),
            position: Vector3::new(tx, ty, tz),
            zoom,
        };
    }

    /// Project the posed cube: 24 numbers, (x, y, depth) per corner in
    /// canonical order. A degenerate projection becomes a JS error string.
    pub fn render(&self) -> Result<Vec<f64>, JsValue> {
        let points = render_scene(&self.box_pose, &self.camera)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut flat = Vec::with_capacity(points.len() * 3);
        for point in &points {
            flat.extend_from_slice(&[point.x, point.y, point.depth]);
        }
        Ok(flat)
    }

    /// Canonical corner labels, order-matched to the `render` output
    pub fn corner_labels() -> Vec<JsValue> {
        CORNER_LABELS.iter().map(|l| JsValue::from_str(l)).collect()
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}
