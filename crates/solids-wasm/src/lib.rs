use std::f32::consts::PI;

use glam::Vec3;
use wasm_bindgen::prelude::*;

use solids_core::mesh::Mesh;
use solids_core::solids::{generate, SolidParams};
use solids_core::transform::{self, Matrix4};

/// Fixed camera of the viewer: 8 units back on the z axis, y up.
const EYE: Vec3 = Vec3::new(0.0, 0.0, 8.0);

/// Owns the current mesh and the two uniform matrices, and hands JS raw
/// pointer/length pairs so the upload step can view the buffers zero-copy
/// (`Float32Array` over positions/normals/matrices, `Uint16Array` over
/// indices). Pointers are invalidated by `set_solid`; JS re-reads them after
/// every rebuild.
#[wasm_bindgen]
pub struct SolidScene {
    mesh: Mesh,
    spin: Vec3,
    model_view: Matrix4,
    projection: Matrix4,
}

#[wasm_bindgen]
impl SolidScene {
    #[wasm_bindgen(constructor)]
    pub fn new(aspect: f32) -> SolidScene {
        let mesh = generate(&SolidParams::default());
        web_sys::console::log_1(
            &format!("SolidScene created: {} vertices", mesh.vertex_count()).into(),
        );

        let mut scene = SolidScene {
            mesh,
            spin: Vec3::ZERO,
            model_view: Matrix4::IDENTITY,
            projection: transform::perspective(PI / 3.0, aspect, 0.1, 100.0),
        };
        scene.update_model_view();
        scene
    }

    /// Rebuild the mesh from a shape-selector kind and its slider values.
    #[wasm_bindgen]
    pub fn set_solid(&mut self, kind: u32, params: &[f32]) {
        self.mesh = generate(&SolidParams::from_raw(kind, params));
    }

    #[wasm_bindgen]
    pub fn set_projection(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        self.projection = transform::perspective(fov_y, aspect, near, far);
    }

    /// Advance the spin animation by per-axis deltas and refresh the
    /// model-view matrix for the next frame.
    #[wasm_bindgen]
    pub fn advance(&mut self, dx: f32, dy: f32, dz: f32) {
        self.spin += Vec3::new(dx, dy, dz);
        self.update_model_view();
    }

    #[wasm_bindgen]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.mesh.positions.as_ptr()
    }

    #[wasm_bindgen]
    pub fn positions_len(&self) -> usize {
        self.mesh.positions.len()
    }

    #[wasm_bindgen]
    pub fn normals_ptr(&self) -> *const f32 {
        self.mesh.normals.as_ptr()
    }

    #[wasm_bindgen]
    pub fn normals_len(&self) -> usize {
        self.mesh.normals.len()
    }

    #[wasm_bindgen]
    pub fn indices_ptr(&self) -> *const u16 {
        self.mesh.indices.as_ptr()
    }

    #[wasm_bindgen]
    pub fn indices_len(&self) -> usize {
        self.mesh.indices.len()
    }

    #[wasm_bindgen]
    pub fn model_view_ptr(&self) -> *const f32 {
        self.model_view.as_slice().as_ptr()
    }

    #[wasm_bindgen]
    pub fn projection_ptr(&self) -> *const f32 {
        self.projection.as_slice().as_ptr()
    }
}

impl SolidScene {
    fn update_model_view(&mut self) {
        // Same composition order as the render loop: Rz * (Ry * Rx) applied
        // on top of the fixed look-at view.
        let rotation = transform::multiply(
            &transform::rotation_z(self.spin.z),
            &transform::multiply(
                &transform::rotation_y(self.spin.y),
                &transform::rotation_x(self.spin.x),
            ),
        );
        self.model_view =
            transform::multiply(&rotation, &transform::look_at(EYE, Vec3::ZERO, Vec3::Y));
    }
}
