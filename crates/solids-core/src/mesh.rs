use glam::Vec3;

/// Indexed triangle mesh: flat vertex buffers plus a triangle list.
///
/// The layout is exactly what the GPU upload step consumes: `positions` and
/// `normals` are tightly packed xyz triplets in the same vertex order, and
/// `indices` holds `u16` triples (the consumer binds a `Uint16Array`, so a
/// generator must never be driven past 65536 vertices -- bounding segment
/// counts is the caller's job). A `Mesh` is built once by a generator and
/// handed to the caller by value; nothing retains a reference afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::with_capacity(vertices * 3),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let index = (self.positions.len() / 3) as u16;
        self.positions.extend_from_slice(&position.to_array());
        self.normals.extend_from_slice(&normal.to_array());
        index
    }

    pub fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[index * 3..index * 3 + 3])
    }

    pub fn normal(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.normals[index * 3..index * 3 + 3])
    }
}
