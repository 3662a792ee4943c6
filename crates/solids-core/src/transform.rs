//! 4x4 transform construction for the render side.
//!
//! A [`Matrix4`] is 16 floats in the exact flat order the uniform upload step
//! expects (the same buffer the viewer feeds to `uniformMatrix4fv`). Treat the
//! elements as `m[row * 4 + col]`: [`multiply`] contracts over that layout,
//! and the rightmost operand of a product is applied to a vector first.
//!
//! Nothing validates. `near == far`, a zero `up`, or `eye == target` all yield
//! NaN/Inf entries; callers keep their inputs sane.

use glam::Vec3;

/// Row-major 4x4 matrix, a plain value type. Never mutated in place: every
/// constructor returns a fresh matrix and [`multiply`] composes copies.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix4(pub [f32; 16]);

impl Matrix4 {
    pub const IDENTITY: Matrix4 = Matrix4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.0
    }
}

/// Symmetric-frustum perspective projection, clip range `[-1, 1]`.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);
    Matrix4([
        f / aspect, 0.0, 0.0, 0.0, //
        0.0, f, 0.0, 0.0, //
        0.0, 0.0, (far + near) * nf, -1.0, //
        0.0, 0.0, 2.0 * far * near * nf, 0.0,
    ])
}

/// View matrix from an eye position, a target point, and an up direction.
///
/// The rotation block is the transpose of the orthonormal camera basis and the
/// translation row is `-basis . eye`, i.e. inverse rotation plus inverse
/// translation in one matrix. `eye == target` normalizes a zero vector and
/// produces NaN throughout -- undefined by design, not guarded.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Matrix4 {
    let z = (eye - target).normalize();
    let x = up.cross(z).normalize();
    let y = z.cross(x);

    Matrix4([
        x.x, y.x, z.x, 0.0, //
        x.y, y.y, z.y, 0.0, //
        x.z, y.z, z.z, 0.0, //
        -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
    ])
}

pub fn rotation_x(angle: f32) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, -s, 0.0, //
        0.0, s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

pub fn rotation_y(angle: f32) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4([
        c, 0.0, s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        -s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

pub fn rotation_z(angle: f32) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4([
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

pub fn translation(tx: f32, ty: f32, tz: f32) -> Matrix4 {
    Matrix4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        tx, ty, tz, 1.0,
    ])
}

/// Row-major matrix product `result[row][col] = sum_k a[row][k] * b[k][col]`.
/// Not commutative; compose so the rightmost operand hits the vector first.
pub fn multiply(a: &Matrix4, b: &Matrix4) -> Matrix4 {
    let mut result = [0.0f32; 16];
    for row in 0..4 {
        for col in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a.0[row * 4 + k] * b.0[k * 4 + col];
            }
            result[row * 4 + col] = sum;
        }
    }
    Matrix4(result)
}
