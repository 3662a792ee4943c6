//! Parametric solid meshes and the transforms that place them.
//!
//! Two independent halves: [`solids`] turns a small parameter record into an
//! indexed triangle [`mesh::Mesh`], and [`transform`] builds the 4x4 matrices
//! the render side uploads as uniforms. Everything here is pure computation --
//! no I/O, no shared state, every function re-entrant -- so the render loop
//! and the wasm boundary can call into it freely.

pub mod mesh;
pub mod solids;
pub mod transform;
