//! Seven parametric solid generators and a dispatcher that selects among them.
//!
//! Each generator is a pure function from a handful of numbers to a finished
//! [`crate::mesh::Mesh`]. None of them validate: a segment count of 0 or 1
//! degenerates to empty or broken triangles, and the UI layer is expected to
//! clamp its sliders before calling in.

pub mod dispatcher;
pub mod primitives;

pub use dispatcher::{generate, SolidParams};
pub use primitives::{
    create_cone, create_cube, create_cylinder, create_ellipsoid, create_hyperboloid,
    create_sphere, create_toroid,
};
