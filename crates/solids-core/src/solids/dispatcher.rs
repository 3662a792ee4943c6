//! Selects a solid family by parameter record or by raw shape id.
//!
//! The raw-id path exists for the wasm boundary, where the shape selector
//! hands over a numeric kind and a flat slider slice; missing slots fall back
//! to the selector's default slider values.

use crate::mesh::Mesh;
use crate::solids::primitives::*;

/// Per-shape parameter record. Field meanings follow the viewer's sliders;
/// segment/band counts below 3 (1 for cylinder height segments) produce
/// degenerate triangulations and are the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolidParams {
    Cube {
        size: f32,
    },
    Sphere {
        radius: f32,
        lat_bands: u32,
        long_bands: u32,
    },
    Ellipsoid {
        radius_x: f32,
        radius_y: f32,
        radius_z: f32,
        lat_bands: u32,
        long_bands: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Cylinder {
        radius: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
    },
    Toroid {
        major_radius: f32,
        minor_radius: f32,
        major_segments: u32,
        minor_segments: u32,
    },
    Hyperboloid {
        a: f32,
        b: f32,
        c: f32,
        height: f32,
        segments: u32,
    },
}

impl Default for SolidParams {
    /// The viewer starts on a cube of size 2.
    fn default() -> Self {
        SolidParams::Cube { size: 2.0 }
    }
}

impl SolidParams {
    /// Decode a `(kind, values)` pair from the selector UI.
    ///
    /// Kinds: 0 cube, 1 sphere, 2 ellipsoid, 3 cone, 4 cylinder, 5 toroid,
    /// 6 hyperboloid. `values` holds the sliders in declaration order; any
    /// missing tail takes the slider default. Unknown kinds fall back to the
    /// default cube.
    pub fn from_raw(kind: u32, values: &[f32]) -> Self {
        let get = |i: usize, default: f32| values.get(i).copied().unwrap_or(default);

        match kind {
            0 => SolidParams::Cube { size: get(0, 2.0) },
            1 => SolidParams::Sphere {
                radius: get(0, 2.0),
                lat_bands: get(1, 20.0) as u32,
                long_bands: get(2, 20.0) as u32,
            },
            2 => SolidParams::Ellipsoid {
                radius_x: get(0, 2.0),
                radius_y: get(1, 1.4),
                radius_z: get(2, 1.0),
                lat_bands: get(3, 20.0) as u32,
                long_bands: get(4, 20.0) as u32,
            },
            3 => SolidParams::Cone {
                radius: get(0, 2.0),
                height: get(1, 5.0),
                segments: get(2, 20.0) as u32,
            },
            4 => SolidParams::Cylinder {
                radius: get(0, 2.0),
                height: get(1, 5.0),
                radial_segments: get(2, 20.0) as u32,
                height_segments: get(3, 10.0) as u32,
            },
            5 => SolidParams::Toroid {
                major_radius: get(0, 2.7),
                minor_radius: get(1, 1.2),
                major_segments: get(2, 20.0) as u32,
                minor_segments: get(3, 20.0) as u32,
            },
            6 => SolidParams::Hyperboloid {
                a: get(0, 1.0),
                b: get(1, 1.0),
                c: get(2, 1.0),
                height: get(3, 5.0),
                segments: get(4, 20.0) as u32,
            },
            _ => SolidParams::default(),
        }
    }
}

/// Build the mesh for a parameter record.
pub fn generate(params: &SolidParams) -> Mesh {
    match *params {
        SolidParams::Cube { size } => create_cube(size),
        SolidParams::Sphere {
            radius,
            lat_bands,
            long_bands,
        } => create_sphere(radius, lat_bands, long_bands),
        SolidParams::Ellipsoid {
            radius_x,
            radius_y,
            radius_z,
            lat_bands,
            long_bands,
        } => create_ellipsoid(radius_x, radius_y, radius_z, lat_bands, long_bands),
        SolidParams::Cone {
            radius,
            height,
            segments,
        } => create_cone(radius, height, segments),
        SolidParams::Cylinder {
            radius,
            height,
            radial_segments,
            height_segments,
        } => create_cylinder(radius, height, radial_segments, height_segments),
        SolidParams::Toroid {
            major_radius,
            minor_radius,
            major_segments,
            minor_segments,
        } => create_toroid(major_radius, minor_radius, major_segments, minor_segments),
        SolidParams::Hyperboloid {
            a,
            b,
            c,
            height,
            segments,
        } => create_hyperboloid(a, b, c, height, segments),
    }
}
