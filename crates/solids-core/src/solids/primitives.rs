//! The seven solid families.
//!
//! Grid surfaces (sphere, ellipsoid, toroid, hyperboloid, cylinder side) share
//! one vertex layout: the major parameter iterates outer, the minor inner, so a
//! vertex sits at flat index `major * (minor_steps + 1) + minor`. The wrap
//! column is a duplicated seam vertex, not a wrapped index -- downstream buffer
//! contracts depend on that exact vertex count and order, so keep it.
//!
//! Several normal policies are deliberate approximations carried over from the
//! shipped viewer, not bugs: ellipsoid normals stay on the unit sphere, cone
//! side normals use a fixed 0.5 pitch, hyperboloid normals ignore the slope.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::mesh::Mesh;

/// Emit two triangles per cell of a `(major_steps + 1) x (minor_steps + 1)`
/// vertex grid that was pushed major-outer, minor-inner.
fn stitch_grid(mesh: &mut Mesh, major_steps: u32, minor_steps: u32) {
    for i in 0..major_steps {
        for j in 0..minor_steps {
            let first = (i * (minor_steps + 1) + j) as u16;
            let second = first + minor_steps as u16 + 1;
            mesh.push_triangle(first, second, first + 1);
            mesh.push_triangle(second, second + 1, first + 1);
        }
    }
}

/// Axis-aligned cube with flat per-face normals.
///
/// 24 vertices (4 per face, no smoothing across edges), 12 triangles,
/// half-extent `size / 2`.
pub fn create_cube(size: f32) -> Mesh {
    let s = size / 2.0;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front
        (
            [
                Vec3::new(-s, -s, s),
                Vec3::new(s, -s, s),
                Vec3::new(s, s, s),
                Vec3::new(-s, s, s),
            ],
            Vec3::Z,
        ),
        // Back
        (
            [
                Vec3::new(-s, -s, -s),
                Vec3::new(s, -s, -s),
                Vec3::new(s, s, -s),
                Vec3::new(-s, s, -s),
            ],
            Vec3::NEG_Z,
        ),
        // Top
        (
            [
                Vec3::new(-s, s, -s),
                Vec3::new(s, s, -s),
                Vec3::new(s, s, s),
                Vec3::new(-s, s, s),
            ],
            Vec3::Y,
        ),
        // Bottom
        (
            [
                Vec3::new(-s, -s, -s),
                Vec3::new(s, -s, -s),
                Vec3::new(s, -s, s),
                Vec3::new(-s, -s, s),
            ],
            Vec3::NEG_Y,
        ),
        // Right
        (
            [
                Vec3::new(s, -s, -s),
                Vec3::new(s, -s, s),
                Vec3::new(s, s, s),
                Vec3::new(s, s, -s),
            ],
            Vec3::X,
        ),
        // Left
        (
            [
                Vec3::new(-s, -s, -s),
                Vec3::new(-s, -s, s),
                Vec3::new(-s, s, s),
                Vec3::new(-s, s, -s),
            ],
            Vec3::NEG_X,
        ),
    ];

    let mut mesh = Mesh::with_capacity(24, 12);
    for (corners, normal) in faces {
        let base = mesh.vertex_count() as u16;
        for corner in corners {
            mesh.push_vertex(corner, normal);
        }
        mesh.push_triangle(base, base + 1, base + 2);
        mesh.push_triangle(base, base + 2, base + 3);
    }
    mesh
}

/// Latitude/longitude sphere. `(lat_bands + 1) * (long_bands + 1)` vertices,
/// `lat_bands * long_bands * 2` triangles; row `lat == 0` is the duplicated
/// top pole `(0, radius, 0)`.
pub fn create_sphere(radius: f32, lat_bands: u32, long_bands: u32) -> Mesh {
    let mut mesh = Mesh::with_capacity(
        ((lat_bands + 1) * (long_bands + 1)) as usize,
        (lat_bands * long_bands * 2) as usize,
    );

    for lat in 0..=lat_bands {
        let theta = lat as f32 * PI / lat_bands as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=long_bands {
            let phi = lon as f32 * TAU / long_bands as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let dir = Vec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            mesh.push_vertex(dir * radius, dir);
        }
    }

    stitch_grid(&mut mesh, lat_bands, long_bands);
    mesh
}

/// Ellipsoid: the sphere grid scaled per axis.
///
/// Normals stay on the unit sphere rather than being recomputed for the
/// non-uniform scale. The shipped viewer shades with these, so the
/// approximation is part of the contract.
pub fn create_ellipsoid(rx: f32, ry: f32, rz: f32, lat_bands: u32, long_bands: u32) -> Mesh {
    let mut mesh = Mesh::with_capacity(
        ((lat_bands + 1) * (long_bands + 1)) as usize,
        (lat_bands * long_bands * 2) as usize,
    );

    for lat in 0..=lat_bands {
        let theta = lat as f32 * PI / lat_bands as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=long_bands {
            let phi = lon as f32 * TAU / long_bands as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let dir = Vec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            mesh.push_vertex(Vec3::new(rx * dir.x, ry * dir.y, rz * dir.z), dir);
        }
    }

    stitch_grid(&mut mesh, lat_bands, long_bands);
    mesh
}

/// Cone: apex plus a fanned side ring, with a separate bottom cap.
///
/// Side normals are the fixed-pitch approximation `(cos, 0.5, sin)` and the
/// apex normal points straight up; neither follows the true slant.
pub fn create_cone(radius: f32, height: f32, segments: u32) -> Mesh {
    let mut mesh = Mesh::new();

    mesh.push_vertex(Vec3::new(0.0, height, 0.0), Vec3::Y);

    for i in 0..=segments {
        let angle = TAU * i as f32 / segments as f32;
        let (sin, cos) = angle.sin_cos();
        mesh.push_vertex(
            Vec3::new(radius * cos, 0.0, radius * sin),
            Vec3::new(cos, 0.5, sin),
        );
    }

    for i in 1..=segments {
        let next = if i + 1 > segments { 1 } else { i + 1 };
        mesh.push_triangle(0, i as u16, next as u16);
    }

    // Bottom cap has its own ring; it shares nothing with the side vertices.
    let cap_center = mesh.push_vertex(Vec3::ZERO, Vec3::NEG_Y);
    for i in 0..=segments {
        let angle = TAU * i as f32 / segments as f32;
        let (sin, cos) = angle.sin_cos();
        mesh.push_vertex(Vec3::new(radius * cos, 0.0, radius * sin), Vec3::NEG_Y);
    }
    for i in 0..segments {
        mesh.push_triangle(
            cap_center,
            cap_center + i as u16 + 1,
            cap_center + ((i + 1) % segments) as u16 + 1,
        );
    }

    mesh
}

/// Cylinder: side grid centered on the y axis plus two fan caps.
///
/// Side normals are purely radial (the correct answer for a true cylinder);
/// cap rings are duplicated with flat `(0, +/-1, 0)` normals, bottom winding
/// reversed so both caps face outward.
pub fn create_cylinder(
    radius: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> Mesh {
    let mut mesh = Mesh::new();

    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;
        let py = v * height - height / 2.0;

        for i in 0..=radial_segments {
            let theta = TAU * i as f32 / radial_segments as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.push_vertex(
                Vec3::new(cos_theta * radius, py, sin_theta * radius),
                Vec3::new(cos_theta, 0.0, sin_theta),
            );
        }
    }

    stitch_grid(&mut mesh, height_segments, radial_segments);

    // Top cap
    let top_center = mesh.push_vertex(Vec3::new(0.0, height / 2.0, 0.0), Vec3::Y);
    for i in 0..=radial_segments {
        let theta = TAU * i as f32 / radial_segments as f32;
        let (sin, cos) = theta.sin_cos();
        mesh.push_vertex(Vec3::new(cos * radius, height / 2.0, sin * radius), Vec3::Y);
    }
    for i in 0..radial_segments {
        mesh.push_triangle(top_center, top_center + i as u16 + 1, top_center + i as u16 + 2);
    }

    // Bottom cap
    let bottom_center = mesh.push_vertex(Vec3::new(0.0, -height / 2.0, 0.0), Vec3::NEG_Y);
    for i in 0..=radial_segments {
        let theta = TAU * i as f32 / radial_segments as f32;
        let (sin, cos) = theta.sin_cos();
        mesh.push_vertex(
            Vec3::new(cos * radius, -height / 2.0, sin * radius),
            Vec3::NEG_Y,
        );
    }
    for i in 0..radial_segments {
        mesh.push_triangle(
            bottom_center,
            bottom_center + i as u16 + 2,
            bottom_center + i as u16 + 1,
        );
    }

    mesh
}

/// Toroid: major angle sweeps the ring, minor angle the tube cross-section.
///
/// The only family whose normals are the true analytic surface normals, so
/// they are unit length at every grid point.
pub fn create_toroid(
    major_radius: f32,
    minor_radius: f32,
    major_segments: u32,
    minor_segments: u32,
) -> Mesh {
    let mut mesh = Mesh::with_capacity(
        ((major_segments + 1) * (minor_segments + 1)) as usize,
        (major_segments * minor_segments * 2) as usize,
    );

    for i in 0..=major_segments {
        let theta = TAU * i as f32 / major_segments as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..=minor_segments {
            let phi = TAU * j as f32 / minor_segments as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let ring = major_radius + minor_radius * cos_phi;
            mesh.push_vertex(
                Vec3::new(ring * cos_theta, minor_radius * sin_phi, ring * sin_theta),
                Vec3::new(cos_phi * cos_theta, sin_phi, cos_phi * sin_theta),
            );
        }
    }

    stitch_grid(&mut mesh, major_segments, minor_segments);
    mesh
}

/// One-sheet hyperboloid of revolution, `segments` stacks tall.
///
/// Cross-section scale is `sqrt(1 + y^2 / c^2)`; normals are radial in the XZ
/// plane only (the vertical slope is ignored, matching the shipped viewer).
pub fn create_hyperboloid(a: f32, b: f32, c: f32, height: f32, segments: u32) -> Mesh {
    let stacks = segments;
    let mut mesh = Mesh::with_capacity(
        ((stacks + 1) * (segments + 1)) as usize,
        (stacks * segments * 2) as usize,
    );

    for i in 0..=stacks {
        let y = height * (i as f32 / stacks as f32 - 0.5);
        let xz_scale = (1.0 + y * y / (c * c)).sqrt();

        for j in 0..=segments {
            let theta = TAU * j as f32 / segments as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let x = a * xz_scale * cos_theta;
            let z = b * xz_scale * sin_theta;
            mesh.push_vertex(Vec3::new(x, y, z), Vec3::new(x, 0.0, z));
        }
    }

    stitch_grid(&mut mesh, stacks, segments);
    mesh
}
