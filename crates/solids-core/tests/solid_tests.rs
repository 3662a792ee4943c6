use glam::Vec3;
use solids_core::mesh::Mesh;
use solids_core::solids::primitives::*;

fn check_structure(name: &str, mesh: &Mesh) {
    assert_eq!(
        mesh.positions.len(),
        mesh.normals.len(),
        "{}: positions/normals length mismatch",
        name
    );
    assert_eq!(
        mesh.positions.len() % 3,
        0,
        "{}: positions not a whole number of vertices",
        name
    );
    assert_eq!(
        mesh.indices.len() % 3,
        0,
        "{}: indices not a whole number of triangles",
        name
    );
    let vertex_count = mesh.vertex_count();
    for &idx in &mesh.indices {
        assert!(
            (idx as usize) < vertex_count,
            "{}: index {} out of range ({} vertices)",
            name,
            idx,
            vertex_count
        );
    }
    for (i, v) in mesh.positions.iter().chain(mesh.normals.iter()).enumerate() {
        assert!(v.is_finite(), "{}: non-finite component at {}", name, i);
    }
}

#[test]
fn test_all_solids_structurally_valid() {
    for &seg in &[3u32, 4, 7, 20, 33] {
        let solids: Vec<(&str, Mesh)> = vec![
            ("cube", create_cube(2.0)),
            ("sphere", create_sphere(1.5, seg, seg + 1)),
            ("ellipsoid", create_ellipsoid(2.0, 1.4, 1.0, seg, seg + 2)),
            ("cone", create_cone(2.0, 5.0, seg)),
            ("cylinder", create_cylinder(2.0, 5.0, seg, seg.max(1))),
            ("toroid", create_toroid(2.7, 1.2, seg, seg + 1)),
            ("hyperboloid", create_hyperboloid(1.0, 1.0, 1.0, 5.0, seg)),
        ];
        for (name, mesh) in &solids {
            check_structure(name, mesh);
            assert!(mesh.vertex_count() > 0, "{}: empty mesh", name);
            assert!(mesh.triangle_count() > 0, "{}: no triangles", name);
        }
    }
}

#[test]
fn test_grid_solid_counts() {
    for &(major, minor) in &[(3u32, 3u32), (4, 7), (20, 20), (10, 50)] {
        let sphere = create_sphere(1.0, major, minor);
        assert_eq!(
            sphere.vertex_count() as u32,
            (major + 1) * (minor + 1),
            "sphere {}x{} vertex count",
            major,
            minor
        );
        assert_eq!(
            sphere.triangle_count() as u32,
            major * minor * 2,
            "sphere {}x{} triangle count",
            major,
            minor
        );

        let ellipsoid = create_ellipsoid(2.0, 1.4, 1.0, major, minor);
        assert_eq!(ellipsoid.vertex_count() as u32, (major + 1) * (minor + 1));
        assert_eq!(ellipsoid.triangle_count() as u32, major * minor * 2);

        let toroid = create_toroid(2.7, 1.2, major, minor);
        assert_eq!(toroid.vertex_count() as u32, (major + 1) * (minor + 1));
        assert_eq!(toroid.triangle_count() as u32, major * minor * 2);
    }

    // Hyperboloid stacks equal its segment count.
    for &seg in &[3u32, 8, 20] {
        let hyperboloid = create_hyperboloid(1.0, 1.0, 1.0, 5.0, seg);
        assert_eq!(hyperboloid.vertex_count() as u32, (seg + 1) * (seg + 1));
        assert_eq!(hyperboloid.triangle_count() as u32, seg * seg * 2);
    }
}

#[test]
fn test_sphere_reference() {
    let sphere = create_sphere(1.0, 4, 4);
    assert_eq!(sphere.vertex_count(), 25);
    assert_eq!(sphere.triangle_count(), 32);

    // The whole lat=0 row is the duplicated top pole, whatever the longitude.
    for lon in 0..=4 {
        let p = sphere.position(lon);
        assert!(
            p.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), 1e-6),
            "pole vertex at lon {} is {:?}",
            lon,
            p
        );
    }
}

#[test]
fn test_cube_reference() {
    let cube = create_cube(2.0);
    assert_eq!(cube.vertex_count(), 24);
    assert_eq!(cube.triangle_count(), 12);

    // Front face: exact half-extent corners in declaration order.
    let expected = [
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(cube.position(i), *want, "front face corner {}", i);
        assert_eq!(cube.normal(i), Vec3::Z, "front face normal {}", i);
    }

    // 6 distinct face normals, each repeated for 4 consecutive vertices.
    let mut face_normals = Vec::new();
    for face in 0..6 {
        let n = cube.normal(face * 4);
        for v in 1..4 {
            assert_eq!(cube.normal(face * 4 + v), n, "face {} normal varies", face);
        }
        assert!(
            !face_normals.contains(&n),
            "face normal {:?} repeated across faces",
            n
        );
        face_normals.push(n);
    }
    assert_eq!(face_normals.len(), 6);
}

#[test]
fn test_cylinder_counts() {
    for &(radial, height_segs) in &[(3u32, 1u32), (20, 10), (7, 4)] {
        let cylinder = create_cylinder(2.0, 5.0, radial, height_segs);
        let side = (height_segs + 1) * (radial + 1);
        let caps = 2 * (radial + 2); // center + duplicated perimeter ring, twice
        assert_eq!(
            cylinder.vertex_count() as u32,
            side + caps,
            "cylinder {}x{} vertex count",
            radial,
            height_segs
        );
        assert_eq!(
            cylinder.triangle_count() as u32,
            2 * height_segs * radial + 2 * radial,
            "cylinder {}x{} triangle count",
            radial,
            height_segs
        );
        check_structure("cylinder", &cylinder);
    }
}

#[test]
fn test_cylinder_side_normals_radial() {
    let cylinder = create_cylinder(2.0, 5.0, 16, 4);
    // Side vertices come first: (h+1)*(r+1) of them, normals have no vertical part.
    for i in 0..(5 * 17) {
        let n = cylinder.normal(i);
        assert_eq!(n.y, 0.0, "side normal {} has vertical component", i);
        assert!((n.length() - 1.0).abs() < 1e-5, "side normal {} not unit", i);
    }
}

#[test]
fn test_cone_counts_and_normals() {
    for &seg in &[3u32, 20, 41] {
        let cone = create_cone(2.0, 5.0, seg);
        // apex + side ring + cap center + cap ring
        assert_eq!(cone.vertex_count() as u32, 2 * seg + 4, "cone {} vertices", seg);
        assert_eq!(cone.triangle_count() as u32, 2 * seg, "cone {} triangles", seg);
        check_structure("cone", &cone);
    }

    let cone = create_cone(2.0, 5.0, 8);
    assert_eq!(cone.position(0), Vec3::new(0.0, 5.0, 0.0), "apex position");
    assert_eq!(cone.normal(0), Vec3::Y, "apex normal");
    // Side normals carry the fixed 0.5 pitch.
    for i in 1..=8 {
        assert_eq!(cone.normal(i).y, 0.5, "side normal {} pitch", i);
    }
    // Cap vertices all face straight down.
    let cap_center = 8 + 2;
    for i in cap_center..cone.vertex_count() {
        assert_eq!(cone.normal(i), Vec3::NEG_Y, "cap normal {}", i);
    }
}

#[test]
fn test_toroid_normals_unit() {
    let toroid = create_toroid(2.7, 1.2, 20, 20);
    for i in 0..toroid.vertex_count() {
        let len = toroid.normal(i).length();
        assert!(
            (len - 1.0).abs() < 1e-5,
            "toroid normal {} has length {}",
            i,
            len
        );
    }
}

#[test]
fn test_ellipsoid_normals_stay_on_unit_sphere() {
    // Distinct radii, yet normals are the unit-sphere directions by design.
    let ellipsoid = create_ellipsoid(2.0, 1.4, 1.0, 12, 12);
    for i in 0..ellipsoid.vertex_count() {
        let n = ellipsoid.normal(i);
        assert!(
            (n.length() - 1.0).abs() < 1e-5,
            "ellipsoid normal {} has length {}",
            i,
            n.length()
        );
        let p = ellipsoid.position(i);
        assert!(
            (p.x - 2.0 * n.x).abs() < 1e-5
                && (p.y - 1.4 * n.y).abs() < 1e-5
                && (p.z - 1.0 * n.z).abs() < 1e-5,
            "ellipsoid vertex {} position does not match scaled normal",
            i
        );
    }
}

#[test]
fn test_hyperboloid_normals_ignore_slope() {
    let hyperboloid = create_hyperboloid(1.0, 1.0, 1.0, 5.0, 12);
    for i in 0..hyperboloid.vertex_count() {
        let p = hyperboloid.position(i);
        let n = hyperboloid.normal(i);
        assert_eq!(n.y, 0.0, "hyperboloid normal {} has vertical component", i);
        assert_eq!(n.x, p.x, "hyperboloid normal {} x", i);
        assert_eq!(n.z, p.z, "hyperboloid normal {} z", i);
    }
}

#[test]
fn test_grid_seam_vertices_duplicated() {
    // Wrap columns duplicate the first column's positions instead of reusing
    // indices; check one mid row on each closed grid surface.
    let sphere = create_sphere(1.5, 8, 8);
    let toroid = create_toroid(2.7, 1.2, 8, 8);
    for (name, mesh) in [("sphere", &sphere), ("toroid", &toroid)] {
        for row in 0..=8usize {
            let first = mesh.position(row * 9);
            let last = mesh.position(row * 9 + 8);
            assert!(
                first.abs_diff_eq(last, 1e-5),
                "{} row {} seam not duplicated: {:?} vs {:?}",
                name,
                row,
                first,
                last
            );
        }
    }
}
