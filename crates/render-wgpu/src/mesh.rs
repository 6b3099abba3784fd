use bytemuck::{Pod, Zeroable};

/// Vertex of a line-list mesh.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

/// Vertex of a shaded triangle mesh.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Segment count around the sphere's equator.
pub const SPHERE_SEGMENTS: u32 = 32;
/// Ring count from pole to pole.
pub const SPHERE_RINGS: u32 = 16;

/// Generate the 12 edges of a unit cube as a line list: 24 vertices,
/// two per edge, corners at +-0.5.
pub fn edge_cube_mesh() -> Vec<LineVertex> {
    let p = 0.5_f32;
    let corner = |x: f32, y: f32, z: f32| LineVertex { position: [x, y, z] };

    let mut verts = Vec::with_capacity(24);
    // Four edges along each axis
    for &y in &[-p, p] {
        for &z in &[-p, p] {
            verts.push(corner(-p, y, z));
            verts.push(corner(p, y, z));
        }
    }
    for &x in &[-p, p] {
        for &z in &[-p, p] {
            verts.push(corner(x, -p, z));
            verts.push(corner(x, p, z));
        }
    }
    for &x in &[-p, p] {
        for &y in &[-p, p] {
            verts.push(corner(x, y, -p));
            verts.push(corner(x, y, p));
        }
    }
    verts
}

/// Generate a unit-radius UV sphere as an indexed triangle list.
///
/// Vertices run ring by ring from the top pole down, with a duplicated seam
/// column so texture-free shading still gets clean wraparound normals.
/// Normals equal positions since the radius is 1.
pub fn uv_sphere_mesh(segments: u32, rings: u32) -> (Vec<MeshVertex>, Vec<u16>) {
    let mut verts = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    for ring in 0..=rings {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for seg in 0..=segments {
            let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let position = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            verts.push(MeshVertex {
                position,
                normal: position,
            });
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for ring in 0..rings {
        for seg in 0..segments {
            let a = (ring * stride + seg) as u16;
            let b = a + stride as u16;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    (verts, indices)
}
