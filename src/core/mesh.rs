//! Procedural triangle meshes for the scene primitives.

use super::scene::Primitive;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

// Tessellation
pub const SPHERE_SEGMENTS: u32 = 32;
pub const SPHERE_RINGS: u32 = 16;
pub const CYLINDER_SEGMENTS: u32 = 32;
pub const TORUS_RADIAL: u32 = 8;
pub const TORUS_TUBULAR: u32 = 32;

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
        self.vertices.len() as u32 - 1
    }

    /// Index a `(rows + 1) × (cols + 1)` vertex grid starting at `base`.
    fn grid(&mut self, base: u32, rows: u32, cols: u32) {
        for i in 0..rows {
            for j in 0..cols {
                let a = base + i * (cols + 1) + j;
                let b = a + cols + 1;
                self.indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
            }
        }
    }

    pub fn for_primitive(primitive: &Primitive) -> Self {
        match *primitive {
            Primitive::Cuboid { size } => cuboid(size),
            Primitive::Sphere { radius } => sphere(radius, SPHERE_SEGMENTS, SPHERE_RINGS),
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => cylinder(radius_top, radius_bottom, height, CYLINDER_SEGMENTS),
            Primitive::Torus { radius, tube } => torus(radius, tube, TORUS_RADIAL, TORUS_TUBULAR),
        }
    }
}

pub fn cuboid(size: Vec3) -> MeshData {
    let half = size * 0.5;
    // (normal, u, v) with u × v = normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            mesh.push((n + u * su + v * sv) * half, n);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

pub fn sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for i in 0..=rings {
        let theta = i as f32 / rings as f32 * PI;
        for j in 0..=segments {
            let phi = j as f32 / segments as f32 * TAU;
            let n = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
            mesh.push(n * radius, n);
        }
    }
    mesh.grid(0, rings, segments);
    mesh
}

/// Capped cylinder (or frustum) along +Y, centered on the origin.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;
    let slope = (radius_bottom - radius_top) / height.max(f32::EPSILON);
    for (y, r) in [(half, radius_top), (-half, radius_bottom)] {
        for j in 0..=segments {
            let phi = j as f32 / segments as f32 * TAU;
            let (s, c) = phi.sin_cos();
            mesh.push(
                Vec3::new(r * c, y, r * s),
                Vec3::new(c, slope, s).normalize(),
            );
        }
    }
    mesh.grid(0, 1, segments);

    for (y, r, n) in [(half, radius_top, Vec3::Y), (-half, radius_bottom, Vec3::NEG_Y)] {
        let center = mesh.push(Vec3::new(0.0, y, 0.0), n);
        for j in 0..=segments {
            let phi = j as f32 / segments as f32 * TAU;
            let (s, c) = phi.sin_cos();
            mesh.push(Vec3::new(r * c, y, r * s), n);
        }
        for j in 0..segments {
            mesh.indices
                .extend_from_slice(&[center, center + 1 + j, center + 2 + j]);
        }
    }
    mesh
}

/// Torus lying in the XZ plane.
pub fn torus(radius: f32, tube: f32, radial: u32, tubular: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for i in 0..=radial {
        let v = i as f32 / radial as f32 * TAU;
        for j in 0..=tubular {
            let u = j as f32 / tubular as f32 * TAU;
            let n = Vec3::new(v.cos() * u.cos(), v.sin(), v.cos() * u.sin());
            let center = Vec3::new(radius * u.cos(), 0.0, radius * u.sin());
            mesh.push(center + n * tube, n);
        }
    }
    mesh.grid(0, radial, tubular);
    mesh
}
