use crate::core::{Camera, Fog, Light, LightKind, Material, SceneGraph};
use glam::{Mat4, Vec3};

pub(crate) const MAX_LIGHTS: usize = 8;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    // metalness, roughness, opacity, unused
    params: [f32; 4],
}

impl InstanceRaw {
    pub(crate) fn new(world: Mat4, material: &Material) -> Self {
        Self {
            model: world.to_cols_array_2d(),
            color: material.color.extend(1.0).to_array(),
            emissive: material.emission().extend(1.0).to_array(),
            params: [material.metalness, material.roughness, 1.0, 0.0],
        }
    }

    pub(crate) fn particle(position: Vec3, radius: f32, color: Vec3, opacity: f32) -> Self {
        let world = Mat4::from_scale_rotation_translation(
            Vec3::splat(radius),
            glam::Quat::IDENTITY,
            position,
        );
        Self {
            model: world.to_cols_array_2d(),
            color: color.extend(1.0).to_array(),
            emissive: color.extend(1.0).to_array(),
            params: [0.0, 1.0, opacity, 0.0],
        }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
            2 => Float32x4,
            3 => Float32x4,
            4 => Float32x4,
            5 => Float32x4,
            6 => Float32x4,
            7 => Float32x4,
            8 => Float32x4
        ];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightPacked {
    position: [f32; 4],
    color: [f32; 4],
    spot: [f32; 4],
    params: [f32; 4],
}

impl LightPacked {
    fn new(light: &Light) -> Self {
        let (kind, spot, cos_inner) = match light.kind {
            LightKind::Ambient => (0.0, [0.0, 0.0, 0.0, -1.0], 1.0),
            LightKind::Point => (1.0, [0.0, 0.0, 0.0, -1.0], 1.0),
            LightKind::Spot { angle, penumbra } => {
                let dir = (light.target - light.position).normalize_or_zero();
                let cos_outer = angle.cos();
                let cos_inner = (angle * (1.0 - penumbra.clamp(0.0, 1.0)))
                    .cos()
                    .max(cos_outer + 1e-3)
                    .min(1.0);
                (2.0, dir.extend(cos_outer).to_array(), cos_inner)
            }
        };
        Self {
            position: light.position.extend(kind).to_array(),
            color: light.color.extend(light.intensity).to_array(),
            spot,
            params: [cos_inner, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    fog_color: [f32; 4],
    fog: [f32; 4],
    lights: [LightPacked; MAX_LIGHTS],
}

impl SceneUniforms {
    pub(crate) fn new(scene: &SceneGraph, camera: &Camera) -> Self {
        let mut lights = [LightPacked::default(); MAX_LIGHTS];
        let count = scene.lights().len().min(MAX_LIGHTS);
        if scene.lights().len() > MAX_LIGHTS {
            log::warn!(
                "[gpu] {} lights declared, only {} are shaded",
                scene.lights().len(),
                MAX_LIGHTS
            );
        }
        for (slot, light) in lights.iter_mut().zip(scene.lights()) {
            *slot = LightPacked::new(light);
        }
        let (fog_color, fog) = match scene.fog {
            Some(Fog { color, near, far }) => (color.extend(1.0).to_array(), [near, far, 0.0, 0.0]),
            None => ([0.0; 4], [0.0; 4]),
        };
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(count as f32).to_array(),
            fog_color,
            fog,
            lights,
        }
    }
}
