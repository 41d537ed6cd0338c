use crate::constants::{PARTICLE_COLOR, PARTICLE_OPACITY, PARTICLE_RADIUS};
use crate::core::mesh::{self, MeshData};
use crate::core::{rgb, Camera, Particle, SceneGraph};
use web_sys as web;

mod helpers;
mod instances;

use helpers::GpuMesh;
use instances::{InstanceRaw, SceneUniforms};

// Low-poly sphere is plenty for particles a few pixels wide.
const PARTICLE_SEGMENTS: u32 = 6;
const PARTICLE_RINGS: u32 = 4;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    lit_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    // One mesh per scene geometry, indexed by `GeometryHandle`
    meshes: Vec<GpuMesh>,
    particle_mesh: GpuMesh,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<InstanceRaw>,

    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &SceneGraph) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let lit_pipeline =
            helpers::make_scene_pipeline(&device, &pl, &shader, "fs_main", format, None, true);
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        };
        let particle_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            "fs_particle",
            format,
            Some(additive),
            false,
        );
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let meshes = scene
            .geometries()
            .iter()
            .map(|p| GpuMesh::upload(&device, "scene_mesh", &MeshData::for_primitive(p)))
            .collect::<Vec<_>>();
        let particle_mesh = GpuMesh::upload(
            &device,
            "particle_mesh",
            &mesh::sphere(1.0, PARTICLE_SEGMENTS, PARTICLE_RINGS),
        );
        let instance_capacity = 256;
        let instance_buffer = create_instance_buffer(&device, instance_capacity);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let bg = scene.background;
        log::info!(
            "[gpu] ready {}x{} format={:?} meshes={}",
            width,
            height,
            format,
            meshes.len()
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
            lit_pipeline,
            particle_pipeline,
            uniform_buffer,
            bind_group,
            meshes,
            particle_mesh,
            instance_buffer,
            instance_capacity,
            instances: Vec::with_capacity(instance_capacity),
            _depth_tex: depth_tex,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color {
                r: bg.x as f64,
                g: bg.y as f64,
                b: bg.z as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface and depth target at the current size.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        let (tex, view) = helpers::create_depth_texture(&self.device, self.width, self.height);
        self._depth_tex = tex;
        self.depth_view = view;
    }

    fn ensure_instance_capacity(&mut self, needed: usize) {
        if needed > self.instance_capacity {
            self.instance_capacity = needed.next_power_of_two();
            self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
        }
    }

    pub fn render(
        &mut self,
        scene: &SceneGraph,
        camera: &Camera,
        particles: &[Particle],
    ) -> Result<(), wgpu::SurfaceError> {
        // Group mesh instances by geometry so each mesh is one instanced draw.
        let mut items = scene.draw_list();
        items.sort_by_key(|d| d.geometry.index());
        self.instances.clear();
        let mut batches: Vec<(usize, std::ops::Range<u32>)> = Vec::new();
        for item in &items {
            let i = self.instances.len() as u32;
            self.instances
                .push(InstanceRaw::new(item.world, scene.material(item.material)));
            match batches.last_mut() {
                Some((g, range)) if *g == item.geometry.index() => range.end = i + 1,
                _ => batches.push((item.geometry.index(), i..i + 1)),
            }
        }
        let particle_start = self.instances.len() as u32;
        let particle_color = rgb(PARTICLE_COLOR);
        self.instances.extend(particles.iter().map(|p| {
            InstanceRaw::particle(p.position, PARTICLE_RADIUS, particle_color, PARTICLE_OPACITY)
        }));
        let particle_end = self.instances.len() as u32;

        self.ensure_instance_capacity(self.instances.len());
        self.queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&self.instances),
        );
        let uniforms = SceneUniforms::new(scene, camera);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            rpass.set_pipeline(&self.lit_pipeline);
            for (geometry, range) in batches {
                let Some(mesh) = self.meshes.get(geometry) else {
                    continue;
                };
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, range);
            }

            if particle_end > particle_start {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_vertex_buffer(0, self.particle_mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(
                    self.particle_mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rpass.draw_indexed(
                    0..self.particle_mesh.index_count,
                    0,
                    particle_start..particle_end,
                );
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (capacity * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
