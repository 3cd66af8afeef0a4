//! Rendering for the animated background
//!
//! Three instanced sprite batches (galaxy, backdrop, jets) plus a handful
//! of single meshes (event horizon sphere, accretion rings, photon ring,
//! shockwave). CPU-side simulation buffers are pushed to the GPU once per
//! frame; all visual state lives in per-object uniforms.

use common::{create_sprite_texture, Camera3D, GraphicsContext, PointerTilt};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use wgpu::util::DeviceExt;

use crate::simulation::Simulation;
use crate::sprites;

/// Camera uniform with separate view/projection for view-space billboards
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera3D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        }
    }
}

/// Per-object uniform: model transform, tint color with opacity in alpha,
/// and a point-size multiplier for sprite batches.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

impl ObjectUniform {
    fn new(model: Mat4, color: Vec3, opacity: f32, point_scale: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color.x, color.y, color.z, opacity],
            params: [point_scale, 0.0, 0.0, 0.0],
        }
    }
}

/// Instance data for one sprite
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

impl SpriteInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        2 => Float32x3,
        3 => Float32,
        4 => Float32x4,
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad corner for billboards
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct QuadVertex {
    position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Mesh vertex for rings and the horizon sphere
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

impl MeshVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x2,
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0] },
];

// Accretion disk layers: (inner radius, outer radius, color)
const DISK_LAYERS: [(f32, f32, [f32; 3]); 3] = [
    (4.1, 6.1, [1.0, 0.667, 0.0]),
    (5.5, 9.5, [1.0, 0.333, 0.0]),
    (8.0, 14.0, [0.667, 0.0, 0.0]),
];

const JET_COLOR: Vec3 = Vec3::new(0.8, 0.9, 1.0);

/// One sprite batch: its instance buffer and object uniform
struct SpriteBatch {
    instances: wgpu::Buffer,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,
    capacity: usize,
    count: u32,
}

/// One mesh object: geometry plus its object uniform
struct MeshObject {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    texture_bind_group: Option<wgpu::BindGroup>,
}

pub struct Renderer {
    sprite_pipeline: wgpu::RenderPipeline,
    ring_pipeline: wgpu::RenderPipeline,
    solid_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,

    backdrop: SpriteBatch,
    galaxy: SpriteBatch,
    jets: SpriteBatch,
    hole: MeshObject,
    disks: Vec<MeshObject>,
    photon: MeshObject,
    shock: MeshObject,
}

impl Renderer {
    pub fn new(ctx: &GraphicsContext, sim: &Simulation) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into()),
        });

        // Camera uniform
        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_layout_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[uniform_layout_entry(0)],
        });

        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Bind Group Layout"),
            entries: &[uniform_layout_entry(0)],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        // Procedural sprite textures
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Sprite Sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let star_view = create_sprite_texture(
            device,
            &ctx.queue,
            "Star Sprite",
            sprites::SPRITE_SIZE,
            &sprites::star_sprite(sprites::SPRITE_SIZE),
        );
        let gas_view = create_sprite_texture(
            device,
            &ctx.queue,
            "Gas Sprite",
            sprites::SPRITE_SIZE,
            &sprites::gas_sprite(sprites::SPRITE_SIZE),
        );
        let ring_view = create_sprite_texture(
            device,
            &ctx.queue,
            "Ring Sprite",
            sprites::SPRITE_SIZE,
            &sprites::ring_sprite(sprites::SPRITE_SIZE),
        );

        let texture_bind = |view: &wgpu::TextureView, label: &str| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &texture_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            })
        };

        // Pipelines
        let textured_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Textured Pipeline Layout"),
                bind_group_layouts: &[&camera_layout, &object_layout, &texture_layout],
                push_constant_ranges: &[],
            });

        let solid_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Solid Pipeline Layout"),
                bind_group_layouts: &[&camera_layout, &object_layout],
                push_constant_ranges: &[],
            });

        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let make_pipeline = |label: &str,
                             layout: &wgpu::PipelineLayout,
                             vs: &str,
                             fs: &str,
                             buffers: &[wgpu::VertexBufferLayout],
                             blend: Option<wgpu::BlendState>| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: vs,
                    buffers,
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: fs,
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.config.format,
                        blend,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            })
        };

        let sprite_pipeline = make_pipeline(
            "Sprite Pipeline",
            &textured_pipeline_layout,
            "vs_sprite",
            "fs_sprite",
            &[QuadVertex::layout(), SpriteInstance::layout()],
            Some(additive),
        );
        let ring_pipeline = make_pipeline(
            "Ring Pipeline",
            &textured_pipeline_layout,
            "vs_mesh",
            "fs_ring",
            &[MeshVertex::layout()],
            Some(additive),
        );
        let solid_pipeline = make_pipeline(
            "Solid Pipeline",
            &solid_pipeline_layout,
            "vs_mesh",
            "fs_solid",
            &[MeshVertex::layout()],
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let make_batch = |label: &str, capacity: usize, texture: &wgpu::TextureView| {
            let instances = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: (std::mem::size_of::<SpriteInstance>() * capacity) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let uniform = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<ObjectUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &object_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform.as_entire_binding(),
                }],
            });
            SpriteBatch {
                instances,
                uniform,
                bind_group,
                texture_bind_group: texture_bind(texture, label),
                capacity,
                count: 0,
            }
        };

        let backdrop = make_batch("Backdrop Batch", sim.config.backdrop_count, &star_view);
        let galaxy = make_batch("Galaxy Batch", sim.config.star_count, &star_view);
        let jets = make_batch("Jet Batch", sim.config.jet_count, &gas_view);

        let make_mesh = |label: &str,
                         verts: &[MeshVertex],
                         idx: &[u16],
                         texture: Option<&wgpu::TextureView>| {
            let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(verts),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(idx),
                usage: wgpu::BufferUsages::INDEX,
            });
            let uniform = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<ObjectUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &object_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform.as_entire_binding(),
                }],
            });
            MeshObject {
                vertices,
                indices,
                index_count: idx.len() as u32,
                uniform,
                bind_group,
                texture_bind_group: texture.map(|t| texture_bind(t, label)),
            }
        };

        let (sphere_verts, sphere_idx) = sphere_mesh(1.0, 32, 32);
        let hole = make_mesh("Event Horizon", &sphere_verts, &sphere_idx, None);

        let disks = DISK_LAYERS
            .iter()
            .map(|(inner, outer, _)| {
                let (v, i) = ring_mesh(*inner, *outer, 128);
                make_mesh("Accretion Disk", &v, &i, Some(&gas_view))
            })
            .collect();

        let (photon_verts, photon_idx) = ring_mesh(4.05, 4.15, 128);
        let photon = make_mesh("Photon Ring", &photon_verts, &photon_idx, Some(&ring_view));

        let (shock_verts, shock_idx) = ring_mesh(0.1, 1.0, 128);
        let shock = make_mesh("Shockwave", &shock_verts, &shock_idx, Some(&ring_view));

        Self {
            sprite_pipeline,
            ring_pipeline,
            solid_pipeline,
            quad_buffer,
            camera_buffer,
            camera_bind_group,
            backdrop,
            galaxy,
            jets,
            hole,
            disks,
            photon,
            shock,
        }
    }

    /// Push this frame's simulation state to the GPU
    pub fn update(
        &mut self,
        queue: &wgpu::Queue,
        sim: &Simulation,
        camera: &Camera3D,
        tilt: &PointerTilt,
    ) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::from_camera(camera)]),
        );

        let scene = tilt.scene_rotation();
        let v = &sim.visuals;

        // Sprite batches
        let galaxy_model = scene * Mat4::from_rotation_y(v.galaxy_angle);
        let galaxy_instances: Vec<SpriteInstance> = (0..sim.galaxy.len())
            .map(|i| SpriteInstance {
                position: sim.galaxy.positions[i].to_array(),
                size: sim.galaxy.sizes[i],
                color: color_rgba(sim.galaxy.colors[i]),
            })
            .collect();
        self.galaxy.write(
            queue,
            &galaxy_instances,
            ObjectUniform::new(galaxy_model, Vec3::ONE, 0.9, 0.5),
        );

        let backdrop_instances: Vec<SpriteInstance> = (0..sim.backdrop.positions.len())
            .map(|i| SpriteInstance {
                position: sim.backdrop.positions[i].to_array(),
                size: 1.0,
                color: color_rgba(sim.backdrop.colors[i]),
            })
            .collect();
        self.backdrop.write(
            queue,
            &backdrop_instances,
            ObjectUniform::new(scene, Vec3::ONE, 0.6, 2.0),
        );

        let jet_instances: Vec<SpriteInstance> = sim
            .jets
            .positions
            .iter()
            .map(|p| SpriteInstance {
                position: p.to_array(),
                size: 1.0,
                color: color_rgba(JET_COLOR),
            })
            .collect();
        self.jets.write(
            queue,
            &jet_instances,
            ObjectUniform::new(scene, Vec3::ONE, v.jet_opacity, 1.5),
        );

        // Meshes
        let hole_scale = v.hole_scale * sim.config.hole_radius;
        queue.write_buffer(
            &self.hole.uniform,
            0,
            bytemuck::cast_slice(&[ObjectUniform::new(
                scene * Mat4::from_scale(Vec3::splat(hole_scale.max(1e-4))),
                Vec3::ZERO,
                1.0,
                0.0,
            )]),
        );

        let flat = Mat4::from_rotation_x(FRAC_PI_2);
        for (k, disk) in self.disks.iter().enumerate() {
            let model = scene * flat * Mat4::from_rotation_z(v.disk_angle[k]);
            queue.write_buffer(
                &disk.uniform,
                0,
                bytemuck::cast_slice(&[ObjectUniform::new(
                    model,
                    Vec3::from_array(DISK_LAYERS[k].2),
                    v.disk_opacity[k],
                    0.0,
                )]),
            );
        }

        // Photon ring faces the camera
        let facing = Quat::from_rotation_arc(Vec3::Z, camera.position.normalize_or_zero());
        queue.write_buffer(
            &self.photon.uniform,
            0,
            bytemuck::cast_slice(&[ObjectUniform::new(
                scene * Mat4::from_quat(facing),
                Vec3::ONE,
                v.photon_opacity,
                0.0,
            )]),
        );

        let shock_model =
            scene * flat * Mat4::from_scale(Vec3::new(v.shock_scale, v.shock_scale, 1.0));
        queue.write_buffer(
            &self.shock.uniform,
            0,
            bytemuck::cast_slice(&[ObjectUniform::new(
                shock_model,
                Vec3::ONE,
                v.shock_opacity,
                0.0,
            )]),
        );
    }

    /// Draw the whole background in painter's order
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Background Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.002,
                        g: 0.002,
                        b: 0.01,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, &self.camera_bind_group, &[]);

        // Distant stars, then the galaxy
        pass.set_pipeline(&self.sprite_pipeline);
        pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
        for batch in [&self.backdrop, &self.galaxy] {
            batch.draw(&mut pass);
        }

        // Event horizon occludes the core behind it
        pass.set_pipeline(&self.solid_pipeline);
        pass.set_bind_group(1, &self.hole.bind_group, &[]);
        pass.set_vertex_buffer(0, self.hole.vertices.slice(..));
        pass.set_index_buffer(self.hole.indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.hole.index_count, 0, 0..1);

        // Glowing rings
        pass.set_pipeline(&self.ring_pipeline);
        for mesh in self.disks.iter().chain([&self.photon, &self.shock]) {
            if let Some(tex) = &mesh.texture_bind_group {
                pass.set_bind_group(1, &mesh.bind_group, &[]);
                pass.set_bind_group(2, tex, &[]);
                pass.set_vertex_buffer(0, mesh.vertices.slice(..));
                pass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        // Jets over everything
        pass.set_pipeline(&self.sprite_pipeline);
        pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
        self.jets.draw(&mut pass);
    }
}

impl SpriteBatch {
    fn write(&mut self, queue: &wgpu::Queue, instances: &[SpriteInstance], uniform: ObjectUniform) {
        let n = instances.len().min(self.capacity);
        queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&instances[..n]));
        queue.write_buffer(&self.uniform, 0, bytemuck::cast_slice(&[uniform]));
        self.count = n as u32;
    }

    fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        if self.count == 0 {
            return;
        }
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_bind_group(2, &self.texture_bind_group, &[]);
        pass.set_vertex_buffer(1, self.instances.slice(..));
        pass.draw(0..6, 0..self.count);
    }
}

fn color_rgba(c: Vec3) -> [f32; 4] {
    [c.x, c.y, c.z, 1.0]
}

/// Flat annulus in the xy-plane with planar UVs for radial textures
fn ring_mesh(inner: f32, outer: f32, segments: u32) -> (Vec<MeshVertex>, Vec<u16>) {
    let mut verts = Vec::with_capacity((segments as usize + 1) * 2);
    let mut indices = Vec::with_capacity(segments as usize * 6);

    for s in 0..=segments {
        let a = s as f32 / segments as f32 * TAU;
        let (sin, cos) = a.sin_cos();
        for r in [inner, outer] {
            let x = cos * r;
            let y = sin * r;
            verts.push(MeshVertex {
                position: [x, y, 0.0],
                uv: [x / (2.0 * outer) + 0.5, y / (2.0 * outer) + 0.5],
            });
        }
    }

    for s in 0..segments {
        let base = (s * 2) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    (verts, indices)
}

/// UV sphere centered at the origin
fn sphere_mesh(radius: f32, rings: u32, sectors: u32) -> (Vec<MeshVertex>, Vec<u16>) {
    let mut verts = Vec::new();
    let mut indices = Vec::new();

    for r in 0..=rings {
        let phi = r as f32 / rings as f32 * PI;
        for s in 0..=sectors {
            let theta = s as f32 / sectors as f32 * TAU;
            verts.push(MeshVertex {
                position: [
                    radius * phi.sin() * theta.cos(),
                    radius * phi.cos(),
                    radius * phi.sin() * theta.sin(),
                ],
                uv: [s as f32 / sectors as f32, r as f32 / rings as f32],
            });
        }
    }

    let stride = sectors + 1;
    for r in 0..rings {
        for s in 0..sectors {
            let a = (r * stride + s) as u16;
            let b = a + stride as u16;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    (verts, indices)
}
