//! WebGPU scene renderer: textured spheres for the sun and planets,
//! Saturn's translucent ring, and an instanced starfield.

use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

use orrery_core::constants::{
    AMBIENT_LIGHT, CLEAR_DARK, CLEAR_LIGHT, RING_COLOR, RING_INNER_RADIUS, RING_OPACITY,
    RING_OUTER_RADIUS, RING_SEGMENTS, SPHERE_SLICES, SPHERE_STACKS, STAR_COUNT,
    STAR_OPACITY_DARK, STAR_OPACITY_LIGHT, STAR_SEED, STAR_SIZE_PX, TEXTURE_SEED,
};
use orrery_core::{mesh, starfield, texture, Planet, SolarSim, PLANETS, SUN};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    tint: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct StarUniforms {
    view_proj: [[f32; 4]; 4],
    resolution: [f32; 2],
    size_px: f32,
    opacity: f32,
}

struct GpuMesh {
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
}

/// One drawable body: its uniform buffer plus the bind group carrying its
/// surface texture.
struct BodySlot {
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    scene_pipeline: wgpu::RenderPipeline,
    ring_pipeline: wgpu::RenderPipeline,
    stars_pipeline: wgpu::RenderPipeline,

    sphere: GpuMesh,
    ring: GpuMesh,
    sun_slot: BodySlot,
    planet_slots: Vec<BodySlot>,
    ring_slot: BodySlot,

    star_quad_vb: wgpu::Buffer,
    star_instance_vb: wgpu::Buffer,
    star_count: u32,
    star_uniform_buf: wgpu::Buffer,
    star_bind_group: wgpu::BindGroup,

    width: u32,
    height: u32,
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let depth = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    depth.create_view(&wgpu::TextureViewDescriptor::default())
}

fn upload_mesh(device: &wgpu::Device, data: &mesh::MeshData, label: &str) -> GpuMesh {
    let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&data.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&data.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    GpuMesh {
        vertex_buf,
        index_buf,
        index_count: data.index_count(),
    }
}

fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    pixels: &texture::TexturePixels,
    label: &str,
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width: pixels.width,
        height: pixels.height,
        depth_or_array_layers: 1,
    };
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &pixels.data,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * pixels.width),
            rows_per_image: Some(pixels.height),
        },
        size,
    );
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

fn make_body_slot(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    label: &str,
) -> BodySlot {
    let uniform_buf = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(texture_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    BodySlot {
        uniform_buf,
        bind_group,
    }
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = create_depth_view(&device, width, height);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(orrery_core::SCENE_WGSL.into()),
        });
        let stars_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stars_shader"),
            source: wgpu::ShaderSource::Wgsl(orrery_core::STARS_WGSL.into()),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("surface_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let stars_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("stars_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let stars_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("stars_pl"),
            bind_group_layouts: &[&stars_bgl],
            push_constant_ranges: &[],
        });

        let scene_vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<mesh::Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        };

        let depth_write = |write: bool| {
            Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: write,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            })
        };

        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&scene_layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_main"),
                buffers: std::slice::from_ref(&scene_vertex_layout),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: depth_write(true),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // Same shader, but translucent, double-sided, and no depth writes.
        let ring_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ring_pipeline"),
            layout: Some(&scene_layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_main"),
                buffers: std::slice::from_ref(&scene_vertex_layout),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: depth_write(false),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let star_vertex_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-star data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<starfield::Star>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                ],
            },
        ];
        let stars_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("stars_pipeline"),
            layout: Some(&stars_layout),
            vertex: wgpu::VertexState {
                module: &stars_shader,
                entry_point: Some("vs_main"),
                buffers: &star_vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: depth_write(false),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &stars_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let sphere = upload_mesh(&device, &mesh::uv_sphere(SPHERE_STACKS, SPHERE_SLICES), "sphere");
        let ring = upload_mesh(
            &device,
            &mesh::ring(RING_INNER_RADIUS, RING_OUTER_RADIUS, RING_SEGMENTS),
            "ring",
        );

        let sun_view = upload_texture(&device, &queue, &texture::sun_pixels(), "sun_tex");
        let sun_slot = make_body_slot(&device, &scene_bgl, &sun_view, &sampler, "sun");
        let mut planet_slots = Vec::with_capacity(PLANETS.len());
        for planet in Planet::ALL {
            let cfg = planet.config();
            let pixels = texture::planet_pixels(cfg, texture::body_seed(TEXTURE_SEED, planet.index()));
            let view = upload_texture(&device, &queue, &pixels, planet.key());
            planet_slots.push(make_body_slot(&device, &scene_bgl, &view, &sampler, planet.key()));
        }
        let white_view = upload_texture(&device, &queue, &texture::white_pixel(), "white_tex");
        let ring_slot = make_body_slot(&device, &scene_bgl, &white_view, &sampler, "ring");

        // Quad vertices for two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let star_quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("star_quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let stars = starfield::generate(STAR_COUNT, STAR_SEED);
        let star_instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("star_instance_vb"),
            contents: bytemuck::cast_slice(&stars),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let star_uniform_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("star_uniforms"),
            size: std::mem::size_of::<StarUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let star_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("star_bg"),
            layout: &stars_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: star_uniform_buf.as_entire_binding(),
            }],
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            scene_pipeline,
            ring_pipeline,
            stars_pipeline,
            sphere,
            ring,
            sun_slot,
            planet_slots,
            ring_slot,
            star_quad_vb,
            star_instance_vb,
            star_count: stars.len() as u32,
            star_uniform_buf,
            star_bind_group,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    fn write_body(&self, slot: &BodySlot, view_proj: &Mat4, model: Mat4, tint: [f32; 4], lit: f32) {
        self.queue.write_buffer(
            &slot.uniform_buf,
            0,
            bytemuck::bytes_of(&SceneUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                model: model.to_cols_array_2d(),
                tint,
                params: [lit, AMBIENT_LIGHT, 0.0, 0.0],
            }),
        );
    }

    pub fn render(&mut self, sim: &SolarSim) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let view_proj = sim.camera.view_proj(aspect);

        let sun_model =
            Mat4::from_rotation_y(sim.sun_spin) * Mat4::from_scale(Vec3::splat(SUN.radius));
        self.write_body(&self.sun_slot, &view_proj, sun_model, [1.0; 4], 0.0);

        for planet in Planet::ALL {
            let i = planet.index();
            let cfg = planet.config();
            let model = Mat4::from_rotation_y(sim.orbit_angles[i])
                * Mat4::from_translation(Vec3::new(cfg.distance, 0.0, 0.0))
                * Mat4::from_rotation_y(sim.spin_angles[i])
                * Mat4::from_scale(Vec3::splat(cfg.radius));
            self.write_body(&self.planet_slots[i], &view_proj, model, [1.0; 4], 1.0);

            if planet.has_ring() {
                // ring follows the orbit pivot but not the planet's spin
                let ring_model = Mat4::from_rotation_y(sim.orbit_angles[i])
                    * Mat4::from_translation(Vec3::new(cfg.distance, 0.0, 0.0));
                let [r, g, b] = orrery_core::bodies::color_rgb(RING_COLOR);
                self.write_body(
                    &self.ring_slot,
                    &view_proj,
                    ring_model,
                    [r, g, b, RING_OPACITY],
                    0.0,
                );
            }
        }

        let (clear, star_opacity) = if sim.light_theme {
            (CLEAR_LIGHT, STAR_OPACITY_LIGHT)
        } else {
            (CLEAR_DARK, STAR_OPACITY_DARK)
        };
        self.queue.write_buffer(
            &self.star_uniform_buf,
            0,
            bytemuck::bytes_of(&StarUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                resolution: [self.width as f32, self.height as f32],
                size_px: STAR_SIZE_PX,
                opacity: star_opacity,
            }),
        );

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear[0],
                            g: clear[1],
                            b: clear[2],
                            a: 1.0,
                        }),
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

            rpass.set_pipeline(&self.scene_pipeline);
            rpass.set_vertex_buffer(0, self.sphere.vertex_buf.slice(..));
            rpass.set_index_buffer(self.sphere.index_buf.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_bind_group(0, &self.sun_slot.bind_group, &[]);
            rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
            for slot in &self.planet_slots {
                rpass.set_bind_group(0, &slot.bind_group, &[]);
                rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.stars_pipeline);
            rpass.set_bind_group(0, &self.star_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.star_quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.star_instance_vb.slice(..));
            rpass.draw(0..6, 0..self.star_count);

            rpass.set_pipeline(&self.ring_pipeline);
            rpass.set_bind_group(0, &self.ring_slot.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.ring.vertex_buf.slice(..));
            rpass.set_index_buffer(self.ring.index_buf.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.ring.index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
