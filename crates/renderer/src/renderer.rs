//! Main renderer managing wgpu state and rendering.

use crate::{
    camera::{Camera, CameraUniform},
    lighting::LightingUniform,
    mesh::Mesh,
    pipeline::{create_scene_bind_group_layout, create_scene_pipeline},
    texture::Texture,
    vertex::InstanceData,
};
use anyhow::Result;
use bytemuck::Zeroable;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

/// Upper bound on instances drawn per frame across all batches.
const MAX_INSTANCES: u32 = 1024;

/// One mesh drawn once per instance.
pub struct DrawBatch<'a> {
    pub mesh: &'a Mesh,
    pub instances: &'a [InstanceData],
}

/// Main renderer state.
pub struct Renderer {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
    pub window: Arc<Window>,

    scene_pipeline: wgpu::RenderPipeline,
    scene_bind_group: wgpu::BindGroup,
    camera_buffer: wgpu::Buffer,
    camera_uniform: CameraUniform,
    lighting_buffer: wgpu::Buffer,

    depth_texture: Texture,

    // Instance buffer for batched rendering
    instance_buffer: wgpu::Buffer,
    max_instances: u32,
}

impl Renderer {
    /// Create a new renderer for the given window.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        log::info!("Using GPU: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no supported formats"))?;

        let present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let camera_uniform = CameraUniform::new();
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let lighting_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lighting Buffer"),
            contents: bytemuck::cast_slice(&[LightingUniform::zeroed()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let scene_bind_group_layout = create_scene_bind_group_layout(&device);
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &scene_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lighting_buffer.as_entire_binding(),
                },
            ],
        });

        let scene_pipeline = create_scene_pipeline(&device, &config, &scene_bind_group_layout);

        let depth_texture =
            Texture::create_depth_texture(&device, config.width, config.height, "Depth Texture");

        let max_instances = MAX_INSTANCES;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (std::mem::size_of::<InstanceData>() as u64) * max_instances as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            window,
            scene_pipeline,
            scene_bind_group,
            camera_buffer,
            camera_uniform,
            lighting_buffer,
            depth_texture,
            instance_buffer,
            max_instances,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture = Texture::create_depth_texture(
                &self.device,
                self.config.width,
                self.config.height,
                "Depth Texture",
            );
        }
    }

    /// Reconfigure the surface at its current size, after it was lost or outdated.
    pub fn reconfigure(&mut self) {
        self.resize(self.size);
    }

    pub fn update_camera(&mut self, camera: &Camera) {
        self.camera_uniform.update(camera);
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
    }

    pub fn update_lighting(&mut self, lighting: &LightingUniform) {
        self.queue
            .write_buffer(&self.lighting_buffer, 0, bytemuck::cast_slice(&[*lighting]));
    }

    /// Begin a new frame, returns the surface texture and a command encoder.
    pub fn begin_frame(
        &mut self,
    ) -> Result<(wgpu::SurfaceTexture, wgpu::CommandEncoder), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });
        Ok((output, encoder))
    }

    /// Clear to `clear_color` and draw every batch in one depth-tested pass.
    ///
    /// Each batch gets its own region of the instance buffer, so the
    /// `queue.write_buffer` calls made here don't overwrite each other.
    /// Instances past the per-frame capacity are dropped with a warning.
    pub fn render_scene(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: [f32; 3],
        batches: &[DrawBatch<'_>],
    ) {
        let mut offset = 0u32;
        let mut ranges = Vec::with_capacity(batches.len());
        for batch in batches {
            let remaining = self.max_instances.saturating_sub(offset) as usize;
            let count = batch.instances.len().min(remaining);
            if count < batch.instances.len() {
                log::warn!(
                    "Instance buffer full: dropping {} instances",
                    batch.instances.len() - count
                );
            }
            if count == 0 {
                ranges.push(None);
                continue;
            }
            let byte_offset = (offset as usize * std::mem::size_of::<InstanceData>()) as u64;
            self.queue.write_buffer(
                &self.instance_buffer,
                byte_offset,
                bytemuck::cast_slice(&batch.instances[..count]),
            );
            ranges.push(Some(offset..offset + count as u32));
            offset += count as u32;
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear_color[0] as f64,
                        g: clear_color[1] as f64,
                        b: clear_color[2] as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_texture.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.scene_pipeline);
        render_pass.set_bind_group(0, &self.scene_bind_group, &[]);
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        for (batch, range) in batches.iter().zip(ranges) {
            let Some(range) = range else { continue };
            if batch.mesh.num_vertices == 0 {
                continue;
            }
            render_pass.set_vertex_buffer(0, batch.mesh.vertex_buffer.slice(..));
            render_pass.draw(0..batch.mesh.num_vertices, range);
        }
    }

    /// End frame and present.
    pub fn end_frame(&self, output: wgpu::SurfaceTexture, encoder: wgpu::CommandEncoder) {
        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }

    /// Get window dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Access the device for mesh creation.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }
}
