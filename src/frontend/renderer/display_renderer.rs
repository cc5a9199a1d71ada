// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Display renderer for the pixel buffer
//!
//! Uploads the buffer into a [`FrameTexture`] and draws it over the surface
//! with a single fullscreen triangle. The image keeps its aspect ratio; the
//! uncovered bars are cleared to black.

use super::frame_texture::FrameTexture;
use crate::core::raster::PixelBuffer;

/// Viewport uniform buffer
///
/// `scale` is the fraction of the surface the image covers on each axis,
/// as computed by [`letterbox_scale`].
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ViewportUniform {
    scale: [f32; 2],
    _padding: [f32; 2],
}

/// Fraction of the surface covered by a letterboxed frame, per axis
///
/// The axis along which the frame is relatively larger gets `1.0`; the other
/// axis shrinks to keep the frame's aspect ratio. Degenerate sizes yield
/// `[1.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use trirast::frontend::renderer::letterbox_scale;
///
/// // Square frame on a wide surface: bars left and right
/// assert_eq!(letterbox_scale((500, 500), (1000, 500)), [0.5, 1.0]);
/// // Square frame on a tall surface: bars top and bottom
/// assert_eq!(letterbox_scale((500, 500), (500, 1000)), [1.0, 0.5]);
/// ```
pub fn letterbox_scale(frame: (u32, u32), surface: (u32, u32)) -> [f32; 2] {
    if frame.0 == 0 || frame.1 == 0 || surface.0 == 0 || surface.1 == 0 {
        return [1.0, 1.0];
    }

    let frame_aspect = frame.0 as f32 / frame.1 as f32;
    let surface_aspect = surface.0 as f32 / surface.1 as f32;

    if surface_aspect > frame_aspect {
        [frame_aspect / surface_aspect, 1.0]
    } else {
        [1.0, surface_aspect / frame_aspect]
    }
}

/// Display renderer
///
/// Owns the render pipeline, the frame texture and its bind group.
pub struct DisplayRenderer {
    /// Render pipeline for display shader
    pipeline: wgpu::RenderPipeline,
    /// Bind group layout for frame texture, sampler, and uniform
    bind_group_layout: wgpu::BindGroupLayout,
    /// Bind group for the current frame texture
    bind_group: wgpu::BindGroup,
    frame_texture: FrameTexture,
    /// Nearest-neighbour sampler
    sampler: wgpu::Sampler,
    /// Viewport uniform buffer
    uniform_buffer: wgpu::Buffer,
}

impl DisplayRenderer {
    /// Create a new display renderer
    ///
    /// # Arguments
    ///
    /// * `device` - wgpu device for creating GPU resources
    /// * `surface_format` - Output surface texture format
    /// * `frame_size` - Pixel buffer size as `(width, height)`
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        frame_size: (u32, u32),
    ) -> Self {
        let frame_texture = FrameTexture::new(device, frame_size.0, frame_size.1);

        // Point filtering keeps pixels sharp when scaled up
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Frame Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            lod_min_clamp: 0.0,
            lod_max_clamp: 0.0,
            compare: None,
            anisotropy_clamp: 1,
            border_color: None,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Viewport Uniform Buffer"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Display Bind Group Layout"),
            entries: &[
                // Frame texture
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
                // Sampler
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                // Viewport uniform
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = Self::create_bind_group(
            device,
            &bind_group_layout,
            &frame_texture,
            &sampler,
            &uniform_buffer,
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Display Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/display.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Display Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Display Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview: None,
            cache: None,
        });

        log::info!(
            "Display renderer initialized for {}x{} frames",
            frame_size.0,
            frame_size.1
        );

        Self {
            pipeline,
            bind_group_layout,
            bind_group,
            frame_texture,
            sampler,
            uniform_buffer,
        }
    }

    /// Force the buffer to be uploaded again on the next render
    pub fn mark_dirty(&mut self) {
        self.frame_texture.mark_dirty();
    }

    /// Draw the buffer into `output_view`
    ///
    /// # Arguments
    ///
    /// * `encoder` - Command encoder for recording GPU commands
    /// * `output_view` - Surface texture view to render to
    /// * `buffer` - Pixel buffer to show
    /// * `surface_size` - Output size as `(width, height)`, for letterboxing
    /// * `device` - wgpu device, used when the frame size changes
    /// * `queue` - wgpu queue for uploading data
    pub fn render(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        buffer: &PixelBuffer,
        surface_size: (u32, u32),
        device: &wgpu::Device,
        queue: &wgpu::Queue,
    ) {
        if !self.frame_texture.upload(queue, buffer) {
            log::debug!(
                "Frame size changed to {}x{}, recreating texture",
                buffer.width(),
                buffer.height()
            );
            self.frame_texture = FrameTexture::new(device, buffer.width(), buffer.height());
            self.bind_group = Self::create_bind_group(
                device,
                &self.bind_group_layout,
                &self.frame_texture,
                &self.sampler,
                &self.uniform_buffer,
            );
            self.frame_texture.upload(queue, buffer);
        }

        let uniform = ViewportUniform {
            scale: letterbox_scale(self.frame_texture.size(), surface_size),
            _padding: [0.0; 2],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Display Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);

        // Fullscreen triangle (3 vertices, no vertex buffer)
        render_pass.draw(0..3, 0..1);
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        frame_texture: &FrameTexture,
        sampler: &wgpu::Sampler,
        uniform_buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Display Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&frame_texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        })
    }
}
