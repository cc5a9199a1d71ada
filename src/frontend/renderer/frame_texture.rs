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

//! Frame texture management
//!
//! GPU copy of the pixel buffer. The buffer already stores R, G, B, A bytes
//! in row-major order, so uploading is a straight copy with no conversion.

use crate::core::raster::PixelBuffer;

/// wgpu texture mirroring a [`PixelBuffer`]
///
/// The texture uses an sRGB format, so sampling decodes the stored bytes and
/// writing to an sRGB surface encodes them again unchanged.
pub struct FrameTexture {
    /// wgpu texture handle
    texture: wgpu::Texture,
    /// Texture view for binding to shaders
    pub view: wgpu::TextureView,
    width: u32,
    height: u32,
    /// Set when the buffer changed since the last upload
    dirty: bool,
}

impl FrameTexture {
    /// Texel format of the frame texture
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Create a texture sized for a `width` × `height` buffer
    ///
    /// The texture starts dirty so the first [`upload`](Self::upload) always
    /// copies.
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Frame Texture"),
            size: Self::extent(width, height),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            width,
            height,
            dirty: true,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Copy the buffer to the GPU if it is marked dirty
    ///
    /// Returns `false` (and uploads nothing) when the buffer size does not
    /// match the texture; the caller is expected to recreate the texture.
    pub fn upload(&mut self, queue: &wgpu::Queue, buffer: &PixelBuffer) -> bool {
        if (buffer.width(), buffer.height()) != self.size() {
            return false;
        }
        if !self.dirty {
            return true;
        }

        queue.write_texture(
            self.texture.as_image_copy(),
            &buffer.to_rgba8(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(self.width * 4),
                rows_per_image: Some(self.height),
            },
            Self::extent(self.width, self.height),
        );

        self.dirty = false;
        true
    }

    /// Force the next [`upload`](Self::upload) to copy
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn extent(width: u32, height: u32) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        }
    }
}
