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

//! Rendering subsystem
//!
//! - [`RenderContext`]: wgpu device, queue and window surface
//! - [`DisplayRenderer`]: draws the pixel buffer to the surface
//! - [`FrameTexture`]: GPU copy of the pixel buffer

mod context;
mod display_renderer;
mod frame_texture;
#[cfg(test)]
mod tests;

pub use context::RenderContext;
pub use display_renderer::{letterbox_scale, DisplayRenderer};
pub use frame_texture::FrameTexture;
