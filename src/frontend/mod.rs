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

//! Window frontend
//!
//! Shows the rendered pixel buffer in a winit window through wgpu.
//!
//! # Architecture
//!
//! - [`Application`]: event loop handler owning the window and renderer
//! - [`renderer`]: wgpu context and the buffer display pipeline
//! - [`FramePacer`]: fixed-rate present scheduling
//! - [`HotkeyMap`]: configurable exit, fullscreen and screenshot keys

pub mod app;
pub mod frame_pacer;
pub mod hotkeys;
pub mod renderer;
#[cfg(test)]
mod tests;

pub use app::Application;
pub use frame_pacer::FramePacer;
pub use hotkeys::HotkeyMap;
pub use renderer::RenderContext;
