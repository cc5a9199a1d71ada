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

//! trirast: a software triangle rasterizer
//!
//! This crate draws colored triangles into an in-memory pixel buffer using
//! scanline fill with per-vertex (Gouraud) color interpolation, and can trace
//! their edges with Bresenham lines instead.
//!
//! # Architecture
//!
//! - [`core`]: Rasterizer, pixel buffer, scenes, prompt, configuration and
//!   PNG export
//! - `frontend`: winit/wgpu window that presents the buffer (enabled by the
//!   default `window` feature)
//!
//! # Example
//!
//! ```
//! use trirast::core::raster::{PixelBuffer, Rasterizer};
//! use trirast::core::scene::Scene;
//!
//! let mut buffer = PixelBuffer::new(500, 500);
//! Scene::default_scene().render(&Rasterizer::new(), &mut buffer);
//!
//! assert_eq!(buffer.get_pixel(250, 100).map(|c| c.packed()), Some(0xFF0000FF));
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return [`core::error::Result<T>`], an alias for
//! `Result<T, RasterError>`. Drawing itself never fails.

pub mod core;
#[cfg(feature = "window")]
pub mod frontend;

// Re-export commonly used types
pub use core::error::{RasterError, Result};
