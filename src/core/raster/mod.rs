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

//! Software rasterization
//!
//! This module draws colored triangles and lines into a pixel buffer:
//! - Packed `0xRRGGBBAA` colors with linear per-channel interpolation
//! - A fixed vertex palette
//! - A bounds-checked pixel buffer behind the [`PixelTarget`] seam
//! - Bresenham line tracing with color interpolation
//! - Scanline triangle fill with Gouraud shading
//!
//! # Coordinate System
//!
//! The origin (0, 0) is the top-left pixel:
//! - X-axis: 0 to width - 1 (left to right)
//! - Y-axis: 0 to height - 1 (top to bottom)
//!
//! Vertices may lie anywhere in the `i32` range. Pixels that land outside the
//! target are dropped.
//!
//! # References
//!
//! - [Bresenham's Line Algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
//! - [Scanline rendering](https://en.wikipedia.org/wiki/Scanline_rendering)

mod buffer;
mod color;
mod line;
mod palette;
mod primitives;
mod rasterizer;
mod triangle;
#[cfg(test)]
mod tests;

// Public re-exports
pub use buffer::{PixelBuffer, PixelTarget};
pub use color::Color;
pub use line::{trace_line, DominantAxis, LineTrace};
pub use palette::Palette;
pub use primitives::{is_collinear, Triangle, Vertex};
pub use rasterizer::{Rasterizer, RenderMode};
