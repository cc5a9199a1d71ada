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

//! Software Rasterizer
//!
//! The [`Rasterizer`] turns triangles into pixel writes on a [`PixelTarget`].
//! It has two render modes:
//!
//! - [`RenderMode::Filled`]: scanline fill with linear color interpolation
//!   (see the `triangle` module for the algorithm)
//! - [`RenderMode::Wireframe`]: the three edges traced with the line tracer
//!
//! Every pixel goes through [`PixelTarget::set_pixel`], so geometry that
//! extends past the target is clipped pixel by pixel. Nothing in here returns
//! an error: degenerate input renders nothing.

use super::buffer::PixelTarget;
use super::line::trace_line;
use super::primitives::{Triangle, Vertex};
use serde::{Deserialize, Serialize};

/// How triangles are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Scanline fill of the interior
    #[default]
    Filled,
    /// Edges only, traced with Bresenham lines
    Wireframe,
}

/// Triangle rasterizer
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{Color, PixelBuffer, Rasterizer, Vertex};
///
/// let mut buffer = PixelBuffer::new(500, 500);
/// let rasterizer = Rasterizer::new();
///
/// let red = Color::from_packed(0xFF0000FF);
/// let green = Color::from_packed(0x00FF00FF);
/// let blue = Color::from_packed(0x0000FFFF);
///
/// rasterizer.fill_triangle(
///     &mut buffer,
///     Vertex::new(250, 100, red),
///     Vertex::new(100, 400, green),
///     Vertex::new(400, 400, blue),
/// );
///
/// assert_eq!(buffer.get_pixel(250, 100), Some(red));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    mode: RenderMode,
}

impl Rasterizer {
    /// Create a rasterizer in [`RenderMode::Filled`]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    /// Draw one triangle in the current render mode
    pub fn draw_triangle<T>(&self, target: &mut T, triangle: &Triangle)
    where
        T: PixelTarget + ?Sized,
    {
        let [v0, v1, v2] = triangle.vertices;

        log::trace!(
            "Rendering {:?} triangle: ({}, {}) #{:08X}, ({}, {}) #{:08X}, ({}, {}) #{:08X}",
            self.mode,
            v0.x,
            v0.y,
            v0.color.packed(),
            v1.x,
            v1.y,
            v1.color.packed(),
            v2.x,
            v2.y,
            v2.color.packed()
        );

        match self.mode {
            RenderMode::Filled => self.fill_triangle(target, v0, v1, v2),
            RenderMode::Wireframe => self.draw_triangle_edges(target, v0, v1, v2),
        }
    }

    /// Draw a color-interpolated line between two vertices
    ///
    /// # Examples
    ///
    /// ```
    /// use trirast::core::raster::{Color, PixelBuffer, Rasterizer, Vertex};
    ///
    /// let mut buffer = PixelBuffer::new(16, 16);
    /// let white = Color::WHITE;
    /// Rasterizer::new().draw_line(&mut buffer, Vertex::new(0, 0, white), Vertex::new(15, 15, white));
    ///
    /// assert_eq!(buffer.get_pixel(7, 7), Some(white));
    /// ```
    pub fn draw_line<T>(&self, target: &mut T, from: Vertex, to: Vertex)
    where
        T: PixelTarget + ?Sized,
    {
        for pixel in trace_line(from.x, from.y, from.color, to.x, to.y, to.color) {
            target.set_pixel(pixel.x, pixel.y, pixel.color);
        }
    }

    /// Draw the three edges of a triangle (v0→v1, v1→v2, v2→v0)
    pub fn draw_triangle_edges<T>(&self, target: &mut T, v0: Vertex, v1: Vertex, v2: Vertex)
    where
        T: PixelTarget + ?Sized,
    {
        self.draw_line(target, v0, v1);
        self.draw_line(target, v1, v2);
        self.draw_line(target, v2, v0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::raster::{Color, PixelBuffer};

    const RED: Color = Color::from_packed(0xFF0000FF);
    const GREEN: Color = Color::from_packed(0x00FF00FF);
    const BLUE: Color = Color::from_packed(0x0000FFFF);

    fn sample_triangle() -> Triangle {
        Triangle::new(
            Vertex::new(100, 100, RED),
            Vertex::new(200, 100, GREEN),
            Vertex::new(150, 200, BLUE),
        )
    }

    #[test]
    fn test_default_mode_is_filled() {
        assert_eq!(Rasterizer::new().mode(), RenderMode::Filled);
    }

    #[test]
    fn test_filled_mode_covers_interior() {
        let mut buffer = PixelBuffer::new(300, 300);
        Rasterizer::new().draw_triangle(&mut buffer, &sample_triangle());

        assert_ne!(buffer.get_pixel(150, 133), Some(Color::BLACK));
        assert_eq!(buffer.get_pixel(50, 50), Some(Color::BLACK));
    }

    #[test]
    fn test_wireframe_mode_leaves_interior_empty() {
        let mut buffer = PixelBuffer::new(300, 300);
        let rasterizer = Rasterizer::with_mode(RenderMode::Wireframe);
        rasterizer.draw_triangle(&mut buffer, &sample_triangle());

        // Interior untouched, vertices and edges drawn
        assert_eq!(buffer.get_pixel(150, 133), Some(Color::BLACK));
        assert_eq!(buffer.get_pixel(100, 100), Some(RED));
        assert_eq!(buffer.get_pixel(150, 200), Some(BLUE));
        assert_ne!(buffer.get_pixel(150, 100), Some(Color::BLACK));
    }

    #[test]
    fn test_set_mode() {
        let mut rasterizer = Rasterizer::new();
        rasterizer.set_mode(RenderMode::Wireframe);
        assert_eq!(rasterizer.mode(), RenderMode::Wireframe);
    }

    #[test]
    fn test_line_clipped_at_buffer_edge() {
        let mut buffer = PixelBuffer::new(10, 10);
        Rasterizer::new().draw_line(
            &mut buffer,
            Vertex::new(-20, 5, Color::WHITE),
            Vertex::new(30, 5, Color::WHITE),
        );

        for x in 0..10 {
            assert_eq!(buffer.get_pixel(x, 5), Some(Color::WHITE));
        }
        assert_eq!(buffer.get_pixel(0, 4), Some(Color::BLACK));
    }

    #[test]
    fn test_render_mode_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            mode: RenderMode,
        }

        let holder: Holder = toml::from_str("mode = \"wireframe\"").unwrap();
        assert_eq!(holder.mode, RenderMode::Wireframe);
    }
}
