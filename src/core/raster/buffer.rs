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

//! Pixel buffer
//!
//! A fixed-size, row-major grid of packed colors. The buffer holds no
//! rasterization logic; it only offers a bounds-checked single pixel write
//! ([`PixelTarget::set_pixel`]) which is the sole path the rasterizer uses to
//! mutate it.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) is the top-left pixel
//! - X increases to the right (0 to width - 1)
//! - Y increases downward (0 to height - 1)

use super::color::Color;

/// Destination for rasterizer pixel writes
///
/// Implementors must silently ignore writes outside `0..width` × `0..height`.
/// The rasterizer relies on that to draw geometry that extends past the
/// edges, and may skip rows and columns it knows lie outside [`size`].
///
/// [`size`]: PixelTarget::size
pub trait PixelTarget {
    /// Target dimensions as `(width, height)`
    fn size(&self) -> (u32, u32);

    /// Write one pixel, dropping out-of-range coordinates
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// Owned 2D pixel buffer
///
/// The storage is allocated once at construction and never resized; it is
/// released when the buffer goes out of scope.
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{Color, PixelBuffer, PixelTarget};
///
/// let mut buffer = PixelBuffer::new(500, 500);
/// let red = Color::from_packed(0xFF0000FF);
///
/// buffer.set_pixel(10, 20, red);
/// assert_eq!(buffer.get_pixel(10, 20), Some(red));
///
/// // Out-of-range writes are ignored
/// buffer.set_pixel(-1, 10, red);
/// assert_eq!(buffer.get_pixel(-1, 10), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// Row-major pixel storage (`width * height` entries)
    pixels: Box<[Color]>,
}

impl PixelBuffer {
    /// Create a buffer cleared to opaque black
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_clear_color(width, height, Color::BLACK)
    }

    /// Create a buffer cleared to `color`
    pub fn with_clear_color(width: u32, height: u32, color: Color) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![color; len].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel slice
    #[inline(always)]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Overwrite every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Read a pixel, `None` when out of range
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|index| self.pixels[index])
    }

    /// Pixel data as bytes in R, G, B, A order, row-major
    ///
    /// This is the layout expected by `Rgba8` textures and PNG encoders.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirast::core::raster::{Color, PixelBuffer};
    ///
    /// let buffer = PixelBuffer::with_clear_color(2, 1, Color::from_packed(0xFFA500FF));
    /// assert_eq!(buffer.to_rgba8(), vec![0xFF, 0xA5, 0x00, 0xFF, 0xFF, 0xA5, 0x00, 0xFF]);
    /// ```
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.to_rgba8())
            .collect()
    }

    #[inline(always)]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl PixelTarget for PixelBuffer {
    #[inline(always)]
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline(always)]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index_of(x, y) {
            self.pixels[index] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_opaque_black() {
        let buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.pixels().len(), 12);
        assert!(buffer.pixels().iter().all(|&p| p.packed() == 0x000000FF));
    }

    #[test]
    fn test_set_pixel_row_major_layout() {
        let mut buffer = PixelBuffer::new(4, 3);
        let gold = Color::from_packed(0xFFD700FF);
        buffer.set_pixel(1, 2, gold);
        assert_eq!(buffer.pixels()[2 * 4 + 1], gold);
    }

    #[test]
    fn test_out_of_range_writes_are_dropped() {
        let mut buffer = PixelBuffer::new(500, 500);
        let before = buffer.clone();
        let pink = Color::from_packed(0xFFC0CBFF);

        buffer.set_pixel(-1, 10, pink);
        buffer.set_pixel(10, -1, pink);
        buffer.set_pixel(500, 10, pink);
        buffer.set_pixel(10, 500, pink);
        buffer.set_pixel(i32::MIN, i32::MAX, pink);

        assert_eq!(buffer, before);
    }

    #[test]
    fn test_edge_pixels_are_writable() {
        let mut buffer = PixelBuffer::new(500, 500);
        let blue = Color::from_packed(0x0000FFFF);
        buffer.set_pixel(0, 0, blue);
        buffer.set_pixel(499, 499, blue);
        assert_eq!(buffer.get_pixel(0, 0), Some(blue));
        assert_eq!(buffer.get_pixel(499, 499), Some(blue));
    }

    #[test]
    fn test_clear() {
        let mut buffer = PixelBuffer::new(8, 8);
        buffer.clear(Color::WHITE);
        assert!(buffer.pixels().iter().all(|&p| p == Color::WHITE));
    }

    #[test]
    fn test_zero_sized_buffer_ignores_writes() {
        let mut buffer = PixelBuffer::new(0, 0);
        buffer.set_pixel(0, 0, Color::WHITE);
        assert!(buffer.pixels().is_empty());
        assert_eq!(buffer.get_pixel(0, 0), None);
    }
}
