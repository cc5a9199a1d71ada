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

//! Gouraud-shaded triangle fill
//!
//! Scanline rasterization with colors interpolated along the edges and then
//! across each horizontal span.
//!
//! # Algorithm
//!
//! 1. Sort the vertices by Y into `top`, `middle`, `bottom`
//! 2. Skip the triangle entirely if `top.y == bottom.y`
//! 3. For every row `y` from `top.y` to `bottom.y` (inclusive):
//!    - The long edge runs `top → bottom`
//!    - The short edge is `top → middle` while `y < middle.y`, then
//!      `middle → bottom`; a row whose short edge has zero height is skipped
//!    - Each edge yields an X position and a color at fraction
//!      `t = (y - start.y) / (end.y - start.y)`
//!    - Both X positions are truncated toward zero to give `x_left`, `x_right`
//!    - Pixels `x_left..=x_right` get the left color blended towards the right
//!      color by `(x - x_left) / (x_right - x_left)`; a one-pixel span gets
//!      the left color alone
//!
//! The left color is the long edge's only when its X is strictly smaller, so
//! ties take the short edge's color.
//!
//! Rows and columns outside the target are never visited. Interpolation
//! fractions always come from the unclipped geometry, so clipping never
//! changes the color of a visible pixel.
//!
//! # References
//!
//! - [Scanline rendering](https://en.wikipedia.org/wiki/Scanline_rendering)
//! - [Gouraud shading](https://en.wikipedia.org/wiki/Gouraud_shading)

use super::buffer::PixelTarget;
use super::color::Color;
use super::primitives::{Triangle, Vertex};
use super::rasterizer::Rasterizer;

impl Rasterizer {
    /// Fill a triangle with per-vertex color interpolation
    ///
    /// Vertex order does not matter. Zero-height triangles draw nothing.
    /// Collinear triangles with non-zero height are not rejected here; they
    /// collapse to a sliver at most one pixel wide per row. Callers that want
    /// to refuse them should check [`Triangle::is_collinear`] first.
    ///
    /// # Arguments
    ///
    /// * `target` - Pixel destination
    /// * `v0`, `v1`, `v2` - Triangle vertices, in any order
    pub fn fill_triangle<T>(&self, target: &mut T, v0: Vertex, v1: Vertex, v2: Vertex)
    where
        T: PixelTarget + ?Sized,
    {
        let [top, middle, bottom] = Triangle::new(v0, v1, v2).sorted_by_y();

        if top.y == bottom.y {
            log::debug!("Skipping zero-height triangle at y={}", top.y);
            return;
        }

        let (width, height) = target.size();
        let first_row = top.y.max(0);
        let last_row = bottom.y.min(last_index(height));

        for y in first_row..=last_row {
            let (start, end) = if y < middle.y {
                (top, middle)
            } else {
                (middle, bottom)
            };

            if start.y == end.y {
                continue;
            }

            let (x_long, color_long) = edge_at(top, bottom, y);
            let (x_short, color_short) = edge_at(start, end, y);

            let (left_color, right_color) = if x_long < x_short {
                (color_long, color_short)
            } else {
                (color_short, color_long)
            };

            let x_left = x_long.min(x_short) as i32;
            let x_right = x_long.max(x_short) as i32;

            fill_span(target, y, (x_left, left_color), (x_right, right_color), width);
        }
    }
}

/// Position and color where edge `start → end` crosses row `y`
///
/// `start.y` and `end.y` must differ.
#[inline(always)]
fn edge_at(start: Vertex, end: Vertex, y: i32) -> (f32, Color) {
    let t = delta(start.y, y) / delta(start.y, end.y);
    let x = start.x as f32 + delta(start.x, end.x) * t;
    (x, start.color.interpolate(end.color, t))
}

/// Write pixels `left.0..=right.0` on row `y`
fn fill_span<T>(target: &mut T, y: i32, left: (i32, Color), right: (i32, Color), width: u32)
where
    T: PixelTarget + ?Sized,
{
    let (x_left, left_color) = left;
    let (x_right, right_color) = right;

    let span = delta(x_left, x_right);
    let first = x_left.max(0);
    let last = x_right.min(last_index(width));

    for x in first..=last {
        // One-pixel spans take the left color as is
        let t = if span > 0.0 {
            delta(x_left, x) / span
        } else {
            0.0
        };
        target.set_pixel(x, y, left_color.interpolate(right_color, t));
    }
}

/// `b - a` widened so it cannot overflow, as `f32`
#[inline(always)]
fn delta(a: i32, b: i32) -> f32 {
    (b as i64 - a as i64) as f32
}

/// Largest valid coordinate for a dimension, -1 when empty
#[inline(always)]
fn last_index(size: u32) -> i32 {
    i32::try_from(size).unwrap_or(i32::MAX).saturating_sub(1)
}
