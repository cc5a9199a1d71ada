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

//! Line tracing
//!
//! Integer-incremental (Bresenham) line stepping with per-pixel color
//! interpolation. The tracer yields pixels instead of drawing them, so the
//! same sequence can feed the wireframe renderer or be inspected directly.
//!
//! # Algorithm
//!
//! 1. Pick the dominant axis: X when `|dy| < |dx|`, otherwise Y
//! 2. If the dominant-axis start is greater than its end, swap the endpoints
//!    (and their colors) so stepping always moves forward
//! 3. Step once per unit along the dominant axis, emitting `n + 1` pixels for
//!    a dominant delta of `n`
//! 4. A decision accumulator `D = 2*d_minor - d_major` moves the minor axis
//!    by one whenever it is positive
//!
//! Pixel `i` gets the color `interpolate(start, end, i / n)`, or the start
//! color alone when `n == 0`.
//!
//! # References
//!
//! - [Bresenham's Line Algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)

use super::color::Color;
use super::primitives::Vertex;

/// Axis stepped exactly once per emitted pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantAxis {
    X,
    Y,
}

/// Iterator over the pixels of one traced line
///
/// Created by [`trace_line`]. The first pixel is the endpoint with the smaller
/// coordinate on the dominant axis, which is not necessarily the first
/// endpoint passed in.
#[derive(Debug, Clone)]
pub struct LineTrace {
    axis: DominantAxis,
    /// Current position on the dominant axis
    major: i64,
    /// Current position on the minor axis
    minor: i64,
    /// Minor axis direction (+1 or -1)
    minor_step: i64,
    /// Dominant axis delta (always >= 0)
    d_major: i64,
    /// Absolute minor axis delta
    d_minor: i64,
    /// Decision accumulator
    decision: i64,
    /// Index of the next pixel
    step: u64,
    /// Total step count `n`; `n + 1` pixels are produced
    steps: u64,
    start_color: Color,
    end_color: Color,
}

/// Trace a colored line between two endpoints
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{trace_line, Color};
///
/// let red = Color::from_packed(0xFF0000FF);
/// let green = Color::from_packed(0x00FF00FF);
///
/// let pixels: Vec<_> = trace_line(0, 0, red, 4, 0, green).collect();
/// assert_eq!(pixels.len(), 5);
/// assert_eq!(pixels[0].color, red);
/// assert_eq!(pixels[4].color, green);
/// assert!(pixels.iter().enumerate().all(|(i, p)| p.x == i as i32 && p.y == 0));
/// ```
pub fn trace_line(x0: i32, y0: i32, color0: Color, x1: i32, y1: i32, color1: Color) -> LineTrace {
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);

    if (y1 - y0).abs() < (x1 - x0).abs() {
        if x0 > x1 {
            LineTrace::along(DominantAxis::X, (x1, y1, color1), (x0, y0, color0))
        } else {
            LineTrace::along(DominantAxis::X, (x0, y0, color0), (x1, y1, color1))
        }
    } else if y0 > y1 {
        LineTrace::along(DominantAxis::Y, (y1, x1, color1), (y0, x0, color0))
    } else {
        LineTrace::along(DominantAxis::Y, (y0, x0, color0), (y1, x1, color1))
    }
}

impl LineTrace {
    /// Set up stepping from `start` to `end`, both given as
    /// `(major, minor, color)` with `start.major <= end.major`
    fn along(axis: DominantAxis, start: (i64, i64, Color), end: (i64, i64, Color)) -> Self {
        let d_major = end.0 - start.0;
        let minor_delta = end.1 - start.1;
        let minor_step = if minor_delta < 0 { -1 } else { 1 };
        let d_minor = minor_delta.abs();

        Self {
            axis,
            major: start.0,
            minor: start.1,
            minor_step,
            d_major,
            d_minor,
            decision: 2 * d_minor - d_major,
            step: 0,
            steps: d_major as u64,
            start_color: start.2,
            end_color: end.2,
        }
    }

    /// The axis this line steps along
    pub fn dominant_axis(&self) -> DominantAxis {
        self.axis
    }
}

impl Iterator for LineTrace {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        if self.step > self.steps {
            return None;
        }

        let t = if self.steps > 0 {
            self.step as f32 / self.steps as f32
        } else {
            0.0
        };
        let color = self.start_color.interpolate(self.end_color, t);

        let (x, y) = match self.axis {
            DominantAxis::X => (self.major, self.minor),
            DominantAxis::Y => (self.minor, self.major),
        };
        let pixel = Vertex::new(x as i32, y as i32, color);

        self.step += 1;
        if self.decision > 0 {
            self.minor += self.minor_step;
            self.decision += 2 * (self.d_minor - self.d_major);
        } else {
            self.decision += 2 * self.d_minor;
        }
        self.major += 1;

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.step);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
