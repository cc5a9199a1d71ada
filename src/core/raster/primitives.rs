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

//! Rasterizer primitive type definitions
//!
//! Vertices and triangles, plus the collinearity predicate used to reject
//! zero-area triangles before they reach the rasterizer.

use super::color::Color;

/// A colored 2D vertex
///
/// Coordinates are in buffer pixels with the origin at the top-left corner,
/// X increasing to the right and Y increasing downward. Coordinates outside
/// the buffer are valid; the pixels they would produce are simply dropped.
///
/// The line tracer reuses this type for its output: each traced pixel is a
/// vertex tagged with its interpolated color.
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{Color, Vertex};
///
/// let v = Vertex::new(250, 100, Color::from_packed(0xFF0000FF));
/// assert_eq!((v.x, v.y), (250, 100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Vertex color
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// Three vertices forming one triangle
///
/// A triangle carries no identity beyond the draw call it is used in. Vertex
/// order is the order in which the vertices were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub const fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Twice the signed area of the triangle
    ///
    /// Positive for one winding, negative for the other, zero when the three
    /// vertices lie on one line. Computed in `i128` so it cannot overflow for
    /// any `i32` coordinates.
    pub fn doubled_signed_area(&self) -> i128 {
        let [v0, v1, v2] = self.vertices;
        let (x0, y0) = (v0.x as i128, v0.y as i128);
        let (x1, y1) = (v1.x as i128, v1.y as i128);
        let (x2, y2) = (v2.x as i128, v2.y as i128);

        (x1 - x0) * (y2 - y0) - (x2 - x0) * (y1 - y0)
    }

    /// Whether the vertices are collinear (zero area)
    pub fn is_collinear(&self) -> bool {
        self.doubled_signed_area() == 0
    }

    /// Vertices sorted by ascending Y
    ///
    /// Uses a three-compare swap network. Vertices with equal Y keep an
    /// unspecified relative order; only the labelling changes, never the set
    /// of pixels the fill produces.
    pub fn sorted_by_y(&self) -> [Vertex; 3] {
        let [mut v0, mut v1, mut v2] = self.vertices;

        if v0.y > v1.y {
            std::mem::swap(&mut v0, &mut v1);
        }
        if v0.y > v2.y {
            std::mem::swap(&mut v0, &mut v2);
        }
        if v1.y > v2.y {
            std::mem::swap(&mut v1, &mut v2);
        }

        [v0, v1, v2]
    }
}

impl From<[Vertex; 3]> for Triangle {
    fn from(vertices: [Vertex; 3]) -> Self {
        Self { vertices }
    }
}

/// Collinearity test on three loose vertices
///
/// Only position matters; colors are ignored.
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{is_collinear, Color, Vertex};
///
/// let c = Color::WHITE;
/// assert!(is_collinear(Vertex::new(0, 0, c), Vertex::new(1, 1, c), Vertex::new(2, 2, c)));
/// assert!(!is_collinear(Vertex::new(0, 0, c), Vertex::new(1, 1, c), Vertex::new(2, 3, c)));
/// ```
pub fn is_collinear(v0: Vertex, v1: Vertex, v2: Vertex) -> bool {
    Triangle::new(v0, v1, v2).is_collinear()
}
