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

//! Scanline fill tests

use super::{Recorder, BLUE, GREEN, RED};
use crate::core::raster::{Color, PixelBuffer, Rasterizer, Vertex};

fn fill(target: &mut Recorder, v0: Vertex, v1: Vertex, v2: Vertex) {
    Rasterizer::new().fill_triangle(target, v0, v1, v2);
}

#[test]
fn test_reference_triangle_apex_is_red() {
    let mut buffer = PixelBuffer::new(500, 500);
    Rasterizer::new().fill_triangle(
        &mut buffer,
        Vertex::new(250, 100, RED),
        Vertex::new(100, 400, GREEN),
        Vertex::new(400, 400, BLUE),
    );

    assert_eq!(buffer.get_pixel(250, 100), Some(RED));
    assert_eq!(buffer.get_pixel(250, 99), Some(Color::BLACK));
}

#[test]
fn test_reference_triangle_stays_within_rows() {
    let mut recorder = Recorder::new(500, 500);
    fill(
        &mut recorder,
        Vertex::new(250, 100, RED),
        Vertex::new(100, 400, GREEN),
        Vertex::new(400, 400, BLUE),
    );

    assert!(!recorder.writes.is_empty());
    assert!(recorder.writes.iter().all(|&(_, y, _)| (100..=400).contains(&y)));
}

#[test]
fn test_flat_bottom_row_is_skipped() {
    // The last row of a flat-bottom triangle has a zero-height short edge
    let mut recorder = Recorder::new(500, 500);
    fill(
        &mut recorder,
        Vertex::new(250, 100, RED),
        Vertex::new(100, 400, GREEN),
        Vertex::new(400, 400, BLUE),
    );

    let rows = recorder.row_extents();
    assert!(rows.contains_key(&399));
    assert!(!rows.contains_key(&400));
}

#[test]
fn test_flat_top_triangle() {
    let mut recorder = Recorder::new(64, 64);
    fill(
        &mut recorder,
        Vertex::new(0, 0, RED),
        Vertex::new(10, 0, GREEN),
        Vertex::new(5, 10, BLUE),
    );

    let rows = recorder.row_extents();
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[&0], (0, 10));
    assert_eq!(rows[&10], (5, 5));

    // Top row blends red to green, bottom row is the blue apex
    assert_eq!(recorder.color_at(0, 0), Some(RED));
    assert_eq!(recorder.color_at(10, 0), Some(GREEN));
    assert_eq!(recorder.color_at(5, 0), Some(Color::from_packed(0x7F7F00FF)));
    assert_eq!(recorder.color_at(5, 10), Some(BLUE));
}

#[test]
fn test_zero_height_triangle_writes_nothing() {
    let mut recorder = Recorder::new(64, 64);
    fill(
        &mut recorder,
        Vertex::new(0, 7, RED),
        Vertex::new(30, 7, GREEN),
        Vertex::new(60, 7, BLUE),
    );
    assert!(recorder.writes.is_empty());
}

#[test]
fn test_vertical_collinear_triangle_is_one_pixel_wide() {
    let mut recorder = Recorder::new(64, 64);
    fill(
        &mut recorder,
        Vertex::new(5, 0, RED),
        Vertex::new(5, 10, GREEN),
        Vertex::new(5, 20, BLUE),
    );

    assert_eq!(recorder.writes.len(), 21);
    assert!(recorder.writes.iter().all(|&(x, _, _)| x == 5));
}

#[test]
fn test_vertex_order_does_not_matter() {
    let a = Vertex::new(30, 5, RED);
    let b = Vertex::new(5, 40, GREEN);
    let c = Vertex::new(55, 60, BLUE);

    let render = |v0, v1, v2| {
        let mut buffer = PixelBuffer::new(64, 64);
        Rasterizer::new().fill_triangle(&mut buffer, v0, v1, v2);
        buffer
    };

    let reference = render(a, b, c);
    assert_eq!(render(a, c, b), reference);
    assert_eq!(render(b, a, c), reference);
    assert_eq!(render(b, c, a), reference);
    assert_eq!(render(c, a, b), reference);
    assert_eq!(render(c, b, a), reference);
}

#[test]
fn test_fill_never_writes_outside_target() {
    let mut recorder = Recorder::new(500, 500);
    fill(
        &mut recorder,
        Vertex::new(-100, -100, RED),
        Vertex::new(600, -100, GREEN),
        Vertex::new(250, 700, BLUE),
    );

    assert!(!recorder.writes.is_empty());
    assert!(recorder
        .writes
        .iter()
        .all(|&(x, y, _)| (0..500).contains(&x) && (0..500).contains(&y)));
}

#[test]
fn test_clipping_preserves_visible_colors() {
    let v0 = Vertex::new(-100, -100, RED);
    let v1 = Vertex::new(600, -100, GREEN);
    let v2 = Vertex::new(250, 700, BLUE);

    let mut small = PixelBuffer::new(500, 500);
    let mut large = PixelBuffer::new(1000, 1000);
    Rasterizer::new().fill_triangle(&mut small, v0, v1, v2);
    Rasterizer::new().fill_triangle(&mut large, v0, v1, v2);

    for y in 0..500 {
        for x in 0..500 {
            assert_eq!(small.get_pixel(x, y), large.get_pixel(x, y), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_extreme_coordinates_do_not_panic() {
    let mut buffer = PixelBuffer::new(64, 64);
    Rasterizer::new().fill_triangle(
        &mut buffer,
        Vertex::new(i32::MIN, i32::MIN, Color::WHITE),
        Vertex::new(i32::MAX, 0, Color::WHITE),
        Vertex::new(0, i32::MAX, Color::WHITE),
    );

    assert_eq!(buffer.get_pixel(32, 32), Some(Color::WHITE));
}

#[test]
fn test_triangle_outside_target_draws_nothing() {
    let mut recorder = Recorder::new(100, 100);
    fill(
        &mut recorder,
        Vertex::new(10, 200, RED),
        Vertex::new(50, 300, GREEN),
        Vertex::new(90, 250, BLUE),
    );
    assert!(recorder.writes.is_empty());
}
