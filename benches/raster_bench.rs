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

//! Rasterizer benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use trirast::core::raster::{trace_line, Palette, PixelBuffer, Rasterizer, RenderMode, Vertex};
use trirast::core::scene::Scene;

fn vertex(x: i32, y: i32, color: Palette) -> Vertex {
    Vertex::new(x, y, color.color())
}

fn bench_fill(c: &mut Criterion) {
    let rasterizer = Rasterizer::new();
    let mut buffer = PixelBuffer::new(500, 500);

    let (v0, v1, v2) = (
        vertex(250, 100, Palette::Red),
        vertex(100, 400, Palette::Green),
        vertex(400, 400, Palette::Blue),
    );

    c.bench_function("fill_triangle_45k_px", |b| {
        b.iter(|| rasterizer.fill_triangle(&mut buffer, black_box(v0), black_box(v1), black_box(v2)))
    });

    // Mostly off-screen: measures the row and column clipping
    let (v0, v1, v2) = (
        vertex(-100_000, -100_000, Palette::Gold),
        vertex(100_000, -100_000, Palette::Pink),
        vertex(250, 100_000, Palette::Orange),
    );

    c.bench_function("fill_triangle_clipped", |b| {
        b.iter(|| rasterizer.fill_triangle(&mut buffer, black_box(v0), black_box(v1), black_box(v2)))
    });
}

fn bench_line(c: &mut Criterion) {
    let red = Palette::Red.color();
    let blue = Palette::Blue.color();

    c.bench_function("trace_line_diagonal", |b| {
        b.iter(|| trace_line(black_box(0), 0, red, black_box(499), 321, blue).count())
    });
}

fn bench_scene(c: &mut Criterion) {
    let scene = Scene::default_scene();
    let mut buffer = PixelBuffer::new(500, 500);

    c.bench_function("default_scene_filled", |b| {
        let rasterizer = Rasterizer::new();
        b.iter(|| scene.render(&rasterizer, &mut buffer))
    });

    c.bench_function("default_scene_wireframe", |b| {
        let rasterizer = Rasterizer::with_mode(RenderMode::Wireframe);
        b.iter(|| scene.render(&rasterizer, &mut buffer))
    });
}

criterion_group!(benches, bench_fill, bench_line, bench_scene);
criterion_main!(benches);
