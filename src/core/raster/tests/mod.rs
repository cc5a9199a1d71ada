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

//! Rasterizer tests

mod fill;

use super::{Color, PixelTarget};
use std::collections::BTreeMap;

pub(super) const RED: Color = Color::from_packed(0xFF0000FF);
pub(super) const GREEN: Color = Color::from_packed(0x00FF00FF);
pub(super) const BLUE: Color = Color::from_packed(0x0000FFFF);

/// Target that remembers every write, including out-of-range ones
pub(super) struct Recorder {
    width: u32,
    height: u32,
    pub writes: Vec<(i32, i32, Color)>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            writes: Vec::new(),
        }
    }

    /// Min and max X written on each row
    pub fn row_extents(&self) -> BTreeMap<i32, (i32, i32)> {
        let mut rows = BTreeMap::new();
        for &(x, y, _) in &self.writes {
            let entry = rows.entry(y).or_insert((x, x));
            entry.0 = entry.0.min(x);
            entry.1 = entry.1.max(x);
        }
        rows
    }

    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.writes
            .iter()
            .rev()
            .find(|&&(wx, wy, _)| wx == x && wy == y)
            .map(|&(_, _, c)| c)
    }
}

impl PixelTarget for Recorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.writes.push((x, y, color));
    }
}
