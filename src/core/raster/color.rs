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

//! Packed RGBA color and linear color interpolation

use serde::{Deserialize, Serialize};

/// A 32-bit packed RGBA color
///
/// Channel layout (most significant byte first):
/// - Bits 24-31: Red
/// - Bits 16-23: Green
/// - Bits 8-15: Blue
/// - Bits 0-7: Alpha (0xFF is fully opaque)
///
/// # Examples
///
/// ```
/// use trirast::core::raster::Color;
///
/// let orange = Color::from_packed(0xFFA500FF);
/// assert_eq!(orange.r(), 0xFF);
/// assert_eq!(orange.g(), 0xA5);
/// assert_eq!(orange.b(), 0x00);
/// assert_eq!(orange.a(), 0xFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    /// Opaque black, the initial buffer contents
    pub const BLACK: Color = Color(0x000000FF);
    /// Opaque white, the fallback for unknown palette indices
    pub const WHITE: Color = Color(0xFFFFFFFF);

    /// Wrap an already packed `0xRRGGBBAA` value
    #[inline(always)]
    pub const fn from_packed(value: u32) -> Self {
        Self(value)
    }

    /// Pack four 8-bit channels
    ///
    /// # Examples
    ///
    /// ```
    /// use trirast::core::raster::Color;
    ///
    /// assert_eq!(Color::from_rgba(0xFF, 0, 0, 0xFF).packed(), 0xFF0000FF);
    /// ```
    #[inline(always)]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// The packed `0xRRGGBBAA` value
    #[inline(always)]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline(always)]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline(always)]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline(always)]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Channels in R, G, B, A byte order
    #[inline(always)]
    pub const fn to_rgba8(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Blend towards `other` by the fraction `t`
    ///
    /// Each channel is computed independently as `a + (b - a) * t` in `f32`
    /// and truncated toward zero. `t` is expected in `[0, 1]` and is not
    /// clamped; inside that range every channel stays within `[a, b]`, so the
    /// result can never leave `[0, 255]`.
    ///
    /// This is the only blending routine in the crate. The line tracer and the
    /// scanline filler both go through it, which keeps their output
    /// bit-for-bit consistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirast::core::raster::Color;
    ///
    /// let red = Color::from_packed(0xFF0000FF);
    /// let blue = Color::from_packed(0x0000FFFF);
    ///
    /// assert_eq!(red.interpolate(blue, 0.0), red);
    /// assert_eq!(red.interpolate(blue, 1.0), blue);
    /// assert_eq!(red.interpolate(blue, 0.5).packed(), 0x7F007FFF);
    /// ```
    #[inline]
    pub fn interpolate(self, other: Color, t: f32) -> Color {
        Color::from_rgba(
            lerp_channel(self.r(), other.r(), t),
            lerp_channel(self.g(), other.g(), t),
            lerp_channel(self.b(), other.b(), t),
            lerp_channel(self.a(), other.a(), t),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

#[inline(always)]
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let a = a as f32;
    let b = b as f32;
    (a + (b - a) * t) as u8
}
