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

//! Fixed vertex color palette
//!
//! Vertex colors can only be chosen from this palette. Palette entries are
//! resolved to packed colors once, when input is validated, and the
//! rasterizer only ever sees [`Color`] values.

use super::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named vertex colors (all fully opaque)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Red,
    Green,
    Blue,
    Orange,
    Gold,
    Pink,
    /// Fallback for indices outside the selectable range
    White,
}

impl Palette {
    /// The six selectable entries, in prompt order (index 1 through 6)
    pub const SELECTABLE: [Palette; 6] = [
        Palette::Red,
        Palette::Green,
        Palette::Blue,
        Palette::Orange,
        Palette::Gold,
        Palette::Pink,
    ];

    /// Resolve a one-based prompt index
    ///
    /// Indices 1 through 6 select Red, Green, Blue, Orange, Gold and Pink.
    /// Anything else resolves to [`Palette::White`] rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirast::core::raster::Palette;
    ///
    /// assert_eq!(Palette::from_index(3), Palette::Blue);
    /// assert_eq!(Palette::from_index(0), Palette::White);
    /// assert_eq!(Palette::from_index(42), Palette::White);
    /// ```
    pub fn from_index(index: i64) -> Self {
        match index {
            1..=6 => Self::SELECTABLE[(index - 1) as usize],
            _ => Palette::White,
        }
    }

    /// Packed color value for this entry
    pub const fn color(self) -> Color {
        match self {
            Palette::Red => Color::from_packed(0xFF0000FF),
            Palette::Green => Color::from_packed(0x00FF00FF),
            Palette::Blue => Color::from_packed(0x0000FFFF),
            Palette::Orange => Color::from_packed(0xFFA500FF),
            Palette::Gold => Color::from_packed(0xFFD700FF),
            Palette::Pink => Color::from_packed(0xFFC0CBFF),
            Palette::White => Color::WHITE,
        }
    }

    /// Human readable name, as shown in the prompt
    pub const fn name(self) -> &'static str {
        match self {
            Palette::Red => "Red",
            Palette::Green => "Green",
            Palette::Blue => "Blue",
            Palette::Orange => "Orange",
            Palette::Gold => "Gold",
            Palette::Pink => "Pink",
            Palette::White => "White",
        }
    }
}

impl From<Palette> for Color {
    fn from(entry: Palette) -> Self {
        entry.color()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_indices() {
        assert_eq!(Palette::from_index(1), Palette::Red);
        assert_eq!(Palette::from_index(2), Palette::Green);
        assert_eq!(Palette::from_index(3), Palette::Blue);
        assert_eq!(Palette::from_index(4), Palette::Orange);
        assert_eq!(Palette::from_index(5), Palette::Gold);
        assert_eq!(Palette::from_index(6), Palette::Pink);
    }

    #[test]
    fn test_out_of_range_index_is_white() {
        for index in [-1, 0, 7, i64::MAX, i64::MIN] {
            assert_eq!(Palette::from_index(index), Palette::White);
            assert_eq!(Palette::from_index(index).color().packed(), 0xFFFFFFFF);
        }
    }

    #[test]
    fn test_all_entries_fully_opaque() {
        for entry in Palette::SELECTABLE {
            assert_eq!(entry.color().a(), 0xFF, "{} must be opaque", entry);
        }
    }

    #[test]
    fn test_packed_values() {
        assert_eq!(Palette::Red.color().packed(), 0xFF0000FF);
        assert_eq!(Palette::Green.color().packed(), 0x00FF00FF);
        assert_eq!(Palette::Blue.color().packed(), 0x0000FFFF);
        assert_eq!(Palette::Orange.color().packed(), 0xFFA500FF);
        assert_eq!(Palette::Gold.color().packed(), 0xFFD700FF);
        assert_eq!(Palette::Pink.color().packed(), 0xFFC0CBFF);
    }

    #[test]
    fn test_deserialize_lowercase_names() {
        #[derive(Deserialize)]
        struct Holder {
            color: Palette,
        }

        let holder: Holder = toml::from_str("color = \"gold\"").unwrap();
        assert_eq!(holder.color, Palette::Gold);
        assert!(toml::from_str::<Holder>("color = \"teal\"").is_err());
    }
}
