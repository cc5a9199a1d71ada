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

//! PNG snapshots of the pixel buffer

use super::error::{RasterError, Result};
use super::raster::PixelBuffer;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Write the buffer to `path` as an 8-bit RGBA PNG
///
/// Alpha is written as stored, so a buffer cleared to opaque black stays
/// opaque in the file.
pub fn save_png(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    image::save_buffer_with_format(
        path,
        &buffer.to_rgba8(),
        buffer.width(),
        buffer.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| RasterError::Snapshot(format!("Failed to write {}: {}", path.display(), e)))?;

    log::info!(
        "Saved {}x{} snapshot to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}

/// `screenshot_<YYYYmmdd_HHMMSS>.png` inside `dir`
pub fn timestamped_path(dir: impl AsRef<Path>) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.as_ref().join(format!("screenshot_{}.png", stamp))
}
