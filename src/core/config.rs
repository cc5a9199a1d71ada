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

//! Configuration
//!
//! Settings are stored as TOML. Every section and field has a default, so a
//! partial file (or no file at all) is valid:
//!
//! ```toml
//! [display]
//! width = 500
//! height = 500
//! title = "Triangle Rasterizer"
//! target_fps = 60
//! scale = 1
//!
//! [render]
//! mode = "filled"          # or "wireframe"
//! clear_color = 0x000000FF
//!
//! [hotkeys]
//! Escape = "exit"
//! F11 = "toggle_fullscreen"
//! F12 = "screenshot"
//! ```
//!
//! Hotkey names are winit `KeyCode` variant names; they are resolved by the
//! window frontend, so unknown names only produce a warning there.

use super::error::{RasterError, Result};
use super::raster::{Color, RenderMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name used when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "trirast.toml";

/// Environment variable that overrides the config path
pub const CONFIG_ENV_VAR: &str = "TRIRAST_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub render: RenderConfig,
    /// Key name → action
    pub hotkeys: HashMap<String, HotkeyAction>,
}

/// Buffer size and window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pixel buffer width
    pub width: u32,
    /// Pixel buffer height
    pub height: u32,
    /// Window title
    pub title: String,
    /// Presentation rate
    pub target_fps: u32,
    /// Initial window size as a multiple of the buffer size
    pub scale: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            title: "Triangle Rasterizer".to_string(),
            target_fps: 60,
            scale: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub mode: RenderMode,
    /// Color the buffer starts out with
    pub clear_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Filled,
            clear_color: Color::BLACK,
        }
    }
}

/// Actions that can be bound to a key in the window frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    Exit,
    Screenshot,
    ToggleFullscreen,
}

/// Default key bindings (Escape, F11, F12)
pub fn default_hotkeys() -> HashMap<String, HotkeyAction> {
    HashMap::from([
        ("Escape".to_string(), HotkeyAction::Exit),
        ("F11".to_string(), HotkeyAction::ToggleFullscreen),
        ("F12".to_string(), HotkeyAction::Screenshot),
    ])
}

impl Config {
    /// Default configuration with the default hotkeys filled in
    pub fn default_config() -> Self {
        Self {
            hotkeys: default_hotkeys(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    ///
    /// A missing `[hotkeys]` table gets the default bindings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RasterError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut config: Config = toml::from_str(&contents).map_err(|e| {
            RasterError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if config.hotkeys.is_empty() {
            config.hotkeys = default_hotkeys();
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| RasterError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            log::info!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return Self::default_config();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default config ({})", e);
                Self::default_config()
            }
        }
    }

    /// Pick the config path: explicit argument, then `TRIRAST_CONFIG`, then
    /// [`DEFAULT_CONFIG_FILE`]
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> Result<()> {
        let display = &self.display;

        if display.width == 0 || display.height == 0 {
            return Err(RasterError::Config(format!(
                "Buffer size must be non-zero, got {}x{}",
                display.width, display.height
            )));
        }
        if display.target_fps == 0 {
            return Err(RasterError::Config("target_fps must be at least 1".into()));
        }
        if display.scale == 0 {
            return Err(RasterError::Config("scale must be at least 1".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default_config();
        assert_eq!(config.display.width, 500);
        assert_eq!(config.display.height, 500);
        assert_eq!(config.display.target_fps, 60);
        assert_eq!(config.render.mode, RenderMode::Filled);
        assert_eq!(config.render.clear_color.packed(), 0x000000FF);
        assert_eq!(config.hotkeys.get("F12"), Some(&HotkeyAction::Screenshot));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[render]\nmode = \"wireframe\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.render.mode, RenderMode::Wireframe);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.hotkeys, default_hotkeys());
    }

    #[test]
    fn test_hex_clear_color() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("color.toml");
        std::fs::write(&path, "[render]\nclear_color = 0x202020FF\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.render.clear_color.packed(), 0x202020FF);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trirast.toml");

        let mut config = Config::default_config();
        config.display.width = 320;
        config.display.title = "Preview".to_string();
        config
            .hotkeys
            .insert("KeyQ".to_string(), HotkeyAction::Exit);
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_zero_size_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display]\nwidth = 0\n").unwrap();

        assert!(matches!(Config::load(&path), Err(RasterError::Config(_))));
    }

    #[test]
    fn test_unknown_action_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[hotkeys]\nF1 = \"explode\"\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config, Config::default_config());
    }

    #[test]
    fn test_load_or_default_on_broken_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[display\nwidth = ").unwrap();

        assert_eq!(Config::load_or_default(&path), Config::default_config());
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Config::resolve_path(Some(Path::new("custom.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
    }
}
