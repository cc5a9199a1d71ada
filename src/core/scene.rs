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

//! Scenes
//!
//! A scene is an ordered list of validated triangles. Triangles are drawn in
//! list order, so later triangles overwrite earlier ones where they overlap.
//!
//! # File Format
//!
//! Scene files are TOML or JSON (chosen by extension). Vertex colors are
//! palette names:
//!
//! ```toml
//! [[triangles]]
//! vertices = [
//!     { x = 250, y = 100, color = "red" },
//!     { x = 100, y = 400, color = "green" },
//!     { x = 400, y = 400, color = "blue" },
//! ]
//! ```
//!
//! Collinear triangles are rejected with
//! [`RasterError::CollinearTriangle`] naming the zero-based triangle index.

use super::error::{RasterError, Result};
use super::raster::{Palette, PixelTarget, Rasterizer, Triangle, Vertex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Vertex as written in a scene file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneVertex {
    pub x: i32,
    pub y: i32,
    pub color: Palette,
}

impl From<SceneVertex> for Vertex {
    fn from(v: SceneVertex) -> Self {
        Vertex::new(v.x, v.y, v.color.color())
    }
}

/// Triangle as written in a scene file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneTriangle {
    pub vertices: [SceneVertex; 3],
}

/// Serialized scene layout
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub triangles: Vec<SceneTriangle>,
}

/// A list of non-degenerate triangles ready to draw
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    triangles: Vec<Triangle>,
}

impl Scene {
    /// Build a scene, rejecting the first collinear triangle
    pub fn new(triangles: Vec<Triangle>) -> Result<Self> {
        if let Some(index) = triangles.iter().position(Triangle::is_collinear) {
            return Err(RasterError::CollinearTriangle { index });
        }
        Ok(Self { triangles })
    }

    /// The built-in two-triangle scene
    ///
    /// A red/green/blue triangle and an orange/gold/pink triangle.
    pub fn default_scene() -> Self {
        let vertex = |x, y, color: Palette| Vertex::new(x, y, color.color());

        Self {
            triangles: vec![
                Triangle::new(
                    vertex(250, 100, Palette::Red),
                    vertex(100, 400, Palette::Green),
                    vertex(400, 400, Palette::Blue),
                ),
                Triangle::new(
                    vertex(100, 50, Palette::Orange),
                    vertex(50, 200, Palette::Gold),
                    vertex(200, 150, Palette::Pink),
                ),
            ],
        }
    }

    /// Parse a TOML scene
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: SceneFile = toml::from_str(source)
            .map_err(|e| RasterError::Scene(format!("Failed to parse TOML scene: {}", e)))?;
        Self::try_from(file)
    }

    /// Parse a JSON scene
    pub fn from_json_str(source: &str) -> Result<Self> {
        let file: SceneFile = serde_json::from_str(source)
            .map_err(|e| RasterError::Scene(format!("Failed to parse JSON scene: {}", e)))?;
        Self::try_from(file)
    }

    /// Load a scene file, picking the parser from the extension
    ///
    /// `.json` files are parsed as JSON, `.toml` files as TOML. Any other
    /// extension is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(RasterError::Scene(format!(
                    "Unsupported scene file {} (expected .toml or .json)",
                    path.display()
                )));
            }
        };

        let source = std::fs::read_to_string(path)?;
        let scene = parse(&source)?;

        log::info!(
            "Loaded {} triangle(s) from {}",
            scene.len(),
            path.display()
        );
        Ok(scene)
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Draw every triangle in order
    pub fn render<T>(&self, rasterizer: &Rasterizer, target: &mut T)
    where
        T: PixelTarget + ?Sized,
    {
        log::debug!(
            "Rendering {} triangle(s) in {:?} mode",
            self.triangles.len(),
            rasterizer.mode()
        );

        for triangle in &self.triangles {
            rasterizer.draw_triangle(target, triangle);
        }
    }
}

impl TryFrom<SceneFile> for Scene {
    type Error = RasterError;

    fn try_from(file: SceneFile) -> Result<Self> {
        let triangles = file
            .triangles
            .into_iter()
            .map(|t| Triangle::from(t.vertices.map(Vertex::from)))
            .collect();
        Self::new(triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::raster::{Color, PixelBuffer};
    use tempfile::tempdir;

    const RGB_SCENE: &str = r#"
[[triangles]]
vertices = [
    { x = 250, y = 100, color = "red" },
    { x = 100, y = 400, color = "green" },
    { x = 400, y = 400, color = "blue" },
]
"#;

    #[test]
    fn test_default_scene_contents() {
        let scene = Scene::default_scene();
        assert_eq!(scene.len(), 2);

        let [a, b, c] = scene.triangles()[1].vertices;
        assert_eq!((a.x, a.y, a.color), (100, 50, Palette::Orange.color()));
        assert_eq!((b.x, b.y, b.color), (50, 200, Palette::Gold.color()));
        assert_eq!((c.x, c.y, c.color), (200, 150, Palette::Pink.color()));
    }

    #[test]
    fn test_default_scene_has_no_degenerate_triangles() {
        let scene = Scene::default_scene();
        assert!(Scene::new(scene.triangles().to_vec()).is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let scene = Scene::from_toml_str(RGB_SCENE).unwrap();
        assert_eq!(scene, Scene::new(vec![Scene::default_scene().triangles()[0]]).unwrap());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"triangles": [{"vertices": [
            {"x": 0, "y": 0, "color": "gold"},
            {"x": 10, "y": 0, "color": "pink"},
            {"x": 0, "y": 10, "color": "orange"}
        ]}]}"#;

        let scene = Scene::from_json_str(json).unwrap();
        assert_eq!(scene.triangles()[0].vertices[0].color, Palette::Gold.color());
    }

    #[test]
    fn test_collinear_triangle_is_named() {
        let source = format!(
            "{}\n{}",
            RGB_SCENE,
            r#"
[[triangles]]
vertices = [
    { x = 0, y = 0, color = "red" },
    { x = 1, y = 1, color = "red" },
    { x = 2, y = 2, color = "red" },
]
"#
        );

        match Scene::from_toml_str(&source) {
            Err(RasterError::CollinearTriangle { index }) => assert_eq!(index, 1),
            other => panic!("expected collinear error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_color_name() {
        let source = RGB_SCENE.replace("\"blue\"", "\"teal\"");
        assert!(matches!(
            Scene::from_toml_str(&source),
            Err(RasterError::Scene(_))
        ));
    }

    #[test]
    fn test_wrong_vertex_count() {
        let json = r#"{"triangles": [{"vertices": [
            {"x": 0, "y": 0, "color": "red"},
            {"x": 1, "y": 5, "color": "red"}
        ]}]}"#;
        assert!(Scene::from_json_str(json).is_err());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();
        let toml_path = dir.path().join("scene.toml");
        std::fs::write(&toml_path, RGB_SCENE).unwrap();
        assert_eq!(Scene::load(&toml_path).unwrap().len(), 1);

        let other = dir.path().join("scene.yaml");
        std::fs::write(&other, RGB_SCENE).unwrap();
        assert!(matches!(Scene::load(&other), Err(RasterError::Scene(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            Scene::load(dir.path().join("nope.toml")),
            Err(RasterError::Io(_))
        ));
    }

    #[test]
    fn test_later_triangles_draw_on_top() {
        let red = Palette::Red.color();
        let blue = Palette::Blue.color();
        let scene = Scene::new(vec![
            Triangle::new(
                Vertex::new(0, 0, red),
                Vertex::new(20, 0, red),
                Vertex::new(0, 20, red),
            ),
            Triangle::new(
                Vertex::new(0, 0, blue),
                Vertex::new(20, 0, blue),
                Vertex::new(0, 20, blue),
            ),
        ])
        .unwrap();

        let mut buffer = PixelBuffer::new(32, 32);
        scene.render(&Rasterizer::new(), &mut buffer);

        assert_eq!(buffer.get_pixel(2, 2), Some(blue));
        assert_eq!(buffer.get_pixel(30, 30), Some(Color::BLACK));
    }
}
