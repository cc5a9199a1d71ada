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

//! Interactive scene prompt
//!
//! Text dialogue that asks whether to draw the built-in scene or to enter
//! triangles by hand. Input is read as whitespace-separated tokens, so answers
//! may be given one per line or several on one line.
//!
//! - Mode answers other than `1` or `2` end the session with
//!   [`RasterError::InvalidMode`]
//! - A token that is not a whole number re-asks the same field
//! - A collinear triangle is reported and asked for again
//! - End of input while a value is expected is
//!   [`RasterError::UnexpectedEndOfInput`]

use super::error::{RasterError, Result};
use super::raster::{Palette, Triangle, Vertex};
use super::scene::Scene;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Which scene the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMode {
    /// The built-in two-triangle scene
    Default,
    /// Triangles entered at the prompt
    Custom,
}

/// Prompt dialogue over any line-based input and output
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use trirast::core::prompt::PromptSession;
///
/// let mut output = Vec::new();
/// let mut session = PromptSession::new(Cursor::new("1\n"), &mut output);
///
/// let scene = session.run().unwrap();
/// assert_eq!(scene.len(), 2);
/// ```
pub struct PromptSession<R, W> {
    input: R,
    output: W,
    /// Tokens left over from the last line read
    pending: VecDeque<String>,
    /// Buffer size quoted in the coordinate hint
    size: (u32, u32),
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            size: (500, 500),
        }
    }

    /// Set the buffer size mentioned in the coordinate hint
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Run the whole dialogue and return the chosen scene
    pub fn run(&mut self) -> Result<Scene> {
        match self.select_mode()? {
            SceneMode::Default => {
                writeln!(self.output, "You have opted to render default triangles.")?;
                Ok(Scene::default_scene())
            }
            SceneMode::Custom => self.read_custom_scene(),
        }
    }

    /// Ask for default (1) or custom (2) mode
    pub fn select_mode(&mut self) -> Result<SceneMode> {
        writeln!(self.output, "Default Mode (1): Render default triangles")?;
        writeln!(self.output, "OR")?;
        writeln!(self.output, "Custom Mode (2): Draw your own!")?;
        writeln!(
            self.output,
            "Enter anything other than (1) or (2) and the program will exit."
        )?;
        self.output.flush()?;

        let answer = self.next_token()?;
        match answer.parse::<i64>() {
            Ok(1) => Ok(SceneMode::Default),
            Ok(2) => Ok(SceneMode::Custom),
            _ => {
                writeln!(
                    self.output,
                    "That was neither (1) nor (2). Terminating.\n"
                )?;
                Err(RasterError::InvalidMode(answer))
            }
        }
    }

    /// Ask for a triangle count and then every triangle
    ///
    /// A count of zero or less yields an empty scene.
    pub fn read_custom_scene(&mut self) -> Result<Scene> {
        let count: i64 = self.read_number("\n\nHow many triangles would you like to render? ")?;

        let (width, height) = self.size;
        writeln!(
            self.output,
            "\n\nNOTE: Valid coordinates are between (0, 0) and ({}, {}).",
            width.saturating_sub(1),
            height.saturating_sub(1)
        )?;
        writeln!(self.output, "(0, 0) is the top-left most pixel.")?;
        writeln!(
            self.output,
            "You can draw vertices outside of these bounds, see what happens!\n"
        )?;

        let mut triangles = Vec::new();
        let mut number = 1;
        while number <= count {
            writeln!(self.output, "\n=== Triangle {} ===", number)?;
            let triangle = self.read_triangle()?;

            if triangle.is_collinear() {
                log::warn!("Rejected collinear triangle {}", number);
                writeln!(
                    self.output,
                    "ERROR: Vertices are collinear (form a line, not a triangle)"
                )?;
                writeln!(
                    self.output,
                    "Triangle {} is invalid. Please try again.",
                    number
                )?;
                continue;
            }

            triangles.push(triangle);
            writeln!(self.output, "Triangle {} added successfully!", number)?;
            number += 1;
        }

        Scene::new(triangles)
    }

    /// Ask for the three vertices of one triangle
    pub fn read_triangle(&mut self) -> Result<Triangle> {
        let v0 = self.read_vertex(1)?;
        let v1 = self.read_vertex(2)?;
        let v2 = self.read_vertex(3)?;
        Ok(Triangle::new(v0, v1, v2))
    }

    fn read_vertex(&mut self, number: usize) -> Result<Vertex> {
        writeln!(self.output, "Vertex {}:", number)?;
        let x = self.read_number(" x: ")?;
        let y = self.read_number(" y: ")?;
        let index: i64 = self.read_number(&format!(" color ({}): ", palette_menu()))?;

        Ok(Vertex::new(x, y, Palette::from_index(index).color()))
    }

    /// Prompt until a token parses as `T`
    fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let token = self.next_token()?;
            match token.parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    // Drop the rest of the line so the retry starts clean
                    self.pending.clear();
                    writeln!(self.output, "'{}' is not a whole number, try again.", token)?;
                }
            }
        }
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(RasterError::UnexpectedEndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// "1=Red, 2=Green, ..." for the color question
fn palette_menu() -> String {
    Palette::SELECTABLE
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}={}", i + 1, entry))
        .collect::<Vec<_>>()
        .join(", ")
}
