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

//! Error types
//!
//! The rasterization path itself never fails: out-of-bounds writes are dropped
//! and degenerate triangles render nothing. Errors only arise at the edges of
//! the system (configuration, scene input, snapshot export, window setup).

use thiserror::Error;

/// Errors produced outside the rasterization path
#[derive(Debug, Error)]
pub enum RasterError {
    /// Underlying I/O failure (reading input, writing files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scene file could not be read or parsed
    #[error("Scene error: {0}")]
    Scene(String),

    /// A supplied triangle has zero area
    ///
    /// `index` is the zero-based position of the triangle in its source.
    #[error("Triangle {index} is invalid: vertices are collinear")]
    CollinearTriangle { index: usize },

    /// The mode selection answer was neither default nor custom
    #[error("Invalid mode selection: {0:?}")]
    InvalidMode(String),

    /// The input stream ended while a value was still expected
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    /// PNG export failed
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Window or GPU presentation setup failed
    #[error("Display error: {0}")]
    Display(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, RasterError>;
