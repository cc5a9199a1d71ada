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

//! trirast entry point
//!
//! Builds a scene (from a file, the built-in default, or the interactive
//! prompt), rasterizes it into a pixel buffer, optionally writes a PNG, and
//! shows the result in a window unless running headless.

use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use trirast::core::config::Config;
use trirast::core::prompt::PromptSession;
use trirast::core::raster::{PixelBuffer, Rasterizer, RenderMode};
use trirast::core::scene::Scene;
use trirast::core::snapshot;
use trirast::{RasterError, Result};

/// Scene source selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Render the built-in two-triangle scene
    Default,
    /// Enter triangles at the prompt
    Custom,
}

#[derive(Debug, Parser)]
#[command(name = "trirast", version, about = "Software triangle rasterizer")]
struct Cli {
    /// Skip the mode question and use this mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Load triangles from a .toml or .json scene file
    #[arg(long, value_name = "FILE", conflicts_with = "mode")]
    scene: Option<PathBuf>,

    /// Config file (defaults to $TRIRAST_CONFIG, then trirast.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Buffer width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Buffer height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Draw triangle edges instead of filling
    #[arg(long)]
    wireframe: bool,

    /// Write the rendered buffer to this PNG file
    #[arg(long, value_name = "PNG")]
    output: Option<PathBuf>,

    /// Do not open a window
    #[arg(long)]
    headless: bool,
}

fn main() -> ExitCode {
    // .env is optional
    let dotenv = dotenvy::dotenv();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Ok(path) = dotenv {
        log::debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RasterError::InvalidMode(answer)) => {
            log::info!("Exiting after invalid mode selection {:?}", answer);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let display = &config.display;

    let scene = build_scene(&cli, display.width, display.height)?;

    let mut buffer =
        PixelBuffer::with_clear_color(display.width, display.height, config.render.clear_color);
    let rasterizer = Rasterizer::with_mode(config.render.mode);
    scene.render(&rasterizer, &mut buffer);

    log::info!(
        "Rendered {} triangle(s) into {}x{} buffer",
        scene.len(),
        buffer.width(),
        buffer.height()
    );

    if let Some(path) = &cli.output {
        snapshot::save_png(&buffer, path)?;
    }

    if cli.headless {
        return Ok(());
    }

    show(config, buffer)
}

/// Config from `--config` (must load), else the resolved default path (may
/// fall back), with command line overrides applied
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Config::resolve_path(None)),
    };

    if let Some(width) = cli.width {
        config.display.width = width;
    }
    if let Some(height) = cli.height {
        config.display.height = height;
    }
    if cli.wireframe {
        config.render.mode = RenderMode::Wireframe;
    }

    config.validate()?;
    Ok(config)
}

fn build_scene(cli: &Cli, width: u32, height: u32) -> Result<Scene> {
    if let Some(path) = &cli.scene {
        return Scene::load(path);
    }

    if cli.mode == Some(ModeArg::Default) {
        return Ok(Scene::default_scene());
    }

    let stdin = io::stdin();
    let mut session = PromptSession::new(stdin.lock(), io::stdout()).with_size(width, height);

    match cli.mode {
        Some(ModeArg::Custom) => session.read_custom_scene(),
        _ => session.run(),
    }
}

#[cfg(feature = "window")]
fn show(config: Config, buffer: PixelBuffer) -> Result<()> {
    use trirast::frontend::Application;
    use winit::event_loop::EventLoop;

    let event_loop = EventLoop::new()
        .map_err(|e| RasterError::Display(format!("Failed to create event loop: {}", e)))?;

    let mut app = Application::new(config, buffer);

    log::info!("Running event loop...");
    event_loop
        .run_app(&mut app)
        .map_err(|e| RasterError::Display(format!("Event loop failed: {}", e)))?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(not(feature = "window"))]
fn show(_config: Config, _buffer: PixelBuffer) -> Result<()> {
    log::warn!("Built without the window feature; use --output to save the image");
    Ok(())
}
