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

//! Window application
//!
//! Presents a finished pixel buffer in a window. The buffer is rendered once
//! before the window opens; the window only shows it, re-uploading when the
//! surface is recreated, until the user closes the window or presses the exit
//! hotkey.

use crate::core::config::{Config, HotkeyAction};
use crate::core::error::{RasterError, Result};
use crate::core::raster::PixelBuffer;
use crate::core::snapshot;
use crate::frontend::frame_pacer::FramePacer;
use crate::frontend::hotkeys::HotkeyMap;
use crate::frontend::renderer::{DisplayRenderer, RenderContext};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

/// Window application
///
/// # Example
///
/// ```no_run
/// use winit::event_loop::EventLoop;
/// use trirast::core::config::Config;
/// use trirast::core::raster::{PixelBuffer, Rasterizer};
/// use trirast::core::scene::Scene;
/// use trirast::frontend::Application;
///
/// let mut buffer = PixelBuffer::new(500, 500);
/// Scene::default_scene().render(&Rasterizer::new(), &mut buffer);
///
/// let event_loop = EventLoop::new().unwrap();
/// let mut app = Application::new(Config::default_config(), buffer);
/// event_loop.run_app(&mut app).unwrap();
/// ```
pub struct Application {
    config: Config,
    /// The image being shown
    buffer: PixelBuffer,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    display_renderer: Option<DisplayRenderer>,
    hotkeys: HotkeyMap,
    pacer: FramePacer,
    /// Where screenshot hotkey files go
    screenshot_dir: PathBuf,
    exit_requested: bool,
    /// Fatal error that stopped the event loop
    error: Option<RasterError>,
}

impl Application {
    /// Create an application showing `buffer`
    pub fn new(config: Config, buffer: PixelBuffer) -> Self {
        let hotkeys = HotkeyMap::from_config(&config.hotkeys);
        let pacer = FramePacer::new(config.display.target_fps);

        Self {
            config,
            buffer,
            window: None,
            render_context: None,
            display_renderer: None,
            hotkeys,
            pacer,
            screenshot_dir: PathBuf::from("."),
            exit_requested: false,
            error: None,
        }
    }

    /// Directory for screenshots (the working directory by default)
    pub fn with_screenshot_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.screenshot_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Take the error that ended the event loop, if any
    pub fn take_error(&mut self) -> Option<RasterError> {
        self.error.take()
    }

    /// Switch between windowed and borderless fullscreen
    pub fn toggle_fullscreen(&self) {
        if let Some(window) = &self.window {
            if window.fullscreen().is_some() {
                window.set_fullscreen(None);
                log::info!("Switched to windowed mode");
            } else {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                log::info!("Switched to fullscreen mode");
            }
        }
    }

    /// Save the buffer as a timestamped PNG
    pub fn save_screenshot(&self) -> Result<PathBuf> {
        let path = snapshot::timestamped_path(&self.screenshot_dir);
        snapshot::save_png(&self.buffer, &path)?;
        Ok(path)
    }

    fn handle_action(&mut self, action: HotkeyAction) {
        match action {
            HotkeyAction::Exit => {
                log::info!("Exit hotkey pressed");
                self.exit_requested = true;
            }
            HotkeyAction::ToggleFullscreen => self.toggle_fullscreen(),
            HotkeyAction::Screenshot => {
                if let Err(e) = self.save_screenshot() {
                    log::warn!("Screenshot failed: {}", e);
                }
            }
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RasterError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    /// Create the window, wgpu context and display renderer
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let display = &self.config.display;
        let window_attributes = Window::default_attributes()
            .with_title(display.title.clone())
            .with_inner_size(PhysicalSize::new(
                display.width.saturating_mul(display.scale),
                display.height.saturating_mul(display.scale),
            ))
            .with_resizable(true);

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .map_err(|e| RasterError::Display(format!("Failed to create window: {}", e)))?,
        );

        let render_context = pollster::block_on(RenderContext::new(&window))?;
        let display_renderer = DisplayRenderer::new(
            &render_context.device,
            render_context.surface_config.format,
            (self.buffer.width(), self.buffer.height()),
        );

        self.window = Some(window);
        self.render_context = Some(render_context);
        self.display_renderer = Some(display_renderer);

        log::info!("Window opened");
        Ok(())
    }

    /// Draw the buffer to the window and present it
    fn render(&mut self) -> Result<()> {
        let not_ready = || RasterError::Display("Renderer not initialized".into());
        let render_context = self.render_context.as_mut().ok_or_else(not_ready)?;
        let display_renderer = self.display_renderer.as_mut().ok_or_else(not_ready)?;

        // Get the next frame, handling common surface errors gracefully
        let output = match render_context.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let (width, height) = render_context.size();
                render_context.resize(width, height);
                display_renderer.mark_dirty();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout while acquiring frame");
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(RasterError::Display(
                    "Surface out of memory while acquiring frame".into(),
                ));
            }
            Err(e) => {
                return Err(RasterError::Display(format!(
                    "Failed to get surface texture: {:?}",
                    e
                )));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            render_context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });

        display_renderer.render(
            &mut encoder,
            &view,
            &self.buffer,
            render_context.size(),
            &render_context.device,
            &render_context.queue,
        );

        render_context
            .queue
            .submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                self.exit_requested = true;
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(render_context) = &mut self.render_context {
                    render_context.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() && !event.repeat {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if let Some(action) = self.hotkeys.action_for(key_code) {
                            self.handle_action(action);
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    self.fail(event_loop, e);
                    return;
                }
            }
            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.pacer.is_due(now) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.pacer.mark_presented(now);
        }

        // Wake up for the next present instead of busy-waiting
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_due()));
    }
}
