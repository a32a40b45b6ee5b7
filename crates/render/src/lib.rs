#![warn(missing_docs)]
//! Rendering facade and per-frame driver for the checklist scene.
//!
//! The GPU side is abstracted behind [`SceneRenderer`]; [`RecordingRenderer`]
//! is the in-process implementation used for headless runs and tests.

mod animation;
mod driver;
mod recording;

pub use animation::AnimationLoop;
pub use driver::{FrameDriver, FrameReport};
pub use recording::{RecordingRenderer, RenderedFrame, RenderedItem};

use anyhow::Result;
use archecklist_camera::Camera;
use archecklist_ui3d::{ItemVisual, Scene};
use serde::{Deserialize, Serialize};

/// Renderer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Device pixel ratio applied to the drawing buffer.
    pub pixel_ratio: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            pixel_ratio: 1.0,
        }
    }
}

impl RendererConfig {
    /// Drawing buffer size after applying the pixel ratio.
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        (
            (self.width as f32 * self.pixel_ratio).round() as u32,
            (self.height as f32 * self.pixel_ratio).round() as u32,
        )
    }
}

/// Draws a scene of checklist visuals from a camera.
pub trait SceneRenderer {
    /// Register a visual so its resources exist before the first draw.
    fn add(&mut self, visual: &ItemVisual);

    /// Window size changed.
    fn resize(&mut self, width: u32, height: u32);

    /// Draw the scene at the visuals' current positions.
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()>;
}
