use std::collections::VecDeque;

use anyhow::{ensure, Result};
use archecklist_camera::Camera;
use archecklist_ui3d::{ItemVisual, Scene, UIComponent};
use glam::Vec3;

use crate::{RendererConfig, SceneRenderer};

/// Default number of frames kept by [`RecordingRenderer`].
const DEFAULT_HISTORY: usize = 256;

/// One visual as it was drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem {
    /// Panel label.
    pub label: String,
    /// World position at draw time.
    pub position: Vec3,
}

/// Snapshot of one draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    /// Zero-based draw index.
    pub index: u64,
    /// Drawing buffer size in pixels.
    pub viewport: (u32, u32),
    /// Camera position used for the draw.
    pub camera_position: Vec3,
    /// Camera aspect ratio used for the draw.
    pub camera_aspect: f32,
    /// Visuals in scene order.
    pub items: Vec<RenderedItem>,
    /// Triangles submitted for all box meshes.
    pub triangles: usize,
    /// Number of lights in the scene.
    pub lights: usize,
}

/// Renderer that records what it would draw instead of touching a GPU.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    config: RendererConfig,
    registered: Vec<String>,
    frames: VecDeque<RenderedFrame>,
    history: usize,
    draws: u64,
}

impl RecordingRenderer {
    /// Construct a renderer with the supplied config.
    pub fn new(config: RendererConfig) -> Self {
        tracing::info!(?config, "recording renderer initialized");
        Self {
            config,
            registered: Vec::new(),
            frames: VecDeque::new(),
            history: DEFAULT_HISTORY,
            draws: 0,
        }
    }

    /// Builder: number of most recent frames to keep.
    pub fn with_history(mut self, frames: usize) -> Self {
        self.history = frames.max(1);
        self
    }

    /// Access the current configuration.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Labels of visuals registered through [`SceneRenderer::add`], in order.
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> impl Iterator<Item = &RenderedFrame> {
        self.frames.iter()
    }

    /// Most recent frame.
    pub fn last_frame(&self) -> Option<&RenderedFrame> {
        self.frames.back()
    }

    /// Total number of draws since construction.
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl SceneRenderer for RecordingRenderer {
    fn add(&mut self, visual: &ItemVisual) {
        tracing::debug!(label = visual.label(), "registered visual");
        self.registered.push(visual.label().to_string());
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        tracing::debug!(width, height, "viewport resized");
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        ensure!(
            scene.items().len() <= self.registered.len(),
            "scene has {} visuals but only {} were added to the renderer",
            scene.items().len(),
            self.registered.len()
        );

        let mut triangles = 0;
        let items = scene
            .items()
            .iter()
            .map(|visual| {
                triangles += visual
                    .meshes()
                    .iter()
                    .map(|mesh| mesh.indices.len() / 3)
                    .sum::<usize>();
                RenderedItem {
                    label: visual.label().to_string(),
                    position: visual.position(),
                }
            })
            .collect();

        let frame = RenderedFrame {
            index: self.draws,
            viewport: self.config.drawing_buffer_size(),
            camera_position: camera.position,
            camera_aspect: camera.aspect,
            items,
            triangles,
            lights: scene.lights().len(),
        };

        if self.frames.len() == self.history {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
        self.draws += 1;
        Ok(())
    }
}
