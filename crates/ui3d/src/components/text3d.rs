//! 3D Text Component

use super::{Transform3D, UIComponent};
use glam::Vec3;

/// Text label placed in 3D space. Glyph rasterization belongs to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Text3D {
    /// Position of the text (relative to its parent visual)
    pub transform: Transform3D,

    /// Text content
    pub text: String,

    /// Font size in world units
    pub font_size: f32,

    /// Text color (RGBA)
    pub color: [f32; 4],
}

impl Default for Text3D {
    fn default() -> Self {
        Self {
            transform: Transform3D::default(),
            text: String::new(),
            font_size: 0.06,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl Text3D {
    /// Create a new Text3D component
    pub fn new(position: Vec3, text: impl Into<String>) -> Self {
        Self {
            transform: Transform3D::new(position),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Builder: Set font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Builder: Set color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Get a reference to the text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl UIComponent for Text3D {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }
}
