//! Checklist item panel: a colored box with a checkbox and a text label.

use super::{rgba_from_hex, Box3D, BoxMesh, Text3D, Transform3D, UIComponent};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Font size of the item label, in world units.
pub const LABEL_FONT_SIZE: f32 = 0.06;

/// Gap between the panel front face and the label, avoids z-fighting.
const LABEL_GAP: f32 = 0.001;

/// Checkbox center relative to the panel center.
const CHECKBOX_OFFSET_X: f32 = 0.31;

const CHECKBOX_FRAME_COLOR: u32 = 0x0165a1;
const CHECKBOX_FACE_COLOR: u32 = 0xffffff;

/// Dimensions and color used for every item panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStyle {
    /// Panel width in meters.
    pub width: f32,
    /// Panel height in meters.
    pub height: f32,
    /// Panel depth in meters.
    pub depth: f32,
    /// Panel color as `0xRRGGBB`.
    pub color: u32,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            width: 0.5,
            height: 0.1,
            depth: 0.01,
            color: 0x0165a1,
        }
    }
}

impl ItemStyle {
    /// Build a visual with this style.
    pub fn build(&self, label: impl Into<String>, position: Vec3) -> ItemVisual {
        ItemVisual::new(
            label,
            self.width,
            self.height,
            self.depth,
            rgba_from_hex(self.color),
            position,
        )
    }
}

/// Renderable representation of one checklist item.
///
/// The only mutation after construction is [`UIComponent::set_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemVisual {
    label: String,
    color: [f32; 4],
    transform: Transform3D,
    panel: Box3D,
    text: Text3D,
    checkbox_frame: Box3D,
    checkbox_face: Box3D,
}

impl ItemVisual {
    /// Build the composite. Dimensions are passed through unvalidated.
    pub fn new(
        label: impl Into<String>,
        width: f32,
        height: f32,
        depth: f32,
        color: [f32; 4],
        position: Vec3,
    ) -> Self {
        let label = label.into();

        let panel = Box3D::new(Vec3::ZERO, width, height, depth).with_color(color);
        let text = Text3D::new(Vec3::new(0.0, 0.0, depth + LABEL_GAP), label.clone())
            .with_font_size(LABEL_FONT_SIZE);
        let checkbox_frame = Box3D::new(Vec3::new(CHECKBOX_OFFSET_X, 0.0, -0.01), 0.1, 0.1, 0.01)
            .with_color(rgba_from_hex(CHECKBOX_FRAME_COLOR));
        // Sits in front of the frame so the frame reads as a border.
        let checkbox_face = Box3D::new(Vec3::new(CHECKBOX_OFFSET_X, 0.0, 0.0), 0.08, 0.08, 0.01)
            .with_color(rgba_from_hex(CHECKBOX_FACE_COLOR));

        Self {
            label,
            color,
            transform: Transform3D::new(position),
            panel,
            text,
            checkbox_frame,
            checkbox_face,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Bounding size of the panel (width, height, depth).
    pub fn size(&self) -> Vec3 {
        self.panel.size
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn panel(&self) -> &Box3D {
        &self.panel
    }

    pub fn text(&self) -> &Text3D {
        &self.text
    }

    pub fn checkbox_frame(&self) -> &Box3D {
        &self.checkbox_frame
    }

    pub fn checkbox_face(&self) -> &Box3D {
        &self.checkbox_face
    }

    /// All boxes, back to front.
    pub fn boxes(&self) -> [&Box3D; 3] {
        [&self.panel, &self.checkbox_frame, &self.checkbox_face]
    }

    /// World position of a part of this visual.
    pub fn world_position_of(&self, part: &impl UIComponent) -> Vec3 {
        self.transform.transform_point(part.position())
    }

    /// World-space meshes for every box of this visual.
    pub fn meshes(&self) -> Vec<BoxMesh> {
        self.boxes()
            .into_iter()
            .map(|b| b.generate_mesh(self.world_position_of(b)))
            .collect()
    }
}

impl UIComponent for ItemVisual {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }
}
