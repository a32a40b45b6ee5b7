//! 3D UI Components
//!
//! Primitive shapes and the composite checklist item built from them.

pub mod box3d;
pub mod item_visual;
pub mod text3d;

pub use box3d::{Box3D, BoxMesh, BoxVertex};
pub use item_visual::{ItemStyle, ItemVisual};
pub use text3d::Text3D;

use glam::Vec3;

/// Base trait for anything placed in the scene.
pub trait UIComponent {
    /// Position of this component (world space for top-level visuals,
    /// parent-relative for parts).
    fn position(&self) -> Vec3;

    /// Replace the position.
    fn set_position(&mut self, position: Vec3);
}

/// Transform in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: glam::Quat,
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: glam::Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3D {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Map a point from this transform's local space to its parent's space.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * (local * self.scale)
    }
}

/// Convert a `0xRRGGBB` color into opaque linear RGBA.
pub fn rgba_from_hex(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0), 1.0]
}
