//! World-space checklist panels.
//!
//! Each checklist item becomes an [`ItemVisual`]: a colored panel with a
//! checkbox indicator and a text label. Visuals live in a [`Scene`] in
//! checklist order and are restacked in front of the viewer every frame by
//! [`layout::VerticalStack`].
//!
//! # Example
//!
//! ```rust
//! use archecklist_core::{ChecklistSource, DemoChecklistSource};
//! use archecklist_ui3d::{layout::VerticalStack, ItemStyle, Lighting, Scene};
//! use glam::Vec3;
//!
//! let checklist = DemoChecklistSource.checklist();
//! let layout = VerticalStack::default();
//! let mut scene = Scene::build(&checklist, &ItemStyle::default(), &layout, Lighting::default());
//!
//! // In your frame callback:
//! layout.apply(Vec3::new(0.0, 1.6, 0.0), scene.items_mut().iter_mut());
//! ```

pub mod components;
pub mod layout;
pub mod scene;

// Re-export commonly used types
pub use components::{
    rgba_from_hex, Box3D, BoxMesh, BoxVertex, ItemStyle, ItemVisual, Text3D, Transform3D,
    UIComponent,
};
pub use layout::VerticalStack;
pub use scene::{ItemSequence, Light, Lighting, Scene};
