//! 3D UI Layout System
//!
//! Positions checklist visuals as a vertical stack in front of an anchor
//! point (the tracked viewer position).

use crate::components::UIComponent;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Vertical list of fixed-height slots anchored to the viewer.
///
/// Item `i` lands at `(anchor.x, anchor.y + start_offset - i * step,
/// anchor.z - forward_distance)`. Facing direction is ignored, and no state
/// is kept between passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalStack {
    /// Height of the first slot above the anchor, in meters.
    pub start_offset: f32,
    /// Vertical distance between consecutive slots.
    pub step: f32,
    /// Distance along -Z from the anchor.
    pub forward_distance: f32,
}

impl Default for VerticalStack {
    fn default() -> Self {
        Self {
            start_offset: 2.0,
            step: 0.15,
            forward_distance: 1.0,
        }
    }
}

impl VerticalStack {
    /// Slot positions for `anchor`, in stacking order. Unbounded.
    pub fn targets(&self, anchor: Vec3) -> impl Iterator<Item = Vec3> {
        let step = self.step;
        let z = anchor.z - self.forward_distance;
        std::iter::successors(Some(self.start_offset), move |offset| Some(offset - step))
            .map(move |offset| Vec3::new(anchor.x, anchor.y + offset, z))
    }

    /// Move every item to its slot. Returns how many items were placed.
    pub fn apply<'a, T, I>(&self, anchor: Vec3, items: I) -> usize
    where
        T: UIComponent + 'a,
        I: IntoIterator<Item = &'a mut T>,
    {
        let mut placed = 0;
        for (item, target) in items.into_iter().zip(self.targets(anchor)) {
            item.set_position(target);
            placed += 1;
        }
        placed
    }

    /// Position of slot `index` before any viewer pose is known (anchor at the origin).
    pub fn initial_position(&self, index: usize) -> Vec3 {
        self.targets(Vec3::ZERO)
            .nth(index)
            .unwrap_or(Vec3::new(0.0, self.start_offset, -self.forward_distance))
    }
}
