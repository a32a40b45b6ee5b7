//! Scene graph: the checklist visuals plus lighting.

use crate::components::{rgba_from_hex, ItemStyle, ItemVisual};
use crate::layout::VerticalStack;
use archecklist_core::Checklist;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ordered visuals, one per checklist item, in checklist order.
///
/// The length and order are fixed at construction; only item positions
/// change afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSequence {
    items: Vec<ItemVisual>,
}

impl ItemSequence {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemVisual> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemVisual> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ItemVisual> {
        self.items.iter_mut()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(ItemVisual::label)
    }
}

impl FromIterator<ItemVisual> for ItemSequence {
    fn from_iter<I: IntoIterator<Item = ItemVisual>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemSequence {
    type Item = &'a ItemVisual;
    type IntoIter = std::slice::Iter<'a, ItemVisual>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Parallel light arriving from `direction` (pointing toward the light).
    Directional {
        color: [f32; 4],
        intensity: f32,
        direction: Vec3,
    },
    /// Uniform light on every surface.
    Ambient { color: [f32; 4], intensity: f32 },
}

/// Light rig configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lighting {
    /// Directional light color as `0xRRGGBB`.
    pub directional_color: u32,
    pub directional_intensity: f32,
    /// Direction toward the directional light; normalized when the scene is built.
    pub directional_from: [f32; 3],
    /// Ambient light color as `0xRRGGBB`.
    pub ambient_color: u32,
    pub ambient_intensity: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            directional_color: 0xffffff,
            directional_intensity: 0.5,
            directional_from: [1.0, 1.0, 1.0],
            ambient_color: 0xffffff,
            ambient_intensity: 0.5,
        }
    }
}

impl Lighting {
    /// Expand into scene lights.
    pub fn lights(&self) -> Vec<Light> {
        vec![
            Light::Directional {
                color: rgba_from_hex(self.directional_color),
                intensity: self.directional_intensity,
                direction: Vec3::from_array(self.directional_from)
                    .try_normalize()
                    .unwrap_or(Vec3::Y),
            },
            Light::Ambient {
                color: rgba_from_hex(self.ambient_color),
                intensity: self.ambient_intensity,
            },
        ]
    }
}

/// Everything that gets rendered: item visuals and lights.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: ItemSequence,
    lights: Vec<Light>,
}

impl Scene {
    /// Build one visual per checklist item, in checklist order, at its
    /// initial slot.
    pub fn build(
        checklist: &Checklist,
        style: &ItemStyle,
        layout: &VerticalStack,
        lighting: Lighting,
    ) -> Self {
        let items: ItemSequence = checklist
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| style.build(item.name.clone(), layout.initial_position(index)))
            .collect();

        tracing::info!(
            checklist = %checklist.name,
            items = items.len(),
            "built checklist scene"
        );

        Self {
            items,
            lights: lighting.lights(),
        }
    }

    pub fn items(&self) -> &ItemSequence {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut ItemSequence {
        &mut self.items
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::UIComponent;
    use archecklist_core::{ChecklistItem, ChecklistSource, DemoChecklistSource};

    #[test]
    fn build_creates_visuals_in_checklist_order() {
        let checklist = DemoChecklistSource.checklist();
        let scene = Scene::build(
            &checklist,
            &ItemStyle::default(),
            &VerticalStack::default(),
            Lighting::default(),
        );

        let labels: Vec<_> = scene.items().labels().collect();
        assert_eq!(labels, vec!["Item 1", "Item 2"]);

        let first = scene.items().get(0).expect("first item");
        let second = scene.items().get(1).expect("second item");
        assert!((first.position() - Vec3::new(0.0, 2.0, -1.0)).length() < 1e-5);
        assert!((second.position() - Vec3::new(0.0, 1.85, -1.0)).length() < 1e-5);
    }

    #[test]
    fn empty_checklist_builds_empty_scene() {
        let scene = Scene::build(
            &Checklist::default(),
            &ItemStyle::default(),
            &VerticalStack::default(),
            Lighting::default(),
        );
        assert!(scene.items().is_empty());
        assert_eq!(scene.lights().len(), 2);
    }

    #[test]
    fn default_lights() {
        let lights = Lighting::default().lights();
        match lights[0] {
            Light::Directional {
                color,
                intensity,
                direction,
            } => {
                assert_eq!(color, [1.0, 1.0, 1.0, 1.0]);
                assert_eq!(intensity, 0.5);
                assert!((direction - Vec3::ONE.normalize()).length() < 1e-6);
            }
            other => panic!("expected directional light, got {other:?}"),
        }
        assert_eq!(
            lights[1],
            Light::Ambient {
                color: [1.0, 1.0, 1.0, 1.0],
                intensity: 0.5
            }
        );
    }

    #[test]
    fn sequence_iterates_in_insertion_order() {
        let checklist = Checklist {
            items: (0..4)
                .map(|i| ChecklistItem::new(format!("step {i}"), ""))
                .collect(),
            ..Default::default()
        };
        let scene = Scene::build(
            &checklist,
            &ItemStyle::default(),
            &VerticalStack::default(),
            Lighting::default(),
        );
        let labels: Vec<_> = scene.items().into_iter().map(|v| v.label().to_string()).collect();
        assert_eq!(labels, vec!["step 0", "step 1", "step 2", "step 3"]);
    }
}
