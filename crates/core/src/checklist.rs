//! Checklist records.

use serde::{Deserialize, Serialize};

/// One entry of a checklist. Identity is its index in [`Checklist::items`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Display name, used as the panel label.
    pub name: String,
    /// Longer description (not rendered).
    #[serde(default)]
    pub description: String,
}

impl ChecklistItem {
    /// Create an item from a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A named, ordered list of checklist items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// Checklist title.
    #[serde(default)]
    pub name: String,
    /// Checklist description.
    #[serde(default)]
    pub description: String,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the checklist has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Supplies the checklist shown in the scene. Consumed once at startup.
pub trait ChecklistSource {
    /// Return the checklist. Sources are assumed to always succeed.
    fn checklist(&self) -> Checklist;
}

impl ChecklistSource for Checklist {
    fn checklist(&self) -> Checklist {
        self.clone()
    }
}

/// Built-in source returning the fixed two-item demo checklist.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoChecklistSource;

impl ChecklistSource for DemoChecklistSource {
    fn checklist(&self) -> Checklist {
        Checklist {
            name: "My Checklist".to_string(),
            description: "This is a checklist".to_string(),
            items: vec![
                ChecklistItem::new("Item 1", "This is item 1"),
                ChecklistItem::new("Item 2", "This is item 2"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_source_returns_two_items_in_order() {
        let checklist = DemoChecklistSource.checklist();
        assert_eq!(checklist.name, "My Checklist");
        assert_eq!(checklist.len(), 2);
        assert_eq!(checklist.items[0].name, "Item 1");
        assert_eq!(checklist.items[1].name, "Item 2");
        assert_eq!(checklist.items[1].description, "This is item 2");
    }

    #[test]
    fn checklist_is_its_own_source() {
        let checklist = Checklist {
            name: "Preflight".into(),
            description: String::new(),
            items: vec![ChecklistItem::new("Fuel", "")],
        };
        assert_eq!(checklist.checklist(), checklist);
    }

    #[test]
    fn default_checklist_is_empty() {
        let checklist = Checklist::default();
        assert!(checklist.is_empty());
        assert_eq!(checklist.len(), 0);
    }
}
