#![warn(missing_docs)]
//! Checklist data model and the sources that supply it.

mod checklist;
mod loader;

pub use checklist::{Checklist, ChecklistItem, ChecklistSource, DemoChecklistSource};
pub use loader::{checklist_from_file, checklist_from_str};

use thiserror::Error;

/// Errors emitted while loading a checklist file.
#[derive(Debug, Error)]
pub enum ChecklistError {
    /// Wrap IO errors when reading checklist files.
    #[error("failed to read checklist: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse checklist: {0}")]
    Parse(#[from] serde_json::Error),
}
