//! Run summaries exported as JSON after a headless session.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::FrameRecord;

/// Aggregate counters for one headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Run identifier (checklist name).
    pub run_name: String,
    /// Timestamp when the summary was produced (ISO 8601)
    pub timestamp: String,
    /// Frames executed.
    pub frames: u64,
    /// Frames during which the session was presenting.
    pub presenting_frames: u64,
    /// Visuals in the scene.
    pub items: usize,
    /// Position of the top item [x, y, z] in the last presenting frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_top_slot: Option<[f32; 3]>,
}

impl RunSummary {
    /// Start an empty summary.
    pub fn new(run_name: impl Into<String>, items: usize) -> Self {
        Self {
            run_name: run_name.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            frames: 0,
            presenting_frames: 0,
            items,
            last_top_slot: None,
        }
    }

    /// Fold one frame into the summary.
    pub fn record(&mut self, frame: &FrameRecord) {
        self.frames += 1;
        if frame.presenting {
            self.presenting_frames += 1;
            self.last_top_slot = frame.items.first().map(|item| item.position);
        }
    }

    /// Persist as pretty JSON, creating parent dirs if needed.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        tracing::debug!(frames = self.frames, "run summary written");
        Ok(())
    }
}
