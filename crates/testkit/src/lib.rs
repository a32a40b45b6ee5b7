#![warn(missing_docs)]
//! Headless run artifacts: per-frame JSONL records and run summaries.

mod metrics;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub use metrics::*;

/// One visual's placement in a recorded frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Panel label.
    pub label: String,
    /// World position [x, y, z].
    pub position: [f32; 3],
}

/// Snapshot of one frame callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Zero-based frame counter.
    pub frame: u64,
    /// Callback timestamp in milliseconds.
    pub timestamp_ms: f64,
    /// Whether the AR session was presenting.
    pub presenting: bool,
    /// Viewer position sampled this frame, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub viewer_position: Option<[f32; 3]>,
    /// Viewer direction sampled this frame, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub viewer_direction: Option<[f32; 3]>,
    /// Visuals as rendered, in scene order.
    pub items: Vec<ItemRecord>,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    writer: BufWriter<File>,
    lines: u64,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    /// Append a record to the log.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Number of records written.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Flush buffered records to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Read every record of a JSONL file.
pub fn read_jsonl<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let contents = fs::read_to_string(path)?;
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(anyhow::Error::from))
        .collect()
}
