//! archecklist - checklist panels floating in front of an AR viewer
//!
//! Headless executable: builds the scene, drives a scripted AR session frame
//! by frame, and optionally records every frame as JSONL.

mod config;
mod headless;

use anyhow::{Context, Result};
use archecklist_core::{checklist_from_file, ChecklistSource, DemoChecklistSource};
use archecklist_xr::pose_script_from_file;
use clap::Parser;
use config::AppConfig;
use headless::HeadlessConfig;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "archecklist", version, about)]
struct CliOptions {
    /// TOML config file (defaults to config/archecklist.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// JSON checklist to display instead of the built-in one
    #[arg(long, value_name = "PATH")]
    checklist: Option<PathBuf>,
    /// JSON pose script for the simulated AR session
    #[arg(long, value_name = "PATH")]
    pose_script: Option<PathBuf>,
    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,
    /// Simulated frame rate
    #[arg(long)]
    fps: Option<u32>,
    /// Write one JSON record per frame to this file
    #[arg(long, value_name = "PATH")]
    record: Option<PathBuf>,
    /// Write a run summary to this file
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,
    /// Save the effective configuration to this file and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting archecklist v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse();
    let mut app = match &cli.config {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    };
    if let Some(frames) = cli.frames {
        app.run.max_frames = frames;
    }
    if let Some(fps) = cli.fps {
        app.run.fps = fps;
    }
    match (cli.width, cli.height) {
        (Some(width), Some(height)) => {
            app.window.width = width;
            app.window.height = height;
        }
        (Some(_), None) | (None, Some(_)) => {
            tracing::error!("--width and --height must be set together");
        }
        _ => {}
    }

    if let Some(path) = &cli.write_config {
        app.save_to_path(path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        info!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let checklist = match &cli.checklist {
        Some(path) => checklist_from_file(path)
            .with_context(|| format!("failed to load checklist from {}", path.display()))?,
        None => DemoChecklistSource.checklist(),
    };
    info!(
        "Checklist '{}' ({}) with {} items",
        checklist.name,
        checklist.description,
        checklist.len()
    );

    let script = match &cli.pose_script {
        Some(path) => pose_script_from_file(path)
            .with_context(|| format!("failed to load pose script from {}", path.display()))?,
        None => headless::default_pose_script(app.camera.eye_height),
    };

    let summary = headless::run(HeadlessConfig {
        app,
        checklist,
        script,
        record: cli.record,
        summary: cli.summary,
    })?;

    println!(
        "{}: {} frames, {} presenting, {} items",
        summary.run_name, summary.frames, summary.presenting_frames, summary.items
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        CliOptions::command().debug_assert();
    }

    #[test]
    fn parses_overrides() {
        let cli = CliOptions::try_parse_from([
            "archecklist",
            "--frames",
            "30",
            "--fps",
            "72",
            "--record",
            "out/frames.jsonl",
        ])
        .expect("valid args");
        assert_eq!(cli.frames, Some(30));
        assert_eq!(cli.fps, Some(72));
        assert_eq!(cli.record, Some(PathBuf::from("out/frames.jsonl")));
        assert!(cli.checklist.is_none());
    }
}
