use crate::config::AppConfig;
use anyhow::{Context, Result};
use archecklist_core::Checklist;
use archecklist_render::{AnimationLoop, FrameDriver, FrameReport, RecordingRenderer};
use archecklist_testkit::{FrameRecord, ItemRecord, JsonlSink, RunSummary};
use archecklist_ui3d::Scene;
use archecklist_xr::{PoseKeyframe, PoseScript, ScriptedSession};
use glam::Vec3;
use std::path::PathBuf;

pub struct HeadlessConfig {
    pub app: AppConfig,
    pub checklist: Checklist,
    pub script: PoseScript,
    pub record: Option<PathBuf>,
    pub summary: Option<PathBuf>,
}

type Driver = FrameDriver<ScriptedSession, RecordingRenderer>;

/// Build the scene, then drive frames until the session ends or the frame limit hits.
pub fn run(cfg: HeadlessConfig) -> Result<RunSummary> {
    let app = &cfg.app;
    let scene = Scene::build(&cfg.checklist, &app.item, &app.layout, app.lights);
    let renderer = RecordingRenderer::new(app.window).with_history(1);
    let mut driver = FrameDriver::new(
        scene,
        app.camera.camera(),
        app.layout,
        ScriptedSession::new(cfg.script),
        renderer,
    );
    driver.on_resize(app.window.width, app.window.height);

    let mut sink = match &cfg.record {
        Some(path) => Some(
            JsonlSink::create(path)
                .with_context(|| format!("failed to create frame log {}", path.display()))?,
        ),
        None => None,
    };
    let mut summary = RunSummary::new(cfg.checklist.name.clone(), cfg.checklist.len());

    let frames = AnimationLoop::new(app.run.fps)
        .with_max_frames(app.run.max_frames)
        .run(&mut driver, |driver, report| {
            let record = frame_record(driver, report);
            summary.record(&record);
            if let Some(sink) = sink.as_mut() {
                sink.write(&record)?;
            }
            Ok(())
        })?;

    if let Some(sink) = sink.as_mut() {
        sink.flush()?;
    }
    if let Some(path) = &cfg.summary {
        summary
            .write_to_file(path)
            .with_context(|| format!("failed to write run summary {}", path.display()))?;
    }

    tracing::info!(
        frames,
        presenting_frames = summary.presenting_frames,
        "headless run finished"
    );
    Ok(summary)
}

fn frame_record(driver: &Driver, report: &FrameReport) -> FrameRecord {
    let items = driver
        .renderer()
        .last_frame()
        .map(|frame| {
            frame
                .items
                .iter()
                .map(|item| ItemRecord {
                    label: item.label.clone(),
                    position: item.position.to_array(),
                })
                .collect()
        })
        .unwrap_or_default();

    FrameRecord {
        frame: report.frame,
        timestamp_ms: report.timestamp_ms,
        presenting: report.presenting,
        viewer_position: report.pose.map(|pose| pose.position.to_array()),
        viewer_direction: report.pose.map(|pose| pose.direction.to_array()),
        items,
    }
}

/// Pose script used when none is supplied: idle for a second, then the
/// viewer steps forward and to the right, turns, and leaves AR.
pub fn default_pose_script(eye_height: f32) -> PoseScript {
    let start = Vec3::new(0.0, eye_height, 0.0);
    let moved = Vec3::new(1.0, eye_height, -2.0);
    PoseScript {
        keyframes: vec![
            PoseKeyframe::at(0.0, start).with_presenting(false),
            PoseKeyframe::at(1000.0, start),
            PoseKeyframe::at(3000.0, moved).with_direction(Vec3::X),
            PoseKeyframe::at(5000.0, moved),
            PoseKeyframe::at(6000.0, moved).with_presenting(false),
        ],
        end_ms: Some(7000.0),
    }
}
