use anyhow::Result;
use archecklist_xr::ArSession;

use crate::{FrameDriver, FrameReport, SceneRenderer};

/// Fixed-rate frame callback loop.
///
/// Invokes [`FrameDriver::on_frame`] with synthetic timestamps, one callback
/// at a time, until the session ends or the frame limit is reached.
#[derive(Debug, Clone, Copy)]
pub struct AnimationLoop {
    interval_ms: f64,
    max_frames: Option<u64>,
}

impl AnimationLoop {
    /// Loop at `fps` frames per second (clamped to at least 1).
    pub fn new(fps: u32) -> Self {
        Self {
            interval_ms: 1000.0 / f64::from(fps.max(1)),
            max_frames: None,
        }
    }

    /// Builder: stop after `frames` callbacks.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Milliseconds between callbacks.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Drive frames, handing each report to `on_report`. Returns the number of frames run.
    pub fn run<S, R, F>(&self, driver: &mut FrameDriver<S, R>, mut on_report: F) -> Result<u64>
    where
        S: ArSession,
        R: SceneRenderer,
        F: FnMut(&FrameDriver<S, R>, &FrameReport) -> Result<()>,
    {
        let mut frames = 0;
        loop {
            if self.max_frames.is_some_and(|max| frames >= max) {
                tracing::info!(frames, "frame limit reached");
                break;
            }
            if driver.session().is_ended() {
                tracing::info!(frames, "AR session ended, stopping frame loop");
                break;
            }

            let timestamp_ms = frames as f64 * self.interval_ms;
            let report = driver.on_frame(timestamp_ms)?;
            on_report(driver, &report)?;
            frames += 1;
        }
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingRenderer, RendererConfig};
    use archecklist_camera::Camera;
    use archecklist_ui3d::{Scene, VerticalStack};
    use archecklist_xr::{PoseKeyframe, PoseScript, ScriptedSession};
    use glam::Vec3;

    fn driver(session: ScriptedSession) -> FrameDriver<ScriptedSession, RecordingRenderer> {
        FrameDriver::new(
            Scene::default(),
            Camera::default(),
            VerticalStack::default(),
            session,
            RecordingRenderer::new(RendererConfig::default()),
        )
    }

    #[test]
    fn stops_at_frame_limit() {
        let mut driver = driver(ScriptedSession::default());
        let mut seen = Vec::new();
        let frames = AnimationLoop::new(10)
            .with_max_frames(4)
            .run(&mut driver, |_, report| {
                seen.push(report.timestamp_ms);
                Ok(())
            })
            .expect("loop runs");
        assert_eq!(frames, 4);
        assert_eq!(seen, vec![0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn stops_when_session_ends() {
        let script = PoseScript {
            keyframes: vec![PoseKeyframe::at(0.0, Vec3::ZERO)],
            end_ms: Some(250.0),
        };
        let mut driver = driver(ScriptedSession::new(script));
        let frames = AnimationLoop::new(10)
            .with_max_frames(100)
            .run(&mut driver, |_, _| Ok(()))
            .expect("loop runs");
        // Frames at 0, 100, 200 present; the frame at 300 ends the session.
        assert_eq!(frames, 4);
        assert!(driver.session().is_ended());
    }

    #[test]
    fn callback_errors_propagate() {
        let mut driver = driver(ScriptedSession::default());
        let result = AnimationLoop::new(60)
            .with_max_frames(10)
            .run(&mut driver, |_, _| anyhow::bail!("sink closed"));
        assert!(result.is_err());
        assert_eq!(driver.frame_count(), 1);
    }

    #[test]
    fn zero_fps_is_clamped() {
        assert_eq!(AnimationLoop::new(0).interval_ms(), 1000.0);
    }
}
