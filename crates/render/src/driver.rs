use anyhow::{Context, Result};
use archecklist_camera::Camera;
use archecklist_ui3d::{Scene, VerticalStack};
use archecklist_xr::{ArSession, ViewerPose};

use crate::SceneRenderer;

/// Outcome of one frame callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Zero-based frame counter.
    pub frame: u64,
    /// Timestamp passed to the callback, in milliseconds.
    pub timestamp_ms: f64,
    /// Whether the session was presenting this frame.
    pub presenting: bool,
    /// Pose sampled this frame; `None` when not presenting.
    pub pose: Option<ViewerPose>,
    /// Visuals repositioned by the layout pass.
    pub items_placed: usize,
}

/// Owns the scene, camera, AR session, and renderer, and runs one frame at a time.
///
/// Per frame: sample the pose if the session presents, restack the visuals
/// around it, then render. When the session is not presenting, visuals keep
/// their last positions and the scene is rendered as-is.
pub struct FrameDriver<S, R> {
    scene: Scene,
    camera: Camera,
    layout: VerticalStack,
    session: S,
    renderer: R,
    frame: u64,
}

impl<S, R> FrameDriver<S, R>
where
    S: ArSession,
    R: SceneRenderer,
{
    /// Create the driver and register every visual with the renderer.
    pub fn new(scene: Scene, camera: Camera, layout: VerticalStack, session: S, mut renderer: R) -> Self {
        for visual in scene.items() {
            renderer.add(visual);
        }
        tracing::info!(items = scene.items().len(), "frame driver ready");

        Self {
            scene,
            camera,
            layout,
            session,
            renderer,
            frame: 0,
        }
    }

    /// Run one frame callback.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Result<FrameReport> {
        self.session.begin_frame(timestamp_ms);

        let presenting = self.session.is_presenting();
        let mut pose = None;
        let mut items_placed = 0;
        if presenting {
            let sample = self.session.viewer_pose();
            self.camera.look_along(sample.position, sample.direction);
            items_placed = self
                .layout
                .apply(sample.position, self.scene.items_mut().iter_mut());
            pose = Some(sample);
            tracing::trace!(
                frame = self.frame,
                position = ?sample.position,
                direction = ?sample.direction,
                "viewer pose sampled"
            );
        }

        self.renderer
            .render(&self.scene, &self.camera)
            .with_context(|| format!("failed to render frame {}", self.frame))?;

        let report = FrameReport {
            frame: self.frame,
            timestamp_ms,
            presenting,
            pose,
            items_placed,
        };
        self.frame += 1;
        Ok(report)
    }

    /// Window size changed: update the camera aspect and renderer viewport.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
        self.renderer.resize(width, height);
        tracing::debug!(width, height, aspect = self.camera.aspect, "resized");
    }

    /// Number of frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// The scene being driven.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The render camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The AR session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Mutable access to the AR session.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingRenderer, RendererConfig};
    use archecklist_core::{ChecklistSource, DemoChecklistSource};
    use archecklist_ui3d::{ItemStyle, Lighting, UIComponent};
    use archecklist_xr::ScriptedSession;
    use glam::Vec3;

    fn driver(session: ScriptedSession) -> FrameDriver<ScriptedSession, RecordingRenderer> {
        let layout = VerticalStack::default();
        let scene = Scene::build(
            &DemoChecklistSource.checklist(),
            &ItemStyle::default(),
            &layout,
            Lighting::default(),
        );
        FrameDriver::new(
            scene,
            Camera::default(),
            layout,
            session,
            RecordingRenderer::new(RendererConfig::default()),
        )
    }

    #[test]
    fn registers_visuals_on_construction() {
        let driver = driver(ScriptedSession::default());
        assert_eq!(driver.renderer().registered(), ["Item 1", "Item 2"]);
    }

    #[test]
    fn presenting_frame_restacks_around_viewer() {
        let pose = ViewerPose::new(Vec3::new(1.0, 1.6, 2.0), Vec3::X);
        let mut driver = driver(ScriptedSession::stationary(pose));

        let report = driver.on_frame(16.0).expect("frame");
        assert!(report.presenting);
        assert_eq!(report.pose, Some(pose));
        assert_eq!(report.items_placed, 2);

        let items = driver.scene().items();
        let first = items.get(0).map(UIComponent::position).expect("first");
        let second = items.get(1).map(UIComponent::position).expect("second");
        assert!((first - Vec3::new(1.0, 3.6, 1.0)).length() < 1e-5);
        assert!((second - Vec3::new(1.0, 3.45, 1.0)).length() < 1e-5);
        assert_eq!(driver.camera().position, pose.position);
    }

    #[test]
    fn idle_session_skips_layout_but_still_renders() {
        let mut driver = driver(ScriptedSession::default());
        let before: Vec<_> = driver.scene().items().iter().map(|v| v.position()).collect();

        let report = driver.on_frame(0.0).expect("frame");
        assert!(!report.presenting);
        assert_eq!(report.pose, None);
        assert_eq!(report.items_placed, 0);

        let rendered: Vec<_> = driver
            .renderer()
            .last_frame()
            .expect("rendered")
            .items
            .iter()
            .map(|item| item.position)
            .collect();
        assert_eq!(rendered, before);
    }

    #[test]
    fn resize_updates_camera_and_viewport() {
        let mut driver = driver(ScriptedSession::default());
        driver.on_resize(1000, 500);
        assert_eq!(driver.camera().aspect, 2.0);
        assert_eq!(driver.renderer().config().width, 1000);
        assert_eq!(driver.renderer().config().height, 500);
    }

    #[test]
    fn frame_counter_advances() {
        let mut driver = driver(ScriptedSession::default());
        for i in 0..3 {
            let report = driver.on_frame(i as f64 * 16.0).expect("frame");
            assert_eq!(report.frame, i);
        }
        assert_eq!(driver.frame_count(), 3);
    }
}
