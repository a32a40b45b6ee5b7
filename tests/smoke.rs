use archecklist_camera::Camera;
use archecklist_core::{ChecklistSource, DemoChecklistSource};
use archecklist_render::{FrameDriver, RecordingRenderer, RendererConfig};
use archecklist_testkit::{FrameRecord, JsonlSink};
use archecklist_ui3d::{ItemStyle, Lighting, Scene, UIComponent, VerticalStack};
use archecklist_xr::{ScriptedSession, ViewerPose};
use glam::Vec3;

#[test]
fn demo_checklist_stacks_in_front_of_viewer_at_origin() {
    let layout = VerticalStack::default();
    let scene = Scene::build(
        &DemoChecklistSource.checklist(),
        &ItemStyle::default(),
        &layout,
        Lighting::default(),
    );
    let mut driver = FrameDriver::new(
        scene,
        Camera::default(),
        layout,
        ScriptedSession::stationary(ViewerPose::default()),
        RecordingRenderer::new(RendererConfig::default()),
    );

    let report = driver.on_frame(0.0).expect("frame renders");
    assert!(report.presenting);

    let items = driver.scene().items();
    assert_eq!(items.get(0).map(|v| v.label()), Some("Item 1"));
    assert_eq!(items.get(1).map(|v| v.label()), Some("Item 2"));
    let first = items.get(0).map(|v| v.position()).expect("item 1");
    let second = items.get(1).map(|v| v.position()).expect("item 2");
    assert!((first - Vec3::new(0.0, 2.0, -1.0)).length() < 1e-6);
    assert!((second - Vec3::new(0.0, 1.85, -1.0)).length() < 1e-6);
}

#[test]
fn frame_records_can_be_written() {
    let mut sink = JsonlSink::create(std::env::temp_dir().join("archecklist-smoke.jsonl"))
        .expect("can create temp log");
    let record = FrameRecord {
        frame: 0,
        timestamp_ms: 0.0,
        presenting: false,
        viewer_position: None,
        viewer_direction: None,
        items: Vec::new(),
    };
    sink.write(&record).expect("can write frame");
    sink.flush().expect("can flush");
}
