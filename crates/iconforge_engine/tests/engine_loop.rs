use std::sync::Arc;
use std::time::{Duration, Instant};

use iconforge_engine::{EngineConfig, EngineEvent, EngineHandle, PackIcon};
use tempfile::TempDir;

fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for engine");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn import_command_reports_a_single_batch() {
    let temp = TempDir::new().unwrap();
    let good = temp.path().join("dot.svg");
    std::fs::write(&good, r#"<svg viewBox="0 0 8 8"><circle r="4"/></svg>"#).unwrap();
    let bad = temp.path().join("missing.svg");

    let engine = EngineHandle::new(EngineConfig::default_with_output(temp.path().join("out")));
    engine.import(vec![good, bad]);

    match wait_for_event(&engine) {
        EngineEvent::ImportCompleted { icons, failed } => {
            assert_eq!(icons.len(), 1);
            assert_eq!(failed, 1);
            assert_eq!(icons[0].name, "dot");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn export_command_writes_the_pack() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("out");
    let mut config = EngineConfig::default_with_output(out_dir.clone());
    config.now_utc = Arc::new(|| "2024-01-01T00:00:00Z".to_string());

    let engine = EngineHandle::new(config);
    engine.export(
        Some(("Shapes".to_string(), 1)),
        vec![PackIcon {
            name: "square".to_string(),
            original_name: "square.svg".to_string(),
            content: "<rect/>".to_string(),
            view_box: None,
        }],
    );

    match wait_for_event(&engine) {
        EngineEvent::ExportCompleted { result } => {
            let summary = result.expect("export succeeds");
            assert_eq!(summary.icon_count, 1);
            assert!(summary.output_path.starts_with(&out_dir));
            assert!(summary.output_path.exists());
            let manifest = summary.manifest_path.expect("manifest written");
            let text = std::fs::read_to_string(manifest).unwrap();
            assert!(text.contains("2024-01-01T00:00:00Z"));
            assert!(text.contains("\"collection\":\"Shapes\""));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
