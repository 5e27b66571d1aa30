use std::path::PathBuf;

use iconforge_engine::{import_files, is_svg_candidate};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn candidate_check_is_extension_based() {
    assert!(is_svg_candidate(std::path::Path::new("icon.svg")));
    assert!(is_svg_candidate(std::path::Path::new("ICON.SVG")));
    assert!(!is_svg_candidate(std::path::Path::new("icon.png")));
    assert!(!is_svg_candidate(std::path::Path::new("svg")));
}

#[tokio::test]
async fn batch_joins_all_reads_and_counts_failures() {
    let dir = TempDir::new().unwrap();
    let good = write_file(
        &dir,
        "arrow-left.svg",
        br#"<svg viewBox="0 0 24 24"><path d="M1 2"/></svg>"#,
    );
    let not_svg = write_file(&dir, "photo.png", b"\x89PNG");
    let missing = dir.path().join("gone.svg");

    let batch = import_files(&[good, not_svg, missing]).await;

    assert_eq!(batch.icons.len(), 1);
    assert_eq!(batch.failed, 2);
    let icon = &batch.icons[0];
    assert_eq!(icon.name, "arrowLeft");
    assert_eq!(icon.original_name, "arrow-left.svg");
    assert_eq!(icon.content, r#"<path d="M1 2"/>"#);
    assert_eq!(icon.view_box.as_deref(), Some("0 0 24 24"));
}

#[tokio::test]
async fn bom_prefixed_files_decode_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "dot.svg",
        b"\xEF\xBB\xBF<svg viewBox=\"0 0 8 8\"><circle r=\"4\"/></svg>",
    );

    let batch = import_files(&[path]).await;

    assert_eq!(batch.failed, 0);
    assert_eq!(batch.icons[0].content, r#"<circle r="4"/>"#);
}

#[tokio::test]
async fn empty_batch_is_empty() {
    let batch = import_files(&[]).await;
    assert!(batch.icons.is_empty());
    assert_eq!(batch.failed, 0);
}
