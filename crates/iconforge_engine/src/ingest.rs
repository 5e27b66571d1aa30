use std::path::{Path, PathBuf};

use forge_logging::forge_warn;
use futures_util::future::join_all;
use thiserror::Error;

use crate::decode::{decode_svg, DecodeError};
use crate::name::normalize_name;
use crate::normalize::normalize;
use crate::types::IconData;

/// Result of one import batch. Per-file failures contribute nothing beyond
/// the count, so the store sees either a whole icon or no trace of the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportBatch {
    pub icons: Vec<IconData>,
    pub failed: usize,
}

#[derive(Debug, Error)]
pub enum ImportFailure {
    #[error("not an svg file")]
    NotSvg,
    #[error("read failed: {0}")]
    Read(String),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Local files carry no MIME type, so the `.svg` extension is the whole
/// gate (case-insensitive).
pub fn is_svg_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

async fn load_icon(path: &Path) -> Result<IconData, ImportFailure> {
    if !is_svg_candidate(path) {
        return Err(ImportFailure::NotSvg);
    }
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| ImportFailure::Read(err.to_string()))?;
    let decoded = decode_svg(&bytes)?;
    let normalized = normalize(&decoded.text);
    let original_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(IconData {
        name: normalize_name(&original_name),
        original_name,
        content: normalized.content,
        view_box: normalized.view_box,
    })
}

/// Reads every file concurrently and joins the results into a single batch,
/// so a multi-file import can never leave the store half-updated.
pub async fn import_files(paths: &[PathBuf]) -> ImportBatch {
    let reads = paths.iter().map(|path| load_icon(path));
    let mut batch = ImportBatch::default();
    for (path, result) in paths.iter().zip(join_all(reads).await) {
        match result {
            Ok(icon) => batch.icons.push(icon),
            Err(err) => {
                batch.failed += 1;
                forge_warn!("skipping {}: {}", path.display(), err);
            }
        }
    }
    batch
}
