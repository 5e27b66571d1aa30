use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::normalize::svg_markup;
use crate::persist::{write_atomic, PersistError};

/// One icon to include in a generated pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackIcon {
    pub name: String,
    pub original_name: String,
    pub content: String,
    pub view_box: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub pack_filename: String,
    /// `None` disables the manifest.
    pub manifest_filename: Option<String>,
    /// Display name of the exported collection, recorded in the manifest.
    pub collection_name: Option<String>,
    /// RFC3339 timestamp recorded in the manifest; supplied by the caller.
    pub generated_utc: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pack_filename: "icon-pack.ts".to_string(),
            manifest_filename: Some("icon-pack.manifest.json".to_string()),
            collection_name: None,
            generated_utc: "unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub icon_count: usize,
    pub output_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Builds the TypeScript module text: one entry per icon keyed by its
/// (possibly disambiguated) name, plus the derived name-union type.
pub fn build_icon_pack_module(icons: &[PackIcon]) -> String {
    let entries = resolved_entries(icons);
    module_text(&entries)
}

/// Writes the module and the optional manifest into `output_dir`.
pub fn write_icon_pack(
    output_dir: &Path,
    options: &ExportOptions,
    icons: &[PackIcon],
) -> Result<ExportSummary, ExportError> {
    let entries = resolved_entries(icons);
    let output_path = write_atomic(output_dir, &options.pack_filename, &module_text(&entries))?;

    let manifest_path = match &options.manifest_filename {
        Some(name) => {
            let manifest = json!({
                "icon_count": entries.len(),
                "generated_utc": options.generated_utc,
                "collection": options.collection_name,
                "icons": entries.iter().map(|(name, icon)| {
                    json!({
                        "name": name,
                        "original_name": icon.original_name,
                        "view_box": icon.view_box,
                    })
                }).collect::<Vec<_>>(),
            });
            Some(write_atomic(output_dir, name, &manifest.to_string())?)
        }
        None => None,
    };

    Ok(ExportSummary {
        icon_count: entries.len(),
        output_path,
        manifest_path,
    })
}

/// Assigns each icon its final module key. Duplicate names get a numeric
/// suffix (`arrow`, `arrow2`, `arrow3`, ...) in input order, so a collision
/// can never silently drop an icon.
fn resolved_entries(icons: &[PackIcon]) -> Vec<(String, &PackIcon)> {
    let mut used: HashSet<String> = HashSet::with_capacity(icons.len());
    icons
        .iter()
        .map(|icon| {
            let mut candidate = icon.name.clone();
            let mut suffix = 2usize;
            while !used.insert(candidate.clone()) {
                candidate = format!("{}{}", icon.name, suffix);
                suffix += 1;
            }
            (candidate, icon)
        })
        .collect()
}

fn module_text(entries: &[(String, &PackIcon)]) -> String {
    let body = entries
        .iter()
        .map(|(name, icon)| {
            format!(
                "  {}: `{}`",
                name,
                svg_markup(&icon.content, icon.view_box.as_deref())
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "export const iconPack = {{\n{body}\n}};\n\nexport type IconName = keyof typeof iconPack;\n"
    )
}
