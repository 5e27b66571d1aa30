//! IconForge engine: SVG ingestion, normalization and icon-pack export.
mod engine;
mod decode;
mod normalize;
mod name;
mod ingest;
mod export;
mod filename;
mod persist;
mod types;

pub use engine::{EngineConfig, EngineHandle};
pub use decode::{decode_svg, DecodeError, DecodedSvg};
pub use normalize::{normalize, svg_markup, NormalizedSvg, DEFAULT_VIEW_BOX};
pub use name::normalize_name;
pub use ingest::{import_files, is_svg_candidate, ImportBatch, ImportFailure};
pub use export::{
    build_icon_pack_module, write_icon_pack, ExportError, ExportOptions, ExportSummary, PackIcon,
};
pub use filename::pack_filename;
pub use persist::{ensure_output_dir, write_atomic, PersistError};
pub use types::{EngineEvent, ExportFailure, IconData};
