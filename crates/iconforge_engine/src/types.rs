use std::fmt;

use crate::export::ExportSummary;

/// One normalized icon coming out of the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconData {
    /// Identifier-safe display name derived from the filename.
    pub name: String,
    /// The source filename, kept verbatim.
    pub original_name: String,
    /// Minified inner SVG markup without the `<svg>` wrapper.
    pub content: String,
    /// Extracted or synthesized viewBox string.
    pub view_box: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A whole import batch finished; per-file failures are folded into the
    /// aggregate count.
    ImportCompleted { icons: Vec<IconData>, failed: usize },
    /// An icon-pack export finished.
    ExportCompleted {
        result: Result<ExportSummary, ExportFailure>,
    },
}

/// Channel-friendly rendering of an export error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub message: String,
}

impl fmt::Display for ExportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "export failed: {}", self.message)
    }
}
