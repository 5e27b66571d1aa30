use crate::{CollectionId, IconId, SortKey};

/// Outcome of the last import batch, for status display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportStats {
    pub added: usize,
    pub failed: usize,
}

/// Outcome of the last export, for status display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStats {
    pub icon_count: usize,
    pub succeeded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Icons after collection scoping, search filtering and sorting.
    pub icons: Vec<IconView>,
    pub collections: Vec<CollectionView>,
    /// Total stored icons, ignoring any filter.
    pub icon_count: usize,
    pub selected_icon: Option<IconId>,
    pub selected_collection: Option<CollectionId>,
    pub search_query: String,
    pub batch_mode: bool,
    pub batch_selection: Vec<IconId>,
    pub sort_key: SortKey,
    pub last_import: Option<ImportStats>,
    pub last_export: Option<ExportStats>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconView {
    pub icon_id: IconId,
    pub name: String,
    pub original_name: String,
    pub view_box: Option<String>,
    /// Name of the first collection containing this icon, if any.
    pub collection_name: Option<String>,
    pub in_batch_selection: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionView {
    pub collection_id: CollectionId,
    pub name: String,
    pub description: Option<String>,
    pub icon_count: usize,
}
