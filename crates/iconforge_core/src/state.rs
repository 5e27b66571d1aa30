use std::collections::BTreeMap;
use std::fmt;

use crate::view_model::{
    AppViewModel, CollectionView, ExportStats, IconView, ImportStats,
};
use crate::{PackCollection, PackEntry};

/// Identifier for a stored icon, allocated by [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconId(u64);

impl IconId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "icon#{}", self.0)
    }
}

/// Identifier for a collection. Separate id space from [`IconId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollectionId(u64);

impl CollectionId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collection#{}", self.0)
    }
}

/// A stored, normalized SVG fragment with metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub id: IconId,
    /// Display name; mutable via rename.
    pub name: String,
    /// Source filename; never changes after import.
    pub original_name: String,
    /// Minified inner SVG markup, without the outer `<svg>` wrapper.
    pub content: String,
    /// `"minX minY width height"` when known.
    pub view_box: Option<String>,
}

/// A named, ordered grouping of icon references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub description: Option<String>,
    /// Membership in insertion order. Ids of removed icons are pruned
    /// eagerly; duplicate entries are rejected at insertion time.
    pub icons: Vec<IconId>,
}

/// Icon data produced by the ingestion pipeline, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedIcon {
    pub name: String,
    pub original_name: String,
    pub content: String,
    pub view_box: Option<String>,
}

/// Ordering applied to the icon list in the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    CollectionName,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    icons: BTreeMap<IconId, Icon>,
    collections: BTreeMap<CollectionId, Collection>,
    selected_icon: Option<IconId>,
    selected_collection: Option<CollectionId>,
    search_query: String,
    batch_mode: bool,
    batch_selection: Vec<IconId>,
    sort_key: SortKey,
    last_import: Option<ImportStats>,
    last_export: Option<ExportStats>,
    next_icon_id: u64,
    next_collection_id: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dirty flag and clears it. Used by frontends to coalesce
    /// rendering.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn alloc_icon_id(&mut self) -> IconId {
        self.next_icon_id += 1;
        IconId(self.next_icon_id)
    }

    fn alloc_collection_id(&mut self) -> CollectionId {
        self.next_collection_id += 1;
        CollectionId(self.next_collection_id)
    }

    /// Appends a completed import batch in one step and records the
    /// aggregate stats. Returns the ids assigned to the new icons.
    pub(crate) fn apply_import(
        &mut self,
        imported: Vec<ImportedIcon>,
        failed: usize,
    ) -> Vec<IconId> {
        let mut added = Vec::with_capacity(imported.len());
        for icon in imported {
            let id = self.alloc_icon_id();
            self.icons.insert(
                id,
                Icon {
                    id,
                    name: icon.name,
                    original_name: icon.original_name,
                    content: icon.content,
                    view_box: icon.view_box,
                },
            );
            added.push(id);
        }
        self.last_import = Some(ImportStats {
            added: added.len(),
            failed,
        });
        self.mark_dirty();
        added
    }

    /// Removes an icon, pruning its id from every collection's membership
    /// list, the batch selection, and the detail selection.
    pub(crate) fn remove_icon(&mut self, icon_id: IconId) {
        if self.icons.remove(&icon_id).is_none() {
            return;
        }
        for collection in self.collections.values_mut() {
            collection.icons.retain(|id| *id != icon_id);
        }
        self.batch_selection.retain(|id| *id != icon_id);
        if self.selected_icon == Some(icon_id) {
            self.selected_icon = None;
        }
        self.mark_dirty();
    }

    pub(crate) fn rename_icon(&mut self, icon_id: IconId, name: String) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(icon) = self.icons.get_mut(&icon_id) {
            if icon.name != name {
                icon.name = name.to_string();
                self.mark_dirty();
            }
        }
    }

    pub(crate) fn select_icon(&mut self, icon_id: Option<IconId>) {
        if let Some(id) = icon_id {
            if !self.icons.contains_key(&id) {
                return;
            }
        }
        if self.selected_icon != icon_id {
            self.selected_icon = icon_id;
            self.mark_dirty();
        }
    }

    pub(crate) fn create_collection(
        &mut self,
        name: String,
        description: Option<String>,
    ) -> CollectionId {
        let id = self.alloc_collection_id();
        self.collections.insert(
            id,
            Collection {
                id,
                name,
                description,
                icons: Vec::new(),
            },
        );
        self.mark_dirty();
        id
    }

    pub(crate) fn edit_collection(
        &mut self,
        collection_id: CollectionId,
        name: String,
        description: Option<String>,
    ) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(collection) = self.collections.get_mut(&collection_id) {
            if collection.name != name || collection.description != description {
                collection.name = name.to_string();
                collection.description = description;
                self.mark_dirty();
            }
        }
    }

    /// Removes a collection. Icons survive; only the collection selection
    /// pointer is cleared when it referenced the removed id.
    pub(crate) fn remove_collection(&mut self, collection_id: CollectionId) {
        if self.collections.remove(&collection_id).is_none() {
            return;
        }
        if self.selected_collection == Some(collection_id) {
            self.selected_collection = None;
        }
        self.mark_dirty();
    }

    pub(crate) fn select_collection(&mut self, collection_id: Option<CollectionId>) {
        if let Some(id) = collection_id {
            if !self.collections.contains_key(&id) {
                return;
            }
        }
        if self.selected_collection != collection_id {
            self.selected_collection = collection_id;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_search_query(&mut self, query: String) {
        if self.search_query != query {
            self.search_query = query;
            self.mark_dirty();
        }
    }

    /// Records a membership pair. Duplicate pairs are rejected; the icon id
    /// itself is not validated against the icon set.
    pub(crate) fn add_membership(&mut self, icon_id: IconId, collection_id: CollectionId) {
        if let Some(collection) = self.collections.get_mut(&collection_id) {
            if !collection.icons.contains(&icon_id) {
                collection.icons.push(icon_id);
                self.mark_dirty();
            }
        }
    }

    pub(crate) fn remove_membership(&mut self, icon_id: IconId, collection_id: CollectionId) {
        if let Some(collection) = self.collections.get_mut(&collection_id) {
            let before = collection.icons.len();
            collection.icons.retain(|id| *id != icon_id);
            if collection.icons.len() != before {
                self.mark_dirty();
            }
        }
    }

    /// Turning batch mode off always empties the batch selection, so stale
    /// selections can never survive an exit.
    pub(crate) fn set_batch_mode(&mut self, enabled: bool) {
        if self.batch_mode == enabled && (enabled || self.batch_selection.is_empty()) {
            return;
        }
        self.batch_mode = enabled;
        if !enabled {
            self.batch_selection.clear();
        }
        self.mark_dirty();
    }

    pub(crate) fn replace_batch_selection(&mut self, selection: Vec<IconId>) {
        if self.batch_selection != selection {
            self.batch_selection = selection;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_sort_key(&mut self, sort_key: SortKey) {
        if self.sort_key != sort_key {
            self.sort_key = sort_key;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_export_stats(&mut self, icon_count: usize, succeeded: bool) {
        self.last_export = Some(ExportStats {
            icon_count,
            succeeded,
        });
        self.mark_dirty();
    }

    /// Resolves the icons for an export request: the collection's members in
    /// membership order, or every icon when no collection is given. Returns
    /// `None` when the resolved set is empty.
    pub(crate) fn resolve_export(
        &self,
        collection_id: Option<CollectionId>,
    ) -> Option<(Option<PackCollection>, Vec<PackEntry>)> {
        let (collection, icons): (Option<PackCollection>, Vec<&Icon>) = match collection_id {
            Some(id) => {
                let collection = self.collections.get(&id)?;
                let icons = collection
                    .icons
                    .iter()
                    .filter_map(|icon_id| self.icons.get(icon_id))
                    .collect();
                (
                    Some(PackCollection {
                        collection_id: collection.id,
                        name: collection.name.clone(),
                    }),
                    icons,
                )
            }
            None => (None, self.icons.values().collect()),
        };
        if icons.is_empty() {
            return None;
        }
        let entries = icons
            .into_iter()
            .map(|icon| PackEntry {
                name: icon.name.clone(),
                original_name: icon.original_name.clone(),
                content: icon.content.clone(),
                view_box: icon.view_box.clone(),
            })
            .collect();
        Some((collection, entries))
    }

    /// Name of the first collection (in id order) containing the icon.
    fn collection_name_for(&self, icon_id: IconId) -> Option<String> {
        self.collections
            .values()
            .find(|collection| collection.icons.contains(&icon_id))
            .map(|collection| collection.name.clone())
    }

    /// Builds the derived view. Filtering and sorting are recomputed from
    /// the current state on every call and are never stored, so they cannot
    /// drift out of sync with the underlying edits.
    pub fn view(&self) -> AppViewModel {
        let scoped: Vec<&Icon> = match self
            .selected_collection
            .and_then(|id| self.collections.get(&id))
        {
            Some(collection) => collection
                .icons
                .iter()
                .filter_map(|icon_id| self.icons.get(icon_id))
                .collect(),
            None => self.icons.values().collect(),
        };

        let query = self.search_query.to_lowercase();
        let mut icons: Vec<IconView> = scoped
            .into_iter()
            .filter(|icon| {
                query.is_empty()
                    || icon.name.to_lowercase().contains(&query)
                    || icon.original_name.to_lowercase().contains(&query)
            })
            .map(|icon| IconView {
                icon_id: icon.id,
                name: icon.name.clone(),
                original_name: icon.original_name.clone(),
                view_box: icon.view_box.clone(),
                collection_name: self.collection_name_for(icon.id),
                in_batch_selection: self.batch_selection.contains(&icon.id),
            })
            .collect();

        match self.sort_key {
            SortKey::Name => icons.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::CollectionName => icons.sort_by(|a, b| {
                a.collection_name
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.collection_name.as_deref().unwrap_or(""))
            }),
        }

        let collections = self
            .collections
            .values()
            .map(|collection| CollectionView {
                collection_id: collection.id,
                name: collection.name.clone(),
                description: collection.description.clone(),
                icon_count: collection.icons.len(),
            })
            .collect();

        AppViewModel {
            icons,
            collections,
            icon_count: self.icons.len(),
            selected_icon: self.selected_icon,
            selected_collection: self.selected_collection,
            search_query: self.search_query.clone(),
            batch_mode: self.batch_mode,
            batch_selection: self.batch_selection.clone(),
            sort_key: self.sort_key,
            last_import: self.last_import.clone(),
            last_export: self.last_export.clone(),
            dirty: self.dirty,
        }
    }
}
