use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User dropped or picked files for import.
    FilesDropped(Vec<PathBuf>),
    /// Engine finished a whole import batch; applied as one mutation.
    IconsImported {
        icons: Vec<crate::ImportedIcon>,
        failed: usize,
    },
    /// User deleted an icon.
    IconRemoved(crate::IconId),
    /// User renamed an icon.
    IconRenamed {
        icon_id: crate::IconId,
        name: String,
    },
    /// User selected an icon for the detail view (or cleared it).
    IconSelected(Option<crate::IconId>),
    /// User created a collection.
    CollectionCreated {
        name: String,
        description: Option<String>,
    },
    /// User renamed a collection or edited its description.
    CollectionEdited {
        collection_id: crate::CollectionId,
        name: String,
        description: Option<String>,
    },
    /// User deleted a collection. Member icons survive.
    CollectionRemoved(crate::CollectionId),
    /// User scoped the icon list to a collection (or cleared the scope).
    CollectionSelected(Option<crate::CollectionId>),
    /// User edited the search box.
    SearchChanged(String),
    /// User added an icon to a collection.
    IconAddedToCollection {
        icon_id: crate::IconId,
        collection_id: crate::CollectionId,
    },
    /// User removed an icon from a collection.
    IconRemovedFromCollection {
        icon_id: crate::IconId,
        collection_id: crate::CollectionId,
    },
    /// User entered or left batch selection mode.
    BatchModeSet(bool),
    /// User changed the set of icons checked in batch mode.
    BatchSelectionReplaced(Vec<crate::IconId>),
    /// User changed the icon list ordering.
    SortChanged(crate::SortKey),
    /// User asked for an icon-pack export, scoped to a collection or all.
    ExportRequested {
        collection: Option<crate::CollectionId>,
    },
    /// Engine finished writing an export.
    ExportFinished { icon_count: usize, succeeded: bool },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
