use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read and normalize the given files on the engine.
    LoadSvgFiles { paths: Vec<PathBuf> },
    /// Write an icon-pack module for the given entries.
    WriteIconPack {
        collection: Option<PackCollection>,
        entries: Vec<PackEntry>,
    },
}

/// Collection identity carried into an export, used for the output filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackCollection {
    pub collection_id: crate::CollectionId,
    pub name: String,
}

/// One icon resolved for export, detached from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    pub name: String,
    pub original_name: String,
    pub content: String,
    pub view_box: Option<String>,
}
