//! IconForge core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, PackCollection, PackEntry};
pub use msg::Msg;
pub use state::{
    AppState, Collection, CollectionId, Icon, IconId, ImportedIcon, SortKey,
};
pub use update::update;
pub use view_model::{
    AppViewModel, CollectionView, ExportStats, IconView, ImportStats,
};
