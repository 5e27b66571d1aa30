use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Operations on unknown ids are no-ops; nothing here can fail or panic for
/// a well-formed payload.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesDropped(paths) => {
            if paths.is_empty() {
                Vec::new()
            } else {
                vec![Effect::LoadSvgFiles { paths }]
            }
        }
        Msg::IconsImported { icons, failed } => {
            state.apply_import(icons, failed);
            Vec::new()
        }
        Msg::IconRemoved(icon_id) => {
            state.remove_icon(icon_id);
            Vec::new()
        }
        Msg::IconRenamed { icon_id, name } => {
            state.rename_icon(icon_id, name);
            Vec::new()
        }
        Msg::IconSelected(icon_id) => {
            state.select_icon(icon_id);
            Vec::new()
        }
        Msg::CollectionCreated { name, description } => {
            state.create_collection(name, description);
            Vec::new()
        }
        Msg::CollectionEdited {
            collection_id,
            name,
            description,
        } => {
            state.edit_collection(collection_id, name, description);
            Vec::new()
        }
        Msg::CollectionRemoved(collection_id) => {
            state.remove_collection(collection_id);
            Vec::new()
        }
        Msg::CollectionSelected(collection_id) => {
            state.select_collection(collection_id);
            Vec::new()
        }
        Msg::SearchChanged(query) => {
            state.set_search_query(query);
            Vec::new()
        }
        Msg::IconAddedToCollection {
            icon_id,
            collection_id,
        } => {
            state.add_membership(icon_id, collection_id);
            Vec::new()
        }
        Msg::IconRemovedFromCollection {
            icon_id,
            collection_id,
        } => {
            state.remove_membership(icon_id, collection_id);
            Vec::new()
        }
        Msg::BatchModeSet(enabled) => {
            state.set_batch_mode(enabled);
            Vec::new()
        }
        Msg::BatchSelectionReplaced(selection) => {
            state.replace_batch_selection(selection);
            Vec::new()
        }
        Msg::SortChanged(sort_key) => {
            state.set_sort_key(sort_key);
            Vec::new()
        }
        Msg::ExportRequested { collection } => match state.resolve_export(collection) {
            Some((collection, entries)) => {
                vec![Effect::WriteIconPack {
                    collection,
                    entries,
                }]
            }
            None => Vec::new(),
        },
        Msg::ExportFinished {
            icon_count,
            succeeded,
        } => {
            state.set_export_stats(icon_count, succeeded);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
