use iconforge_core::{update, AppState, CollectionId, IconId, ImportedIcon, Msg};

fn imported(name: &str) -> ImportedIcon {
    ImportedIcon {
        name: name.to_string(),
        original_name: format!("{name}.svg"),
        content: r#"<path d="M1 2"/>"#.to_string(),
        view_box: None,
    }
}

fn import_one(state: AppState, name: &str) -> (AppState, IconId) {
    let (state, _) = update(
        state,
        Msg::IconsImported {
            icons: vec![imported(name)],
            failed: 0,
        },
    );
    let id = state
        .view()
        .icons
        .iter()
        .find(|icon| icon.name == name)
        .expect("imported icon visible in view")
        .icon_id;
    (state, id)
}

fn create_collection(state: AppState, name: &str) -> (AppState, CollectionId) {
    let (state, _) = update(
        state,
        Msg::CollectionCreated {
            name: name.to_string(),
            description: None,
        },
    );
    let id = state
        .view()
        .collections
        .iter()
        .find(|collection| collection.name == name)
        .expect("created collection visible in view")
        .collection_id;
    (state, id)
}

#[test]
fn create_edit_and_remove_collection() {
    let (state, collection_id) = create_collection(AppState::new(), "Arrows");

    let (state, _) = update(
        state,
        Msg::CollectionEdited {
            collection_id,
            name: "Navigation".to_string(),
            description: Some("directional icons".to_string()),
        },
    );
    let view = state.view();
    assert_eq!(view.collections.len(), 1);
    assert_eq!(view.collections[0].name, "Navigation");
    assert_eq!(
        view.collections[0].description.as_deref(),
        Some("directional icons")
    );

    let (state, _) = update(state, Msg::CollectionRemoved(collection_id));
    assert!(state.view().collections.is_empty());
}

#[test]
fn removing_collection_does_not_cascade_to_icons() {
    let (state, icon_id) = import_one(AppState::new(), "arrow");
    let (state, collection_id) = create_collection(state, "Arrows");
    let (state, _) = update(
        state,
        Msg::IconAddedToCollection {
            icon_id,
            collection_id,
        },
    );
    let (state, _) = update(state, Msg::CollectionSelected(Some(collection_id)));

    let (state, _) = update(state, Msg::CollectionRemoved(collection_id));

    let view = state.view();
    assert_eq!(view.icon_count, 1);
    assert_eq!(view.selected_collection, None);
}

#[test]
fn removing_other_collection_keeps_scope() {
    let (state, keep_id) = create_collection(AppState::new(), "Keep");
    let (state, drop_id) = create_collection(state, "Drop");
    let (state, _) = update(state, Msg::CollectionSelected(Some(keep_id)));

    let (state, _) = update(state, Msg::CollectionRemoved(drop_id));

    assert_eq!(state.view().selected_collection, Some(keep_id));
}

#[test]
fn duplicate_membership_is_rejected() {
    let (state, icon_id) = import_one(AppState::new(), "arrow");
    let (state, collection_id) = create_collection(state, "Arrows");

    let msg = Msg::IconAddedToCollection {
        icon_id,
        collection_id,
    };
    let (state, _) = update(state, msg.clone());
    let (mut state, _) = update(state, msg);

    assert_eq!(state.view().collections[0].icon_count, 1);
    assert!(state.consume_dirty());
    // A third attempt changes nothing at all.
    let (mut state, _) = update(
        state,
        Msg::IconAddedToCollection {
            icon_id,
            collection_id,
        },
    );
    assert!(!state.consume_dirty());
}

#[test]
fn membership_does_not_validate_icon_existence() {
    let (state, icon_id) = import_one(AppState::new(), "arrow");
    let (state, collection_id) = create_collection(state, "Arrows");
    let (state, _) = update(state, Msg::IconRemoved(icon_id));

    // The id no longer resolves to an icon, but the pair is still recorded.
    let (state, _) = update(
        state,
        Msg::IconAddedToCollection {
            icon_id,
            collection_id,
        },
    );
    assert_eq!(state.view().collections[0].icon_count, 1);
}

#[test]
fn remove_membership_keeps_other_collections() {
    let (state, icon_id) = import_one(AppState::new(), "arrow");
    let (state, first) = create_collection(state, "First");
    let (state, second) = create_collection(state, "Second");
    let (state, _) = update(
        state,
        Msg::IconAddedToCollection {
            icon_id,
            collection_id: first,
        },
    );
    let (state, _) = update(
        state,
        Msg::IconAddedToCollection {
            icon_id,
            collection_id: second,
        },
    );

    let (state, _) = update(
        state,
        Msg::IconRemovedFromCollection {
            icon_id,
            collection_id: first,
        },
    );

    let view = state.view();
    let by_name = |name: &str| {
        view.collections
            .iter()
            .find(|c| c.name == name)
            .unwrap()
            .icon_count
    };
    assert_eq!(by_name("First"), 0);
    assert_eq!(by_name("Second"), 1);
}
