use mindkey_core::{
    keys, FontSize, KeyValueStore, MemoryStore, NodeId, Settings, TemplateId, Workspace,
    DEFAULT_ROOT_TEXT,
};

#[test]
fn fresh_store_loads_the_default_state() {
    let ws = Workspace::load(MemoryStore::new());
    assert_eq!(ws.forest().len(), 1);
    assert_eq!(ws.forest().text(NodeId(1)), Some(DEFAULT_ROOT_TEXT));
    assert_eq!(ws.templates().len(), 2);
    assert!(ws.ideas().ideas().is_empty());
    assert!(ws.notes().is_empty());
    assert_eq!(*ws.settings(), Settings::default());
}

#[test]
fn a_full_session_survives_a_restart() {
    let mut ws = Workspace::load(MemoryStore::new());

    let child = ws.add_child(NodeId(1)).unwrap();
    ws.rename_node(child, "Sub-idea").unwrap();
    let template = ws.save_template("My layout");
    let idea = ws.save_idea("What if...", "General");
    ws.add_category("Work");
    let note = ws.add_note("plan", "ship it").unwrap();
    ws.update_settings(Settings {
        notifications: false,
        font_size: FontSize::Large,
    });

    let restarted = Workspace::load(ws.into_store());
    assert_eq!(restarted.forest().text(child), Some("Sub-idea"));
    assert!(restarted.templates().get(template).is_some());
    assert_eq!(restarted.ideas().ideas()[0].id, idea);
    assert_eq!(restarted.ideas().categories(), ["General", "Work"]);
    assert_eq!(restarted.notes().get(note).unwrap().content, "ship it");
    assert_eq!(restarted.settings().font_size, FontSize::Large);
    assert!(!restarted.settings().notifications);
}

#[test]
fn applying_a_template_replaces_and_persists_the_forest() {
    let mut ws = Workspace::load(MemoryStore::new());
    ws.add_child(NodeId(1)).unwrap();

    let name = ws.apply_template(TemplateId(2)).unwrap();
    assert_eq!(name, "Problem Solving");
    assert_eq!(ws.forest().len(), 4);

    let restarted = Workspace::load(ws.into_store());
    assert_eq!(restarted.forest().len(), 4);
    assert_eq!(restarted.forest().text(NodeId(1)), Some("Problem"));
}

#[test]
fn applying_a_missing_template_changes_nothing() {
    let mut ws = Workspace::load(MemoryStore::new());
    ws.rename_node(NodeId(1), "before").unwrap();

    assert!(ws.apply_template(TemplateId(404)).is_err());
    assert_eq!(ws.forest().text(NodeId(1)), Some("before"));

    let restarted = Workspace::load(ws.into_store());
    assert_eq!(restarted.forest().text(NodeId(1)), Some("before"));
}

#[test]
fn failed_edits_do_not_clobber_the_persisted_forest() {
    let mut ws = Workspace::load(MemoryStore::new());
    ws.rename_node(NodeId(1), "safe").unwrap();

    assert!(ws.rename_node(NodeId(77), "ghost").is_err());
    assert!(ws.delete_node(NodeId(77)).is_err());

    let restarted = Workspace::load(ws.into_store());
    assert_eq!(restarted.forest().text(NodeId(1)), Some("safe"));
    assert_eq!(restarted.forest().len(), 1);
}

#[test]
fn one_corrupt_key_only_affects_its_own_concern() {
    let mut kv = MemoryStore::new();
    kv.set(keys::NOTES, "][ not json").unwrap();
    kv.set(keys::FOREST, r#"[{"id":3,"text":"mine","children":[]}]"#)
        .unwrap();

    let ws = Workspace::load(kv);
    assert!(ws.notes().is_empty());
    assert_eq!(ws.forest().text(NodeId(3)), Some("mine"));
}

#[test]
fn reset_settings_restores_defaults_and_drops_the_key() {
    let mut ws = Workspace::load(MemoryStore::new());
    ws.update_settings(Settings {
        notifications: false,
        font_size: FontSize::Small,
    });

    ws.reset_settings();
    assert_eq!(*ws.settings(), Settings::default());

    let store = ws.into_store();
    assert!(store.get(keys::SETTINGS).unwrap().is_none());
}

#[test]
fn saved_templates_stay_frozen_while_the_forest_moves_on() {
    let mut ws = Workspace::load(MemoryStore::new());
    let child = ws.add_child(NodeId(1)).unwrap();
    let template = ws.save_template("frozen");

    ws.rename_node(child, "moved on").unwrap();
    ws.delete_node(NodeId(1)).unwrap();

    let stored = ws.templates().get(template).unwrap();
    assert_eq!(stored.nodes[0].text, DEFAULT_ROOT_TEXT);
    assert_eq!(mindkey_core::forest_len(&stored.nodes), 2);
}
