use msgscope::persistence::{
    apply_state, capture_state, load_state_from_path, save_state_to_path, state_from_json,
    state_to_json,
};
use msgscope::{DatasetSync, EventKind, MessengerEvent, SourceRecord};

fn populated_sync() -> DatasetSync {
    let mut sync = DatasetSync::new();
    sync.apply_source_list(vec![
        SourceRecord {
            id: "b".into(),
            name: "B".into(),
            active: false,
            exports_diagnostic_api: true,
            info: None,
        },
        SourceRecord {
            id: "a".into(),
            name: "A".into(),
            active: true,
            exports_diagnostic_api: false,
            info: None,
        },
    ]);
    sync.apply_push(
        "a",
        MessengerEvent {
            kind: EventKind::Response,
            sender: "host".into(),
            receiver: "webview".into(),
            method: "resolve".into(),
            correlation_id: Some("c9".into()),
            size: 77,
            error: Some("rejected".into()),
        },
    );
    sync.select("a");
    sync
}

#[test]
fn persist_then_restore_round_trips_dataset_and_selection() {
    let sync = populated_sync();
    let json = state_to_json(&capture_state(&sync)).unwrap();
    let restored = apply_state(state_from_json(&json).unwrap());

    assert_eq!(restored.selected_id(), sync.selected_id());
    assert_eq!(restored.dataset(), sync.dataset());
}

#[test]
fn selection_key_round_trips() {
    // The snapshot must carry the selection under one explicit field name on
    // both the save and the restore path.
    let json = state_to_json(&capture_state(&populated_sync())).unwrap();
    assert!(json.contains("\"selected_source\": \"a\""));

    let restored = apply_state(state_from_json(&json).unwrap());
    assert_eq!(restored.selected_id().map(String::as_str), Some("a"));
}

#[test]
fn dataset_pairs_preserve_iteration_order() {
    let sync = populated_sync();
    let json = state_to_json(&capture_state(&sync)).unwrap();
    let restored = apply_state(state_from_json(&json).unwrap());

    let ids: Vec<&str> = restored
        .dataset()
        .iter_in_order()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(state_from_json("{\"datasetSrc\": 42}").is_err());
    assert!(state_from_json("not json at all").is_err());
}

#[test]
fn missing_or_malformed_file_restores_empty_state() {
    let restored =
        msgscope::persistence::restore_or_default(std::path::Path::new("/nonexistent/state.json"));
    assert!(restored.dataset().is_empty());
    assert!(restored.selected_id().is_none());
}

#[test]
fn file_round_trip() {
    let sync = populated_sync();
    let path = std::env::temp_dir().join("msgscope_persistence_test.json");

    save_state_to_path(&capture_state(&sync), &path).unwrap();
    let restored = apply_state(load_state_from_path(&path).unwrap());
    let _ = std::fs::remove_file(&path);

    assert_eq!(restored.dataset(), sync.dataset());
    assert_eq!(restored.selected_id(), sync.selected_id());
}

#[test]
fn empty_selection_restores_as_none() {
    let sync = DatasetSync::new();
    let json = state_to_json(&capture_state(&sync)).unwrap();
    let restored = apply_state(state_from_json(&json).unwrap());
    assert!(restored.selected_id().is_none());
}
