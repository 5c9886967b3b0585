use serde_json::json;

use super::*;

fn record(id: &str) -> Record {
    Record { id: id.to_owned(), kind: RecordKind::Notice, data: json!({ "title": id }) }
}

#[test]
fn begin_load_clears_error() {
    let mut state = RecordsState { error: Some("boom".to_owned()), ..RecordsState::default() };
    state.begin_load();
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn successful_load_replaces_items() {
    let mut state = RecordsState { items: vec![record("old")], loading: true, error: None };
    state.finish_load(Ok(vec![record("a"), record("b")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn failed_load_keeps_items_and_reports() {
    let mut state = RecordsState { items: vec![record("old")], loading: true, error: None };
    state.finish_load(Err(ContentError::Forbidden));
    assert_eq!(state.items, vec![record("old")]);
    assert_eq!(state.error.as_deref(), Some("admin access required"));
}

#[test]
fn remove_drops_matching_record() {
    let mut state = RecordsState { items: vec![record("a"), record("b")], ..RecordsState::default() };
    state.remove("a");
    assert_eq!(state.items, vec![record("b")]);
}
