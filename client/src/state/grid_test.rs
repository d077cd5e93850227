use super::*;
use crate::state::columns::ColumnsState;

fn row(json: serde_json::Value) -> Row {
    json.as_object().cloned().unwrap()
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn default_state_is_idle_with_no_rows() {
    let grid = GridState::default();
    assert_eq!(grid.phase, FetchPhase::Idle);
    assert!(grid.rows.is_empty());
    assert!(grid.endpoint.is_empty());
}

#[test]
fn set_endpoint_does_not_change_phase() {
    let mut grid = GridState::default();
    grid.set_endpoint("https://example.test/api/records");
    assert_eq!(grid.endpoint, "https://example.test/api/records");
    assert_eq!(grid.phase, FetchPhase::Idle);
}

#[test]
fn begin_fetch_enters_loading_and_keeps_rows() {
    let mut grid = GridState::default();
    grid.finish_fetch(vec![row(serde_json::json!({ "id": 1, "name": "A" }))]);
    grid.begin_fetch();
    assert_eq!(grid.phase, FetchPhase::Loading);
    assert_eq!(grid.rows.len(), 1);
}

#[test]
fn finish_fetch_stores_rows_and_enters_ready() {
    let mut grid = GridState::default();
    grid.begin_fetch();
    grid.finish_fetch(vec![row(serde_json::json!({ "id": 1, "name": "A" }))]);
    assert_eq!(grid.phase, FetchPhase::Ready);
    assert_eq!(grid.rows.len(), 1);
    assert_eq!(grid.rows[0].get("name"), Some(&serde_json::json!("A")));
}

#[test]
fn fail_fetch_keeps_rows_from_before_the_call() {
    let mut grid = GridState::default();
    grid.finish_fetch(vec![row(serde_json::json!({ "id": 1 }))]);
    grid.begin_fetch();
    grid.fail_fetch("request failed: 500".to_owned());
    assert_eq!(grid.phase, FetchPhase::Failed("request failed: 500".to_owned()));
    assert_eq!(grid.rows.len(), 1);
}

#[test]
fn fetch_restarts_from_failed_and_ready() {
    let mut grid = GridState::default();
    grid.fail_fetch("boom".to_owned());
    grid.begin_fetch();
    assert_eq!(grid.phase, FetchPhase::Loading);

    grid.finish_fetch(Vec::new());
    grid.begin_fetch();
    assert_eq!(grid.phase, FetchPhase::Loading);
}

#[test]
fn last_resolved_fetch_wins() {
    let mut grid = GridState::default();
    grid.begin_fetch();
    grid.begin_fetch();
    grid.finish_fetch(vec![row(serde_json::json!({ "id": 1 }))]);
    grid.finish_fetch(vec![row(serde_json::json!({ "id": 2 })), row(serde_json::json!({ "id": 3 }))]);
    assert_eq!(grid.rows.len(), 2);
    assert_eq!(grid.phase, FetchPhase::Ready);
}

#[test]
fn empty_result_is_ready_not_idle() {
    let mut grid = GridState::default();
    grid.begin_fetch();
    grid.finish_fetch(Vec::new());
    assert_eq!(grid.phase, FetchPhase::Ready);
    assert!(grid.rows.is_empty());
}

// =============================================================
// Title / subtitle projection
// =============================================================

#[test]
fn title_prefers_explicit_key() {
    let mut grid = GridState::default();
    grid.title_key = "name".to_owned();
    let columns = ColumnsState::new(Vec::new());
    let alice = row(serde_json::json!({ "name": "Alice", "age": 30 }));
    assert_eq!(grid.title_for(&alice, columns.snapshot()), Some("Alice".to_owned()));
}

#[test]
fn title_falls_back_to_first_descriptor_key() {
    let grid = GridState::default();
    let columns = ColumnsState::new(vec![
        ColumnDescriptor::new("Name", "name", "string"),
        ColumnDescriptor::new("Age", "age", "number"),
    ]);
    let alice = row(serde_json::json!({ "name": "Alice", "age": 30 }));
    assert_eq!(grid.title_for(&alice, columns.snapshot()), Some("Alice".to_owned()));
}

#[test]
fn subtitle_falls_back_to_second_descriptor_key() {
    let grid = GridState::default();
    let columns = ColumnsState::default();
    let bob = row(serde_json::json!({ "name": "Bob", "date": "2024-01-01" }));
    assert_eq!(grid.subtitle_for(&bob, columns.snapshot()), Some("2024-01-01".to_owned()));
}

#[test]
fn subtitle_is_none_with_single_descriptor_and_no_explicit_key() {
    let grid = GridState::default();
    let columns = ColumnsState::new(vec![ColumnDescriptor::new("Name", "name", "string")]);
    let bob = row(serde_json::json!({ "name": "Bob" }));
    assert_eq!(grid.subtitle_for(&bob, columns.snapshot()), None);
}

#[test]
fn title_is_none_when_registry_empty_and_no_explicit_key() {
    let grid = GridState::default();
    let columns = ColumnsState::new(Vec::new());
    let bob = row(serde_json::json!({ "name": "Bob" }));
    assert_eq!(grid.title_for(&bob, columns.snapshot()), None);
}

#[test]
fn projection_of_missing_field_is_none() {
    let mut grid = GridState::default();
    grid.title_key = "missing".to_owned();
    let columns = ColumnsState::default();
    let bob = row(serde_json::json!({ "name": "Bob" }));
    assert_eq!(grid.title_for(&bob, columns.snapshot()), None);
}

#[test]
fn projection_formats_non_string_scalars() {
    let mut grid = GridState::default();
    grid.title_key = "amount".to_owned();
    let columns = ColumnsState::default();
    let entry = row(serde_json::json!({ "amount": 42 }));
    assert_eq!(grid.title_for(&entry, columns.snapshot()), Some("42".to_owned()));
}
