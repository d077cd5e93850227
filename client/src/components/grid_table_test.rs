use super::*;
use crate::state::viewport::{ViewportMode, ViewportState};

fn row(json: serde_json::Value) -> Row {
    json.as_object().cloned().unwrap()
}

fn registry(descriptors: &[(&str, &str, &str)]) -> ColumnsState {
    ColumnsState::new(
        descriptors
            .iter()
            .map(|(label, key, kind)| ColumnDescriptor::new(label, key, kind))
            .collect(),
    )
}

// =============================================================
// Header
// =============================================================

#[test]
fn header_has_one_cell_per_descriptor_in_registry_order() {
    let columns = registry(&[
        ("Name", "name", "string"),
        ("Date", "date", "date"),
        ("Amount", "amount", "number"),
    ]);
    assert_eq!(header_labels(columns.snapshot()), vec!["Name", "Date", "Amount"]);
}

#[test]
fn header_is_empty_for_empty_registry() {
    let columns = ColumnsState::new(Vec::new());
    assert!(header_labels(columns.snapshot()).is_empty());
}

#[test]
fn hint_appears_only_with_an_editable_header() {
    assert_eq!(editor_hint(true), Some("Set each column's label, key and data type"));
    assert_eq!(editor_hint(false), None);
}

// =============================================================
// Body cells
// =============================================================

#[test]
fn two_column_registry_renders_title_and_subtitle_cells() {
    let grid = GridState::default();
    let columns = ColumnsState::default();
    let bob = row(serde_json::json!({ "name": "Bob", "date": "2024-01-01" }));
    assert_eq!(row_cells(&grid, columns.snapshot(), &bob), vec!["Bob", "2024-01-01"]);
}

#[test]
fn columns_past_the_second_render_raw_values() {
    let grid = GridState::default();
    let columns = registry(&[
        ("Name", "name", "string"),
        ("Date", "date", "date"),
        ("Amount", "amount", "number"),
    ]);
    let entry = row(serde_json::json!({ "name": "Bob", "date": "2024-01-01", "amount": 12.5 }));
    assert_eq!(
        row_cells(&grid, columns.snapshot(), &entry),
        vec!["Bob", "2024-01-01", "12.5"]
    );
}

#[test]
fn unmatched_keys_render_empty_cells() {
    let grid = GridState::default();
    let mut columns = ColumnsState::default();
    columns.add();
    let entry = row(serde_json::json!({ "name": "Bob", "date": "2024-01-01" }));
    assert_eq!(
        row_cells(&grid, columns.snapshot(), &entry),
        vec!["Bob", "2024-01-01", ""]
    );
}

#[test]
fn explicit_title_key_overrides_first_column() {
    let mut grid = GridState::default();
    grid.title_key = "date".to_owned();
    let columns = ColumnsState::default();
    let entry = row(serde_json::json!({ "name": "Bob", "date": "2024-01-01" }));
    assert_eq!(
        row_cells(&grid, columns.snapshot(), &entry),
        vec!["2024-01-01", "2024-01-01"]
    );
}

#[test]
fn row_cells_is_idempotent() {
    let grid = GridState::default();
    let columns = ColumnsState::default();
    let entry = row(serde_json::json!({ "name": "Bob", "date": "2024-01-01" }));
    let first = row_cells(&grid, columns.snapshot(), &entry);
    let second = row_cells(&grid, columns.snapshot(), &entry);
    assert_eq!(first, second);
}

// =============================================================
// End-to-end projection scenario
// =============================================================

#[test]
fn desktop_scenario_projects_name_and_date() {
    let mut grid = GridState::default();
    let columns = ColumnsState::default();
    grid.finish_fetch(vec![row(serde_json::json!({ "name": "Bob", "date": "2024-01-01" }))]);

    assert_eq!(ViewportState::new(800.0).mode(), ViewportMode::Desktop);
    assert_eq!(header_labels(columns.snapshot()), vec!["Name", "Date"]);
    assert_eq!(
        row_cells(&grid, columns.snapshot(), &grid.rows[0]),
        vec!["Bob", "2024-01-01"]
    );
}
