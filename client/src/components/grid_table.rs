//! Desktop table rendering.
//!
//! ARCHITECTURE
//! ============
//! Cell content is computed by pure helpers over the grid state and the
//! descriptor snapshot, so the table body is a deterministic function of
//! its inputs. The first two body cells are always the title/subtitle
//! projections; descriptors past the second render their raw values.

use leptos::prelude::*;

use crate::components::column_editor::ColumnEditorRow;
use crate::net::types::{Row, cell_text};
use crate::state::columns::{ColumnDescriptor, ColumnsState};
use crate::state::grid::GridState;
use crate::state::options::GridOptions;

#[cfg(test)]
#[path = "grid_table_test.rs"]
mod grid_table_test;

/// Header label per descriptor, in registry order.
#[must_use]
pub fn header_labels(snapshot: &[ColumnDescriptor]) -> Vec<String> {
    snapshot.iter().map(|descriptor| descriptor.label.clone()).collect()
}

/// Body cell text for one row: title and subtitle projections first, then
/// raw values for every descriptor past the second.
#[must_use]
pub fn row_cells(grid: &GridState, snapshot: &[ColumnDescriptor], row: &Row) -> Vec<String> {
    let mut cells = vec![
        grid.title_for(row, snapshot).unwrap_or_default(),
        grid.subtitle_for(row, snapshot).unwrap_or_default(),
    ];
    for descriptor in snapshot.iter().skip(2) {
        cells.push(cell_text(row, &descriptor.key));
    }
    cells
}

/// Hint line above the table; present only when the header is editable.
#[must_use]
pub fn editor_hint(editable: bool) -> Option<&'static str> {
    editable.then_some("Set each column's label, key and data type")
}

/// Full column table with an editable or plain header.
#[component]
pub fn GridTable() -> impl IntoView {
    let columns = expect_context::<RwSignal<ColumnsState>>();
    let grid = expect_context::<RwSignal<GridState>>();
    let options = expect_context::<GridOptions>();

    let header = if options.columns_editable {
        view! {
            <ColumnEditorRow/>
        }
        .into_any()
    } else {
        view! {
            <tr class="grid-table__head-row">
                {move || {
                    header_labels(columns.get().snapshot())
                        .into_iter()
                        .map(|label| view! { <th class="grid-table__head-cell">{label}</th> })
                        .collect::<Vec<_>>()
                }}
            </tr>
        }
        .into_any()
    };

    view! {
        <div class="grid-table-wrap">
            {editor_hint(options.columns_editable)
                .map(|text| view! { <p class="grid-table__hint">{text}</p> })}
            <table class="grid-table">
                <thead>{header}</thead>
                <tbody>
                    {move || {
                        let grid_state = grid.get();
                        let columns_state = columns.get();
                        grid_state
                            .rows
                            .iter()
                            .map(|entry| {
                                let cells = row_cells(&grid_state, columns_state.snapshot(), entry);
                                view! {
                                    <tr class="grid-table__row">
                                        {cells
                                            .into_iter()
                                            .map(|cell| view! { <td class="grid-table__cell">{cell}</td> })
                                            .collect::<Vec<_>>()}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
