//! Editable column configuration embedded in the table head.
//!
//! ARCHITECTURE
//! ============
//! Each column renders label/key/type inputs that commit on every input
//! event, matching the immediate-update behavior of the original editor.
//! Out-of-range mutations are logged and ignored rather than corrupting
//! the registry.

use leptos::prelude::*;

use crate::state::columns::{ColumnField, ColumnsState};

#[cfg(test)]
#[path = "column_editor_test.rs"]
mod column_editor_test;

/// Current value of one editor input, empty when the index is stale.
fn field_value(columns: &ColumnsState, index: usize, field: ColumnField) -> String {
    columns.snapshot().get(index).map_or_else(String::new, |descriptor| match field {
        ColumnField::Label => descriptor.label.clone(),
        ColumnField::Key => descriptor.key.clone(),
        ColumnField::Kind => descriptor.kind.clone(),
    })
}

/// Table-head row with per-column editors and a trailing add button.
#[component]
pub fn ColumnEditorRow() -> impl IntoView {
    let columns = expect_context::<RwSignal<ColumnsState>>();

    // Rebuild the row only when the column count changes; edits flow through
    // the per-input value closures so typing does not recreate the inputs.
    let count = Memo::new(move |_| columns.get().len());

    let commit = move |index: usize, field: ColumnField, value: String| {
        let mut applied = false;
        columns.update(|c| applied = c.edit(index, field, &value));
        if !applied {
            leptos::logging::warn!("column edit out of range: {index}");
        }
    };

    let remove = move |index: usize| {
        let mut removed = None;
        columns.update(|c| removed = c.remove(index));
        if removed.is_none() {
            leptos::logging::warn!("column remove out of range: {index}");
        }
    };

    view! {
        <tr class="column-editor">
            {move || {
                (0..count.get())
                    .map(|index| {
                        view! {
                            <th class="column-editor__cell">
                                <label class="column-editor__field">
                                    "Label"
                                    <input
                                        class="column-editor__input"
                                        type="text"
                                        prop:value=move || field_value(&columns.get(), index, ColumnField::Label)
                                        on:input=move |ev| commit(index, ColumnField::Label, event_target_value(&ev))
                                    />
                                </label>
                                <label class="column-editor__field">
                                    "Column Key"
                                    <input
                                        class="column-editor__input"
                                        type="text"
                                        prop:value=move || field_value(&columns.get(), index, ColumnField::Key)
                                        on:input=move |ev| commit(index, ColumnField::Key, event_target_value(&ev))
                                    />
                                </label>
                                <label class="column-editor__field">
                                    "Column Type"
                                    <input
                                        class="column-editor__input"
                                        type="text"
                                        prop:value=move || field_value(&columns.get(), index, ColumnField::Kind)
                                        on:input=move |ev| commit(index, ColumnField::Kind, event_target_value(&ev))
                                    />
                                </label>
                                <button
                                    class="btn btn--icon column-editor__remove"
                                    title="Remove column"
                                    on:click=move |_| remove(index)
                                >
                                    "✕"
                                </button>
                            </th>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <th class="column-editor__add-cell">
                <button
                    class="btn btn--icon column-editor__add"
                    title="Add column"
                    on:click=move |_| columns.update(|c| c.add())
                >
                    "+"
                </button>
            </th>
        </tr>
    }
}
