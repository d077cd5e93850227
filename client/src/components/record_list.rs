//! Mobile card list with title/subtitle key pickers.
//!
//! ARCHITECTURE
//! ============
//! Cards show only the title/subtitle projection. The pickers are populated
//! from the first fetched row's field names; before any fetch they fall back
//! to a single option holding the current selection.

use leptos::prelude::*;

use crate::net::types::Row;
use crate::state::columns::ColumnsState;
use crate::state::grid::GridState;

#[cfg(test)]
#[path = "record_list_test.rs"]
mod record_list_test;

/// Picker options: the first fetched row's field names, or the current
/// selection alone when nothing is fetched yet.
#[must_use]
pub fn field_options(rows: &[Row], current: &str) -> Vec<String> {
    match rows.first() {
        Some(first) => first.keys().cloned().collect(),
        None => vec![current.to_owned()],
    }
}

/// Vertical list of title/subtitle cards plus the key pickers.
#[component]
pub fn RecordList() -> impl IntoView {
    let columns = expect_context::<RwSignal<ColumnsState>>();
    let grid = expect_context::<RwSignal<GridState>>();

    // Seed the explicit keys from the registry the first time the card list
    // mounts, so the pickers show a concrete selection.
    Effect::new(move || {
        let state = grid.get_untracked();
        if !state.title_key.is_empty() || !state.subtitle_key.is_empty() {
            return;
        }
        let registry = columns.get_untracked();
        if let [first, second, ..] = registry.snapshot() {
            let title = first.key.clone();
            let subtitle = second.key.clone();
            grid.update(|g| {
                g.title_key = title;
                g.subtitle_key = subtitle;
            });
        }
    });

    view! {
        <div class="record-list">
            <p class="record-list__hint">"Choose the fields shown as title and subtitle"</p>
            <div class="record-list__pickers">
                <label class="record-list__picker">
                    "Title"
                    <select
                        class="record-list__select"
                        prop:value=move || grid.get().title_key.clone()
                        on:change=move |ev| grid.update(|g| g.title_key = event_target_value(&ev))
                    >
                        {move || {
                            let state = grid.get();
                            field_options(&state.rows, &state.title_key)
                                .into_iter()
                                .map(|field| {
                                    let label = field.clone();
                                    view! { <option value=field>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="record-list__picker">
                    "Subtitle"
                    <select
                        class="record-list__select"
                        prop:value=move || grid.get().subtitle_key.clone()
                        on:change=move |ev| grid.update(|g| g.subtitle_key = event_target_value(&ev))
                    >
                        {move || {
                            let state = grid.get();
                            field_options(&state.rows, &state.subtitle_key)
                                .into_iter()
                                .map(|field| {
                                    let label = field.clone();
                                    view! { <option value=field>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
            </div>
            <ul class="record-list__items">
                {move || {
                    let grid_state = grid.get();
                    let columns_state = columns.get();
                    grid_state
                        .rows
                        .iter()
                        .map(|entry| {
                            let title = grid_state
                                .title_for(entry, columns_state.snapshot())
                                .unwrap_or_default();
                            let subtitle = grid_state
                                .subtitle_for(entry, columns_state.snapshot())
                                .unwrap_or_default();
                            view! {
                                <li class="record-list__item">
                                    <span class="record-list__title">{title}</span>
                                    <span class="record-list__subtitle">{subtitle}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
