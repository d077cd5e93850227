//! Layout selection between the desktop table and the mobile card list.
//!
//! ARCHITECTURE
//! ============
//! What the grid area shows is a pure function of fetch phase and viewport
//! mode. The component dispatches to `grid_table` or `record_list`; this
//! module owns only the selection plus the loading and error surfaces.

use leptos::prelude::*;

use crate::components::grid_table::GridTable;
use crate::components::record_list::RecordList;
use crate::state::grid::{FetchPhase, GridState};
use crate::state::viewport::{ViewportMode, ViewportState};

#[cfg(test)]
#[path = "grid_view_test.rs"]
mod grid_view_test;

/// What the grid area shows for a given phase and viewport mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLayout {
    /// Centered progress indicator.
    Spinner,
    /// Title/subtitle card list.
    Cards,
    /// Full column table.
    Table,
}

/// Select the layout for the current phase and mode. A failed fetch keeps
/// the last layout visible under the error banner instead of blanking the
/// grid.
#[must_use]
pub fn select_layout(phase: &FetchPhase, mode: ViewportMode) -> GridLayout {
    if matches!(phase, FetchPhase::Loading) {
        return GridLayout::Spinner;
    }
    match mode {
        ViewportMode::Mobile => GridLayout::Cards,
        ViewportMode::Desktop => GridLayout::Table,
    }
}

/// The error banner text for a phase, if any.
#[must_use]
pub fn error_banner(phase: &FetchPhase) -> Option<String> {
    match phase {
        FetchPhase::Failed(message) => Some(message.clone()),
        FetchPhase::Idle | FetchPhase::Loading | FetchPhase::Ready => None,
    }
}

/// Grid area: error banner plus spinner, table, or card list.
#[component]
pub fn GridView() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridState>>();
    let viewport = expect_context::<RwSignal<ViewportState>>();

    let layout = move || select_layout(&grid.get().phase, viewport.get().mode());

    view! {
        <div class="grid-view">
            <Show when=move || error_banner(&grid.get().phase).is_some()>
                <p class="grid-view__error">
                    {move || error_banner(&grid.get().phase).unwrap_or_default()}
                </p>
            </Show>
            {move || match layout() {
                GridLayout::Spinner => view! {
                    <div class="grid-view__loading">
                        <span class="grid-view__spinner" aria-label="Loading"></span>
                    </div>
                }
                    .into_any(),
                GridLayout::Cards => view! { <RecordList/> }.into_any(),
                GridLayout::Table => view! { <GridTable/> }.into_any(),
            }}
        </div>
    }
}
