//! Grid page: toolbar, endpoint entry, and the data grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route. It owns fetch orchestration (spawning the GET,
//! guarding against post-teardown state writes) and wires the viewport
//! observer; rendering details live in `components`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::endpoint_bar::EndpointBar;
use crate::components::grid_view::GridView;
use crate::net::api;
use crate::state::grid::GridState;
use crate::state::options::GridOptions;
use crate::state::ui::UiState;
use crate::state::viewport::ViewportState;

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

const MISSING_ENDPOINT_MESSAGE: &str = "no endpoint configured";

/// Trimmed endpoint URL, or `None` when nothing usable was entered.
fn normalized_endpoint(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Whether the auto-fetch effect should fire for the current endpoint.
/// Repeat URLs are skipped so a finished fetch does not immediately retrigger.
fn should_auto_fetch(raw: &str, last: Option<&str>) -> bool {
    match normalized_endpoint(raw) {
        Some(url) => last != Some(url.as_str()),
        None => false,
    }
}

/// Kick off one fetch attempt against the current endpoint.
///
/// An empty URL fails immediately instead of parking the page in the
/// spinner. The `alive` flag is checked when the response resolves so a
/// torn-down page never receives the result.
fn start_fetch(grid: RwSignal<GridState>, alive: Arc<AtomicBool>) {
    let Some(url) = normalized_endpoint(&grid.get_untracked().endpoint) else {
        grid.update(|g| g.fail_fetch(MISSING_ENDPOINT_MESSAGE.to_owned()));
        return;
    };

    grid.update(|g| g.begin_fetch());
    leptos::task::spawn_local(async move {
        let result = api::fetch_records(&url).await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        match result {
            Ok(rows) => grid.update(|g| g.finish_fetch(rows)),
            Err(err) => {
                leptos::logging::warn!("records fetch: {err}");
                grid.update(|g| g.fail_fetch(err.to_string()));
            }
        }
    });
}

/// The grid workspace page.
#[component]
pub fn GridPage() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let viewport = expect_context::<RwSignal<ViewportState>>();
    let options = expect_context::<GridOptions>();

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    crate::util::viewport::observe(viewport);

    // Apply the stored theme once the page is interactive.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    if options.auto_fetch_on_change {
        let alive_auto = alive.clone();
        let last_fetched = RwSignal::new(None::<String>);
        Effect::new(move || {
            let endpoint = grid.get().endpoint.clone();
            if !should_auto_fetch(&endpoint, last_fetched.get_untracked().as_deref()) {
                return;
            }
            last_fetched.set(normalized_endpoint(&endpoint));
            start_fetch(grid, alive_auto.clone());
        });
    }

    let alive_click = alive.clone();
    let on_fetch = Callback::new(move |()| start_fetch(grid, alive_click.clone()));

    view! {
        <div class="grid-page">
            <header class="grid-page__header toolbar">
                <span class="toolbar__title">"Configurable Grid"</span>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </header>

            {options.endpoint_editable().then(|| view! { <EndpointBar on_fetch=on_fetch/> })}

            <GridView/>
        </div>
    }
}
