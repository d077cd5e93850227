//! Endpoint entry row: URL input and fetch button.

use leptos::prelude::*;

use crate::state::grid::GridState;

/// URL input plus a "Fetch Data" button. Hidden entirely for the
/// fixed-endpoint variant; typing updates the endpoint without fetching.
#[component]
pub fn EndpointBar(on_fetch: Callback<()>) -> impl IntoView {
    let grid = expect_context::<RwSignal<GridState>>();

    view! {
        <div class="endpoint-bar">
            <p class="endpoint-bar__hint">"Enter the API URL to retrieve data"</p>
            <div class="endpoint-bar__row">
                <label class="endpoint-bar__label" for="endpoint-url">"API URL"</label>
                <input
                    id="endpoint-url"
                    class="endpoint-bar__input"
                    type="text"
                    placeholder="https://example.test/api/records"
                    prop:value=move || grid.get().endpoint.clone()
                    on:input=move |ev| grid.update(|g| g.set_endpoint(&event_target_value(&ev)))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_fetch.run(());
                        }
                    }
                />
                <button class="btn btn--primary endpoint-bar__fetch" on:click=move |_| on_fetch.run(())>
                    "Fetch Data"
                </button>
            </div>
        </div>
    }
}
