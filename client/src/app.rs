//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::grid::GridPage;
use crate::state::columns::ColumnsState;
use crate::state::grid::GridState;
use crate::state::options::GridOptions;
use crate::state::ui::UiState;
use crate::state::viewport::ViewportState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let options = GridOptions::default();

    // The fixed-endpoint variant preloads the URL before first render.
    let mut grid_seed = GridState::default();
    if let Some(url) = &options.api_url {
        grid_seed.set_endpoint(url);
    }

    let columns = RwSignal::new(ColumnsState::default());
    let grid = RwSignal::new(grid_seed);
    let viewport = RwSignal::new(ViewportState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(columns);
    provide_context(grid);
    provide_context(viewport);
    provide_context(ui);
    provide_context(options);

    view! {
        <Stylesheet id="leptos" href="/pkg/gridline.css"/>
        <Title text="Gridline"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GridPage/>
            </Routes>
        </Router>
    }
}
