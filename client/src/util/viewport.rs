//! Browser viewport width access and resize subscription.
//!
//! The grid reads viewport width from a context-provided signal rather than
//! querying the window directly. This module owns the browser side: seeding
//! the signal from `window.innerWidth` and feeding resize events into it.
//! Tests drive layout by setting the signal, no real display needed.
//!
//! TRADE-OFFS
//! ==========
//! Listener wiring is browser-only behavior; SSR paths no-op and leave the
//! signal at its desktop-sized default until hydration.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

use crate::state::viewport::ViewportState;

/// Current window width in logical pixels, or `None` outside a browser.
#[must_use]
pub fn current_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok().and_then(|value| value.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Seed `viewport` from the real window and keep it updated on resize.
/// The listener is removed again when the owning scope is disposed.
pub fn observe(viewport: RwSignal<ViewportState>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if let Some(width) = current_width() {
            viewport.set(ViewportState::new(width));
        }

        let Some(window) = web_sys::window() else {
            return;
        };

        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(width) = current_width() {
                viewport.set(ViewportState::new(width));
            }
        }) as Box<dyn FnMut()>);

        if window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("viewport: failed to attach resize listener");
            return;
        }

        // The closure lives in the cleanup handler, which both detaches the
        // listener and drops the callback when the page unmounts.
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = viewport;
    }
}
