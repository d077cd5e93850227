//! Dark mode initialization and toggle.
//!
//! Reads the preference from `localStorage`, falling back to the system
//! color scheme, and applies a `data-theme` attribute to `<html>`. Toggling
//! writes the choice back to `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "gridline_dark";

#[cfg(feature = "hydrate")]
fn stored_preference(window: &web_sys::Window) -> Option<bool> {
    let storage = window.local_storage().ok().flatten()?;
    let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Some(value == "true")
}

/// Read the dark mode preference: the stored choice when present, else the
/// system `prefers-color-scheme` setting.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Some(stored) = stored_preference(&window) {
            return stored;
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element());
        if let Some(el) = root {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
            }
        }
    }
    next
}
