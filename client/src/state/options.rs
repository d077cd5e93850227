//! Construction-time grid options.
//!
//! DESIGN
//! ======
//! One component covers what used to be two near-identical variants:
//! `api_url: Some(..)` pins the endpoint and hides the URL entry row, `None`
//! lets the user type one. Options are provided once at mount and never
//! change at runtime.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

/// Grid behavior options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridOptions {
    /// Fixed endpoint, or `None` for user entry.
    pub api_url: Option<String>,
    /// Fetch automatically on mount and whenever the endpoint changes.
    pub auto_fetch_on_change: bool,
    /// Show the column editor in the table head.
    pub columns_editable: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            api_url: None,
            auto_fetch_on_change: false,
            columns_editable: true,
        }
    }
}

impl GridOptions {
    /// The fixed-endpoint variant: endpoint preloaded and auto-fetched, URL
    /// entry hidden.
    #[must_use]
    pub fn fixed(url: &str) -> Self {
        Self {
            api_url: Some(url.to_owned()),
            auto_fetch_on_change: true,
            columns_editable: true,
        }
    }

    /// Whether the endpoint entry row is shown.
    #[must_use]
    pub fn endpoint_editable(&self) -> bool {
        self.api_url.is_none()
    }
}
