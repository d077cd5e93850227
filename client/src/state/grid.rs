//! Fetch lifecycle and row projection state.
//!
//! DESIGN
//! ======
//! The lifecycle is a proper phase enum instead of a loading flag, so "no
//! data yet" and "empty result" stay distinguishable. Rows live alongside
//! the phase: a failed refresh keeps the last good rows on screen and only
//! swaps the phase. Racing fetches are not coordinated; the last response
//! to resolve wins.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::net::types::{Row, display_value};
use crate::state::columns::ColumnDescriptor;

/// Where the grid is in its fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last fetch succeeded.
    Ready,
    /// The last fetch failed; the message feeds the error banner.
    Failed(String),
}

/// Grid data state: endpoint, fetched rows, fetch phase, and the explicit
/// title/subtitle key overrides (empty string means "fall back to the
/// registry").
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridState {
    pub endpoint: String,
    pub phase: FetchPhase,
    pub rows: Vec<Row>,
    pub title_key: String,
    pub subtitle_key: String,
}

impl GridState {
    /// Record the target URL. Fetch triggering is decoupled and governed by
    /// `GridOptions::auto_fetch_on_change`.
    pub fn set_endpoint(&mut self, url: &str) {
        self.endpoint = url.to_owned();
    }

    /// Mark a fetch as started. Rows stay in place so the previous result
    /// is still there if this attempt fails.
    pub fn begin_fetch(&mut self) {
        self.phase = FetchPhase::Loading;
    }

    /// Store a successful result.
    pub fn finish_fetch(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.phase = FetchPhase::Ready;
    }

    /// Record a failure, retaining whatever rows were last shown.
    pub fn fail_fetch(&mut self, message: String) {
        self.phase = FetchPhase::Failed(message);
    }

    /// Title projection for one row: the explicit title key when set,
    /// otherwise the first descriptor's key. `None` when neither resolves
    /// or the row lacks the field.
    #[must_use]
    pub fn title_for(&self, row: &Row, snapshot: &[ColumnDescriptor]) -> Option<String> {
        project(row, resolve_key(&self.title_key, snapshot, 0)?)
    }

    /// Subtitle projection: the explicit subtitle key when set, otherwise
    /// the second descriptor's key.
    #[must_use]
    pub fn subtitle_for(&self, row: &Row, snapshot: &[ColumnDescriptor]) -> Option<String> {
        project(row, resolve_key(&self.subtitle_key, snapshot, 1)?)
    }
}

fn resolve_key<'a>(
    explicit: &'a str,
    snapshot: &'a [ColumnDescriptor],
    position: usize,
) -> Option<&'a str> {
    if !explicit.is_empty() {
        return Some(explicit);
    }
    snapshot.get(position).map(|descriptor| descriptor.key.as_str())
}

fn project(row: &Row, key: &str) -> Option<String> {
    row.get(key).map(display_value)
}
