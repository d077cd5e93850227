//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render grid chrome and data surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod column_editor;
pub mod endpoint_bar;
pub mod grid_table;
pub mod grid_view;
pub mod record_list;
