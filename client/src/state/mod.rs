//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`columns`, `grid`, `viewport`, etc.) so
//! individual components can depend on small focused models.

pub mod columns;
pub mod grid;
pub mod options;
pub mod ui;
pub mod viewport;
