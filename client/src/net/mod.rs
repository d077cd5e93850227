//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the record fetch and `types` defines the envelope's row
//! shape plus display formatting.

pub mod api;
pub mod types;
