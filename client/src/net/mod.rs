//! Networking modules for the poem manifest.
//!
//! SYSTEM CONTEXT
//! ==============
//! `manifest` fetches and parses `poems-list.json`, and `types` defines the
//! record schema shared with the site host.

pub mod manifest;
pub mod types;
