//! Page-level installers.
//!
//! ARCHITECTURE
//! ============
//! Each page module owns its orchestration (state, fetches, listeners) and
//! delegates rendering to `components`.

pub mod poem_index;
