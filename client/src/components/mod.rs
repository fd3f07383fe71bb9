//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the poem directory and read/write its state through the
//! signal handed to them by the page.

pub mod poem_list;
pub mod tag_filter;
