//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `directory` owns the poem list and its filters; `ui` owns page chrome.
//! Both are plain structs so behavior is testable without a browser.

pub mod directory;
pub mod ui;
