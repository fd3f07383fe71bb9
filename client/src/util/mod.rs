//! Page behaviors that operate on the static HTML.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser concern behind an `install` function that
//! skips itself when its elements are missing. `dom` holds the shared
//! `web-sys` glue and only exists in browser builds.

pub mod dark_mode;
#[cfg(feature = "csr")]
pub mod dom;
pub mod font_size;
pub mod menus;
pub mod reveal;
