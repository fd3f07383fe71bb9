//! Page chrome state (font size, theme, menus).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the poem directory so each behavior can
//! be installed or skipped independently. The struct lives in a single
//! `RwSignal` and effects push it onto the DOM.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Smallest paragraph font size, in rem.
pub const MIN_FONT_REM: f64 = 1.0;
/// Largest paragraph font size, in rem.
pub const MAX_FONT_REM: f64 = 2.5;
/// Font size applied on page load, in rem.
pub const DEFAULT_FONT_REM: f64 = 1.2;
/// Size change per `changeFontSize` unit, in rem.
pub const FONT_STEP_REM: f64 = 0.1;

/// Colour for alternate lines on a light background.
pub const ALT_LINE_LIGHT: &str = "#256328";
/// Colour for alternate lines on a dark background.
pub const ALT_LINE_DARK: &str = "#53A2A9";

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub font_rem: f64,
    pub dark_mode: bool,
    /// Set once the user clicks the theme toggle; system changes are then ignored.
    pub dark_mode_manual: bool,
    pub nav_open: bool,
    pub share_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            font_rem: DEFAULT_FONT_REM,
            dark_mode: false,
            dark_mode_manual: false,
            nav_open: false,
            share_open: false,
        }
    }
}

impl UiState {
    /// Set the font size, clamped to the allowed range and rounded to 0.01rem.
    pub fn set_font(&mut self, rem: f64) -> f64 {
        let clamped = if rem.is_finite() { rem.clamp(MIN_FONT_REM, MAX_FONT_REM) } else { self.font_rem };
        self.font_rem = (clamped * 100.0).round() / 100.0;
        self.font_rem
    }

    /// Change the font size by `delta` steps.
    pub fn step_font(&mut self, delta: f64) -> f64 {
        self.set_font(self.font_rem + FONT_STEP_REM * delta)
    }

    /// CSS value for the current font size.
    pub fn font_css(&self) -> String {
        format!("{}rem", self.font_rem)
    }

    /// Follow a system color-scheme change unless the user has taken over.
    pub fn follow_system(&mut self, prefers_dark: bool) {
        if !self.dark_mode_manual {
            self.dark_mode = prefers_dark;
        }
    }

    /// Flip dark mode from the page toggle and stop following the system.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode_manual = true;
        self.dark_mode
    }

    /// Inline colour for alternate lines under the current theme.
    pub fn alt_line_colour(&self) -> &'static str {
        if self.dark_mode { ALT_LINE_DARK } else { ALT_LINE_LIGHT }
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn toggle_share(&mut self) {
        self.share_open = !self.share_open;
    }

    /// Outside click: close every open menu.
    pub fn close_menus(&mut self) {
        self.nav_open = false;
        self.share_open = false;
    }
}
