//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (the mobile menu) out of the
//! session so the navbar can evolve independently of authentication.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navigation shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub mobile_menu_open: bool,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
