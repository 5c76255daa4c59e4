//! Page chrome state (mobile menu).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the collapsed mobile menu and call-to-action are expanded.
    pub menu_open: bool,
}

impl UiState {
    /// Flip the mobile menu. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the mobile menu. Returns whether it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}

/// Whether a document click should collapse the mobile menu: only while it is
/// open and only for clicks landing outside both the menu and its toggle.
pub fn should_close_menu(menu_open: bool, inside_menu: bool, inside_toggle: bool) -> bool {
    menu_open && !inside_menu && !inside_toggle
}
