// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transient page view state: mobile menu and mount flag.

/// Mobile menu overlay. Closed on every page load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// State owned by the page root. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub menu: MenuState,
    /// Set once after the first paint; drives the hero entrance transition.
    pub mounted: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the mobile menu and return the new state.
    pub fn toggle_mobile_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggled();
        self.menu
    }

    /// Close the mobile menu. Selecting a nav item always lands here.
    pub fn close_mobile_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn mark_mounted(&mut self) {
        self.mounted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert_eq!(ViewState::new().menu, MenuState::Closed);
    }

    #[test]
    fn toggle_parity() {
        for presses in 0..9 {
            let mut view = ViewState::new();
            for _ in 0..presses {
                view.toggle_mobile_menu();
            }
            assert_eq!(view.menu.is_open(), presses % 2 == 1, "after {presses} presses");
        }
    }

    #[test]
    fn selecting_item_closes_open_menu() {
        let mut view = ViewState::new();
        assert_eq!(view.toggle_mobile_menu(), MenuState::Open);
        view.close_mobile_menu();
        assert_eq!(view.menu, MenuState::Closed);

        // Closing an already closed menu is a no-op.
        view.close_mobile_menu();
        assert_eq!(view.menu, MenuState::Closed);
    }

    #[test]
    fn mounted_flag_flips_once() {
        let mut view = ViewState::new();
        assert!(!view.mounted);
        view.mark_mounted();
        assert!(view.mounted);
        view.mark_mounted();
        assert!(view.mounted);
    }
}
