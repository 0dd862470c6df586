// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page view state: a reactive signal owned by the page root.

use dablie_core::ViewState;
use dioxus::prelude::*;

use crate::services::browser;

/// Create the page's view state and provide it to every child component.
pub fn provide_view_state() -> Signal<ViewState> {
    use_context_provider(|| Signal::new(ViewState::new()))
}

/// The view state provided by the enclosing page root.
pub fn use_view_state() -> Signal<ViewState> {
    use_context::<Signal<ViewState>>()
}

/// Open or close the mobile menu overlay.
pub fn toggle_mobile_menu(mut view: Signal<ViewState>) {
    let menu = view.write().toggle_mobile_menu();
    tracing::debug!(?menu, "mobile menu toggled");
}

/// Smooth-scroll to the section with `anchor` as its id and close the menu.
///
/// An id with no matching element scrolls nowhere; the menu still closes.
pub fn scroll_to_section(mut view: Signal<ViewState>, anchor: &str) {
    view.write().close_mobile_menu();
    browser::scroll_into_view(anchor);
}
