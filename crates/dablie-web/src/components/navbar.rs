// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixed navigation bar and the mobile menu overlay.

use dablie_core::content::Brand;
use dablie_core::nav::NAV_SECTIONS;
use dablie_core::{Icon, NavSection, SiteContent, Theme};
use dioxus::prelude::*;

use super::icons::Glyph;
use crate::state::{self, use_view_state};

#[component]
pub fn NavBar(content: &'static SiteContent) -> Element {
    let view = use_view_state();
    let theme = content.theme;

    let open = view.read().menu.is_open();
    let (toggle_icon, toggle_label) = if open {
        (Icon::Close, "Close menu")
    } else {
        (Icon::Menu, "Open menu")
    };

    rsx! {
        nav { class: "fixed w-full backdrop-blur-sm z-50 {theme.nav}",
            div { class: "container mx-auto px-6 py-4",
                div { class: "flex items-center justify-between",
                    BrandMark { brand: content.brand, theme }

                    div { class: "hidden md:flex space-x-8",
                        for entry in NAV_SECTIONS {
                            NavLink {
                                key: "{entry.id}",
                                entry,
                                class: format!("transition-colors {}", theme.accent_hover),
                            }
                        }
                    }

                    button {
                        class: "md:hidden {theme.accent_text}",
                        "aria-label": toggle_label,
                        "aria-expanded": "{open}",
                        onclick: move |_| state::toggle_mobile_menu(view),
                        Glyph { icon: toggle_icon }
                    }
                }
            }

            MobileMenu { open, theme }
        }
    }
}

/// Rotated gradient tile with the club initial, plus the wordmark.
#[component]
pub fn BrandMark(brand: Brand, theme: Theme) -> Element {
    rsx! {
        div { class: "flex items-center space-x-2",
            div { class: "w-10 h-10 relative",
                div { class: "absolute inset-0 bg-gradient-to-r rounded-lg transform -rotate-12 {theme.accent_gradient}" }
                div { class: "absolute inset-0 flex items-center justify-center text-slate-900 font-bold text-2xl",
                    "{brand.initial}"
                }
            }
            div { class: "text-2xl font-bold bg-gradient-to-r text-transparent bg-clip-text {theme.accent_gradient}",
                "{brand.name}"
            }
        }
    }
}

/// In-page anchor that smooth-scrolls instead of jumping.
///
/// A link with `focusable: false` is skipped by keyboard navigation.
#[component]
pub fn NavLink(
    entry: NavSection,
    class: String,
    #[props(default = true)] focusable: bool,
) -> Element {
    let view = use_view_state();
    let id = entry.id;
    let tab_index = (!focusable).then_some("-1");

    rsx! {
        a {
            href: "#{id}",
            class: "{class}",
            tabindex: tab_index,
            onclick: move |evt| {
                evt.prevent_default();
                state::scroll_to_section(view, id);
            },
            "{entry.label}"
        }
    }
}

/// Full-width overlay below the bar. Slides in while the menu is open.
#[component]
fn MobileMenu(open: bool, theme: Theme) -> Element {
    let slide = if open { "is-open" } else { "is-closed" };
    let hidden = !open;

    rsx! {
        div {
            class: "menu-overlay md:hidden fixed inset-x-0 top-[72px] h-screen backdrop-blur-md {slide} {theme.nav}",
            "aria-hidden": "{hidden}",
            div { class: "flex flex-col items-center space-y-8 pt-12 text-xl",
                for entry in NAV_SECTIONS {
                    NavLink {
                        key: "{entry.id}",
                        entry,
                        class: format!("transition-colors {}", theme.accent_hover),
                        focusable: open,
                    }
                }
            }
        }
    }
}
