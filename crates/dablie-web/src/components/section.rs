// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Titled content block with a one-time reveal on first scroll into view.

use dablie_core::{PageSection, RevealLatch, SiteConfig, Theme};
use dioxus::prelude::*;

use crate::services::browser;

#[component]
pub fn Section(
    section: PageSection,
    title: &'static str,
    theme: Theme,
    children: Element,
) -> Element {
    let threshold = use_context::<SiteConfig>().reveal_threshold;
    let latch = use_signal(RevealLatch::new);

    let anchor = section.anchor_id();
    let band = if section.tinted() { theme.band } else { "" };
    let reveal = if latch.read().is_revealed() {
        "reveal is-revealed"
    } else {
        "reveal"
    };

    rsx! {
        section {
            id: anchor,
            class: "py-20 {band}",
            onmounted: move |_| {
                if !latch.peek().is_revealed() {
                    spawn(browser::watch_first_reveal(anchor, threshold, latch));
                }
            },
            div { class: "container mx-auto px-6 {reveal}",
                h2 { class: "text-3xl font-bold mb-12 text-center", "{title}" }
                {children}
            }
        }
    }
}
