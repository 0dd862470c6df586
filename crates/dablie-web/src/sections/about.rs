// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dablie_core::{Icon, SiteContent, Theme};
use dioxus::prelude::*;

use crate::components::icons::Glyph;

#[component]
pub fn About(content: &'static SiteContent) -> Element {
    let theme = content.theme;
    let about = content.about;

    rsx! {
        div { class: "max-w-4xl mx-auto grid md:grid-cols-2 gap-12",
            div { class: "space-y-6",
                Statement { icon: Icon::Target, heading: "Our Mission", body: about.mission, theme }
                Statement { icon: Icon::Eye, heading: "Our Vision", body: about.vision, theme }
            }
            div { class: "p-6 rounded-xl backdrop-blur-sm {theme.surface}",
                h3 { class: "text-xl font-semibold mb-4", "Who We Are" }
                for paragraph in about.who_we_are {
                    p { key: "{paragraph}", class: "text-gray-300 mb-4 last:mb-0", "{paragraph}" }
                }
            }
        }
    }
}

#[component]
fn Statement(icon: Icon, heading: &'static str, body: &'static str, theme: Theme) -> Element {
    rsx! {
        div { class: "p-6 rounded-xl backdrop-blur-sm {theme.surface}",
            div { class: "flex items-center gap-3 mb-4",
                span { class: "{theme.accent_text}", Glyph { icon } }
                h3 { class: "text-xl font-semibold", "{heading}" }
            }
            p { class: "text-gray-300", "{body}" }
        }
    }
}
