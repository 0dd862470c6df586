// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hero banner: headline, blurb and the community call to action.

use dablie_core::{Icon, SiteConfig, SiteContent};
use dioxus::prelude::*;

use crate::components::icons::Glyph;
use crate::state::use_view_state;

#[component]
pub fn Hero(content: &'static SiteContent) -> Element {
    let view = use_view_state();
    let community_url = use_context::<SiteConfig>().community_url;
    let theme = content.theme;
    let hero = content.hero;

    // Hidden until the page root flags the first paint.
    let entrance = if view.read().mounted { "is-shown" } else { "is-hidden" };

    rsx! {
        section { class: "pt-32 pb-20 px-6",
            div { class: "container mx-auto",
                div { class: "hero-enter {entrance}",
                    h1 { class: "text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r text-transparent bg-clip-text {theme.accent_gradient}",
                        for line in hero.headline {
                            span { key: "{line}", class: "block", "{line}" }
                        }
                    }
                    p { class: "text-xl text-gray-300 mb-8 max-w-2xl", "{hero.blurb}" }
                    a {
                        href: "{community_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "inline-flex items-center gap-2 px-8 py-3 rounded-full font-semibold bg-gradient-to-r hover:shadow-lg transition-all duration-300 {theme.accent_gradient}",
                        "{hero.cta_label}"
                        Glyph { icon: Icon::ChevronRight, class: "w-4 h-4" }
                    }
                }
            }
        }
    }
}
