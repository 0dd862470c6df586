// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Footer: wordmark, quick links, contact lines and copyright.

use chrono::Datelike;
use dablie_core::{SiteConfig, SiteContent};
use dioxus::prelude::*;

use crate::components::navbar::NavLink;

#[component]
pub fn Footer(content: &'static SiteContent) -> Element {
    let config = use_context::<SiteConfig>();
    let theme = content.theme;
    let brand = content.brand;
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "py-12 {theme.footer}",
            div { class: "container mx-auto px-6",
                div { class: "grid md:grid-cols-3 gap-8",
                    div {
                        h3 { class: "text-xl font-bold mb-4 bg-gradient-to-r text-transparent bg-clip-text {theme.accent_gradient}",
                            "{brand.name}"
                        }
                        p { class: "text-gray-400", "{brand.tagline}" }
                    }
                    div {
                        h4 { class: "font-semibold mb-4", "Quick Links" }
                        ul { class: "space-y-2 text-gray-400",
                            for entry in content.footer.quick_links {
                                li { key: "{entry.id}",
                                    NavLink {
                                        entry: *entry,
                                        class: format!("transition-colors {}", theme.accent_hover),
                                    }
                                }
                            }
                        }
                    }
                    div {
                        h4 { class: "font-semibold mb-4", "Contact" }
                        p { class: "text-gray-400",
                            "Email: "
                            a { href: "mailto:{config.contact_email}", class: "{theme.accent_hover}", "{config.contact_email}" }
                            br {}
                            "Location: {config.location}"
                        }
                    }
                }
                div { class: "border-t border-gray-800 mt-8 pt-8 text-center text-gray-400",
                    p { "© {year} {brand.name}. All rights reserved." }
                }
            }
        }
    }
}
