// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Card primitives: leaf blocks mapping one content record to markup.
//
// `index` staggers the entrance of cards inside a revealed section.

use dablie_core::{Feature, Icon, PartnerItem, ProjectAffordance, ProjectItem, Theme};
use dioxus::prelude::*;

use super::icons::Glyph;

/// Icon, title and description; used by the services and departments grids.
#[component]
pub fn AnimatedCard(
    item: Feature,
    index: usize,
    theme: Theme,
    #[props(default)] centered: bool,
) -> Element {
    let align = if centered { "text-center" } else { "" };
    let icon_row = if centered { "flex justify-center" } else { "" };

    rsx! {
        div {
            class: "stagger-card group p-6 rounded-xl backdrop-blur-sm {align} {theme.surface} {theme.surface_hover}",
            style: "--stagger: {index}",
            div { class: "mb-4 {icon_row} {theme.accent_text}",
                Glyph {
                    icon: item.icon,
                    class: "w-8 h-8 transform group-hover:scale-110 transition-transform duration-300",
                }
            }
            h3 { class: "text-xl font-semibold mb-2", "{item.title}" }
            p { class: "text-gray-400", "{item.description}" }
        }
    }
}

#[component]
pub fn ProjectCard(project: ProjectItem, index: usize, theme: Theme) -> Element {
    let action = match project.affordance() {
        ProjectAffordance::Outbound(url) => rsx! {
            a {
                href: url,
                target: "_blank",
                rel: "noopener noreferrer",
                class: "inline-flex items-center gap-2 transition-colors {theme.accent_text} {theme.accent_hover}",
                "View Project"
                Glyph { icon: Icon::ExternalLink, class: "w-4 h-4" }
            }
        },
        ProjectAffordance::ComingSoon => rsx! {
            span { class: "text-gray-400 italic", "Coming Soon" }
        },
    };

    rsx! {
        div {
            class: "stagger-card group relative overflow-hidden rounded-xl",
            style: "--stagger: {index}",
            img {
                src: project.image_url,
                alt: project.title,
                class: "w-full h-[300px] object-cover transform group-hover:scale-110 transition-transform duration-500",
            }
            div { class: "absolute inset-0 bg-gradient-to-t from-slate-900 via-slate-900/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300",
                div { class: "absolute bottom-0 p-6",
                    h3 { class: "text-xl font-semibold mb-2", "{project.title}" }
                    p { class: "text-gray-300 mb-4", "{project.description}" }
                    {action}
                }
            }
        }
    }
}

#[component]
pub fn PartnerCard(partner: PartnerItem, index: usize) -> Element {
    rsx! {
        a {
            href: partner.link,
            target: "_blank",
            rel: "noopener noreferrer",
            class: "stagger-card block p-6 bg-white/5 rounded-xl hover:bg-white/10 transition-colors duration-300",
            style: "--stagger: {index}",
            img {
                src: partner.image_url,
                alt: partner.name,
                class: "w-full h-12 object-contain filter brightness-0 invert opacity-70 hover:opacity-100 transition-opacity duration-300",
            }
        }
    }
}
