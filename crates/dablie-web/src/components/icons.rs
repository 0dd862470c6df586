// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Inline SVG glyphs on a 24x24 stroke grid.

use dablie_core::Icon;
use dioxus::prelude::*;

/// Path data for each glyph.
pub fn paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
        Icon::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
        Icon::Globe => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M2 12h20",
            "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
        ],
        Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        Icon::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        Icon::Trophy => &[
            "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
            "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
            "M4 22h16",
            "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
            "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
            "M18 2H6v7a6 6 0 0 0 12 0V2z",
        ],
        Icon::Target => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12z",
            "M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
        Icon::Eye => &[
            "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
            "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
        ],
        Icon::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Icon::Cpu => &[
            "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M9 9h6v6H9z",
            "M9 2v2M15 2v2M9 20v2M15 20v2M2 9h2M2 15h2M20 9h2M20 15h2",
        ],
        Icon::ChevronRight => &["m9 18 6-6-6-6"],
        Icon::ExternalLink => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        Icon::Menu => &["M4 6h16M4 12h16M4 18h16"],
        Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
    }
}

#[component]
pub fn Glyph(icon: Icon, #[props(default = "w-6 h-6")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "viewBox": "0 0 24 24",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            for d in paths(icon) {
                path { key: "{d}", d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 14] = [
        Icon::Code,
        Icon::Terminal,
        Icon::Globe,
        Icon::Shield,
        Icon::BookOpen,
        Icon::Trophy,
        Icon::Target,
        Icon::Eye,
        Icon::Users,
        Icon::Cpu,
        Icon::ChevronRight,
        Icon::ExternalLink,
        Icon::Menu,
        Icon::Close,
    ];

    #[test]
    fn every_glyph_has_path_data() {
        for icon in ALL {
            let data = paths(icon);
            assert!(!data.is_empty(), "{icon:?} has no paths");
            for d in data {
                assert!(d.starts_with(['M', 'm']), "{icon:?} path must start with a moveto");
            }
        }
    }
}
