// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dablie_core::Revision;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4 bg-slate-900 text-white",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "text-gray-400 font-mono", "/{path}" }
            Link { to: Route::Home {}, class: "text-cyan-400 hover:text-cyan-300", "Back to the club site" }
            div { class: "flex gap-4 text-sm text-gray-500",
                for revision in Revision::ALL {
                    Link {
                        key: "{revision}",
                        to: Route::RevisionPage { revision: revision.slug().to_string() },
                        class: "hover:text-gray-300",
                        "Revision {revision}"
                    }
                }
            }
        }
    }
}
