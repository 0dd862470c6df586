// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dablie_core::SiteContent;
use dioxus::prelude::*;

use crate::components::cards::ProjectCard;

#[component]
pub fn Portfolio(content: &'static SiteContent) -> Element {
    rsx! {
        div { class: "grid md:grid-cols-2 gap-8",
            for (index, project) in content.projects.iter().enumerate() {
                ProjectCard { key: "{project.title}", project: *project, index, theme: content.theme }
            }
        }
    }
}
