// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dablie_core::SiteContent;
use dioxus::prelude::*;

use crate::components::cards::AnimatedCard;

/// One card per department, in table order.
#[component]
pub fn Departments(content: &'static SiteContent) -> Element {
    rsx! {
        div { class: "grid md:grid-cols-4 gap-6",
            for (index, item) in content.departments.iter().enumerate() {
                AnimatedCard {
                    key: "{item.title}",
                    item: *item,
                    index,
                    theme: content.theme,
                    centered: true,
                }
            }
        }
    }
}
