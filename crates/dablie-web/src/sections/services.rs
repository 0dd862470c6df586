// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dablie_core::SiteContent;
use dioxus::prelude::*;

use crate::components::cards::AnimatedCard;

#[component]
pub fn Services(content: &'static SiteContent) -> Element {
    rsx! {
        div { class: "grid md:grid-cols-3 gap-8",
            for (index, item) in content.services.iter().enumerate() {
                AnimatedCard { key: "{item.title}", item: *item, index, theme: content.theme }
            }
        }
    }
}
