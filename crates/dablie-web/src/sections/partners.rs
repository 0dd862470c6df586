// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dablie_core::SiteContent;
use dioxus::prelude::*;

use crate::components::cards::PartnerCard;

#[component]
pub fn Partners(content: &'static SiteContent) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 md:grid-cols-4 gap-8 items-center",
            for (index, partner) in content.partners.iter().enumerate() {
                PartnerCard { key: "{partner.image_url}", partner: *partner, index }
            }
        }
    }
}
