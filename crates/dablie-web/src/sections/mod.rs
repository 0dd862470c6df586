// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page sections, top to bottom.

pub mod about;
pub mod departments;
pub mod footer;
pub mod hero;
pub mod partners;
pub mod portfolio;
pub mod services;

use dablie_core::{PageSection, SiteContent};
use dioxus::prelude::*;

use crate::components::section::Section;

/// One anchored content section, wrapped in its reveal container.
#[component]
pub fn ContentSection(section: PageSection, content: &'static SiteContent) -> Element {
    let body = match section {
        PageSection::About => rsx! { about::About { content } },
        PageSection::Services => rsx! { services::Services { content } },
        PageSection::Portfolio => rsx! { portfolio::Portfolio { content } },
        PageSection::Departments => rsx! { departments::Departments { content } },
        PageSection::Partners => rsx! { partners::Partners { content } },
    };

    rsx! {
        Section { section, title: section.title(), theme: content.theme, {body} }
    }
}
