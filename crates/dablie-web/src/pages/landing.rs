// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page root: owns the view state and lays out every section of a revision.

use dablie_core::{PageSection, Revision, SiteConfig, content_for};
use dioxus::prelude::*;

use crate::components::navbar::NavBar;
use crate::pages::not_found::NotFound;
use crate::sections::ContentSection;
use crate::sections::footer::Footer;
use crate::sections::hero::Hero;
use crate::state;

/// `/`: the configured revision.
#[component]
pub fn Home() -> Element {
    let revision = use_context::<SiteConfig>().revision;
    rsx! {
        LandingPage { revision }
    }
}

/// `/revisions/:revision`: a preserved revision by slug.
#[component]
pub fn RevisionPage(revision: String) -> Element {
    match revision.parse::<Revision>() {
        Ok(revision) => rsx! {
            LandingPage { revision }
        },
        Err(e) => {
            tracing::warn!(error = %e, "revision route did not resolve");
            rsx! {
                NotFound { segments: vec!["revisions".to_string(), revision] }
            }
        }
    }
}

#[component]
fn LandingPage(revision: Revision) -> Element {
    let content = content_for(revision);
    let mut view = state::provide_view_state();

    // Runs after the first render is committed, so the hero transitions in.
    use_effect(move || {
        view.write().mark_mounted();
        tracing::debug!("page mounted");
    });

    rsx! {
        div { class: "min-h-screen {content.theme.page}",
            NavBar { content }
            Hero { content }
            for section in PageSection::ALL {
                ContentSection { key: "{section:?}", section, content }
            }
            Footer { content }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dablie_core::ViewState;
    use dablie_core::nav::NAV_SECTIONS;

    /// The landing page tree with the view state supplied up front, so the
    /// markup can be checked on either side of the mount.
    #[component]
    fn StaticPage(revision: Revision, mounted: bool, menu_open: bool) -> Element {
        use_context_provider(SiteConfig::default);
        use_context_provider(|| {
            let mut view = ViewState::new();
            if mounted {
                view.mark_mounted();
            }
            if menu_open {
                view.toggle_mobile_menu();
            }
            Signal::new(view)
        });
        let content = content_for(revision);

        rsx! {
            NavBar { content }
            Hero { content }
            for section in PageSection::ALL {
                ContentSection { key: "{section:?}", section, content }
            }
            Footer { content }
        }
    }

    fn render(revision: Revision, mounted: bool, menu_open: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            StaticPage,
            StaticPageProps { revision, mounted, menu_open },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Markup from the opening of section `id` up to the next section.
    fn section_markup<'a>(html: &'a str, id: &str) -> &'a str {
        let start = html
            .find(&format!(r#"id="{id}""#))
            .unwrap_or_else(|| panic!("section #{id} not rendered"));
        let rest = &html[start + 1..];
        let end = rest.find("<section").map_or(html.len(), |i| start + 1 + i);
        &html[start..end]
    }

    #[test]
    fn every_nav_target_is_a_rendered_section() {
        for revision in Revision::ALL {
            let html = render(revision, false, false);
            for entry in NAV_SECTIONS.iter() {
                let id = entry.id;
                assert!(html.contains(&format!(r#"id="{id}""#)), "{revision}: #{id}");
                assert!(html.contains(&format!(r##"href="#{id}""##)), "{revision}: link #{id}");
            }
        }
    }

    #[test]
    fn unlinked_projects_render_coming_soon() {
        for revision in Revision::ALL {
            let content = content_for(revision);
            let html = render(revision, false, false);
            let portfolio = section_markup(&html, "portfolio");

            let unlinked = content.projects.iter().filter(|p| p.link.is_none()).count();
            let linked = content.projects.len() - unlinked;
            assert_eq!(portfolio.matches("Coming Soon").count(), unlinked, "{revision}");
            assert_eq!(portfolio.matches("View Project").count(), linked, "{revision}");
            assert_eq!(portfolio.matches("href=").count(), linked, "{revision}");
            for url in content.projects.iter().filter_map(|p| p.link) {
                assert!(portfolio.contains(&format!(r#"href="{url}""#)), "{revision}: {url}");
            }
        }
    }

    #[test]
    fn departments_render_four_cards_in_order() {
        for revision in Revision::ALL {
            let content = content_for(revision);
            let html = render(revision, false, false);
            let departments = section_markup(&html, "departments");

            assert_eq!(departments.matches("stagger-card").count(), 4, "{revision}");
            let mut last = 0;
            for item in content.departments {
                let at = departments[last..]
                    .find(item.title)
                    .unwrap_or_else(|| panic!("{revision}: {} out of order", item.title));
                last += at + item.title.len();
            }
        }
    }

    #[test]
    fn hero_is_hidden_until_mounted() {
        for revision in Revision::ALL {
            let before = render(revision, false, false);
            assert!(before.contains("hero-enter is-hidden"), "{revision}");
            assert!(!before.contains("hero-enter is-shown"), "{revision}");

            let after = render(revision, true, false);
            assert!(after.contains("hero-enter is-shown"), "{revision}");
        }
    }

    #[test]
    fn sections_start_unrevealed() {
        let html = render(Revision::Showcase, true, false);
        assert!(!html.contains("is-revealed"));
        assert_eq!(html.matches("<section").count(), PageSection::ALL.len() + 1);
    }

    #[test]
    fn closed_menu_links_leave_the_tab_order() {
        let overlay_tag = |html: &str| {
            let start = html.find("menu-overlay").expect("menu overlay rendered");
            let end = start + html[start..].find('>').expect("overlay tag closes");
            html[start..end].to_owned()
        };

        let closed = render(Revision::Showcase, false, false);
        assert!(overlay_tag(&closed).contains(r#"aria-hidden="true""#));
        assert_eq!(closed.matches(r#"tabindex="-1""#).count(), NAV_SECTIONS.len());

        let open = render(Revision::Showcase, false, true);
        assert!(overlay_tag(&open).contains(r#"aria-hidden="false""#));
        assert_eq!(open.matches(r#"tabindex="-1""#).count(), 0);
    }
}
