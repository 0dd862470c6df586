// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Navigation registry and in-page link integrity.

use crate::error::{Result, SiteError};
use crate::types::{NavSection, PageSection};

/// Entries of the navigation bar and mobile menu, left to right.
pub static NAV_SECTIONS: [NavSection; 5] = [
    NavSection { id: "about", label: "About" },
    NavSection { id: "services", label: "Services" },
    NavSection { id: "departments", label: "Departments" },
    NavSection { id: "portfolio", label: "Portfolio" },
    NavSection { id: "partners", label: "Partners" },
];

/// Look up a navigation entry by anchor id.
pub fn find_section(id: &str) -> Option<&'static NavSection> {
    NAV_SECTIONS.iter().find(|s| s.id == id)
}

/// Anchor ids of every section element the page renders, in order.
pub fn rendered_anchor_ids() -> impl Iterator<Item = &'static str> {
    PageSection::ALL.into_iter().map(|s| s.anchor_id())
}

/// Check that every link target names a rendered section.
///
/// Returns the first dangling target as `SiteError::MissingAnchor`.
pub fn verify_anchor_integrity<'a, I>(targets: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for target in targets {
        if !rendered_anchor_ids().any(|id| id == target) {
            return Err(SiteError::MissingAnchor(target.to_owned()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_entry_has_a_section() {
        assert!(verify_anchor_integrity(NAV_SECTIONS.iter().map(|s| s.id)).is_ok());
    }

    #[test]
    fn every_section_is_reachable_from_nav() {
        for id in rendered_anchor_ids() {
            assert!(find_section(id).is_some(), "section #{id} missing from nav");
        }
    }

    #[test]
    fn dangling_target_is_reported() {
        match verify_anchor_integrity(["about", "contact"]) {
            Err(SiteError::MissingAnchor(id)) => assert_eq!(id, "contact"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_id_has_no_entry() {
        assert!(find_section("careers").is_none());
        assert_eq!(find_section("partners").map(|s| s.label), Some("Partners"));
    }
}
