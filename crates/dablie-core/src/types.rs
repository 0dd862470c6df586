// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core display types for the club site.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SiteError;

/// Glyphs available to content records. Rendered as inline SVG by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Terminal,
    Globe,
    Shield,
    BookOpen,
    Trophy,
    Target,
    Eye,
    Users,
    Cpu,
    ChevronRight,
    ExternalLink,
    Menu,
    Close,
}

/// Anchor target plus visible label for the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

/// Decorative record shared by the services and departments grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub type ServiceItem = Feature;
pub type DepartmentItem = Feature;

/// A portfolio entry. Projects without a link are shown as "Coming Soon".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectItem {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub link: Option<&'static str>,
}

/// What a project card offers the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAffordance {
    /// An outbound anchor to the live project.
    Outbound(&'static str),
    /// A static placeholder label.
    ComingSoon,
}

impl ProjectItem {
    pub fn affordance(&self) -> ProjectAffordance {
        match self.link {
            Some(url) => ProjectAffordance::Outbound(url),
            None => ProjectAffordance::ComingSoon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerItem {
    pub name: &'static str,
    pub image_url: &'static str,
    pub link: &'static str,
}

/// Content sections in the order the page renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSection {
    About,
    Services,
    Portfolio,
    Departments,
    Partners,
}

impl PageSection {
    /// Render order, top to bottom.
    pub const ALL: [PageSection; 5] = [
        Self::About,
        Self::Services,
        Self::Portfolio,
        Self::Departments,
        Self::Partners,
    ];

    /// DOM id of the section element; the in-page anchor target.
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Departments => "departments",
            Self::Partners => "partners",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::About => "About Us",
            Self::Services => "Our Services",
            Self::Portfolio => "Featured Projects",
            Self::Departments => "Our Departments",
            Self::Partners => "Our Partners",
        }
    }

    /// Alternate sections sit on a tinted band.
    pub fn tinted(&self) -> bool {
        matches!(self, Self::About | Self::Portfolio | Self::Partners)
    }
}

/// The three preserved revisions of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Revision {
    /// Slate and cyan theme, two-line headline.
    #[serde(rename = "v1", alias = "launch")]
    Launch,
    /// Slate and cyan theme, headline split over three lines.
    #[serde(rename = "v2", alias = "motion")]
    Motion,
    /// Indigo theme, six services and a linked project.
    #[default]
    #[serde(rename = "v3", alias = "showcase")]
    Showcase,
}

impl Revision {
    pub const ALL: [Revision; 3] = [Self::Launch, Self::Motion, Self::Showcase];

    /// URL slug used by the `/revisions/:slug` route.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Launch => "v1",
            Self::Motion => "v2",
            Self::Showcase => "v3",
        }
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Revision {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "launch" => Ok(Self::Launch),
            "v2" | "motion" => Ok(Self::Motion),
            "v3" | "showcase" => Ok(Self::Showcase),
            other => Err(SiteError::UnknownRevision(other.to_owned())),
        }
    }
}

/// Utility-class strings that give a revision its look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Page background and base text colour.
    pub page: &'static str,
    /// Background band for tinted sections.
    pub band: &'static str,
    /// Gradient used for the brand mark, headline and buttons.
    pub accent_gradient: &'static str,
    /// Accent colour for icons and links.
    pub accent_text: &'static str,
    /// Hover colour for navigation links.
    pub accent_hover: &'static str,
    /// Card background.
    pub surface: &'static str,
    /// Card background on hover.
    pub surface_hover: &'static str,
    /// Fixed navigation bar background.
    pub nav: &'static str,
    /// Footer background.
    pub footer: &'static str,
}
