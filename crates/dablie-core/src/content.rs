// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static content tables for each preserved revision of the site.
//
// The three revisions share one component tree. Only theme and copy differ.

use crate::error::{Result, SiteError};
use crate::nav::{NAV_SECTIONS, verify_anchor_integrity};
use crate::types::*;

/// Club name and mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    /// Single letter on the rotated brand tile.
    pub initial: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    /// Headline, one entry per line.
    pub headline: &'static [&'static str],
    pub blurb: &'static str,
    pub cta_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutCopy {
    pub mission: &'static str,
    pub vision: &'static str,
    /// "Who We Are" paragraphs.
    pub who_we_are: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterCopy {
    /// In-page links; each must target a rendered section.
    pub quick_links: &'static [NavSection],
}

/// Everything one revision renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteContent {
    pub revision: Revision,
    pub brand: Brand,
    pub theme: Theme,
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub services: &'static [ServiceItem],
    pub projects: &'static [ProjectItem],
    pub departments: &'static [DepartmentItem],
    pub partners: &'static [PartnerItem],
    pub footer: FooterCopy,
}

impl SiteContent {
    /// Check that every table is populated and every in-page link lands.
    pub fn validate(&self) -> Result<()> {
        let tables = [
            ("services", self.services.is_empty()),
            ("projects", self.projects.is_empty()),
            ("departments", self.departments.is_empty()),
            ("partners", self.partners.is_empty()),
            ("hero headline", self.hero.headline.is_empty()),
        ];
        if let Some((name, _)) = tables.iter().find(|(_, empty)| *empty) {
            return Err(SiteError::EmptyTable(*name));
        }

        verify_anchor_integrity(
            NAV_SECTIONS
                .iter()
                .chain(self.footer.quick_links)
                .map(|link| link.id),
        )
    }
}

/// Content for the given revision.
pub fn content_for(revision: Revision) -> &'static SiteContent {
    match revision {
        Revision::Launch => &LAUNCH,
        Revision::Motion => &MOTION,
        Revision::Showcase => &SHOWCASE,
    }
}

// -- Shared copy --

const BRAND: Brand = Brand {
    name: "Dablie Tech Club",
    initial: "D",
    tagline: "Building the future through technology and innovation.",
};

const HERO: HeroCopy = HeroCopy {
    headline: &["Innovate. Create.", "Transform."],
    blurb: "Empowering the next generation of tech innovators through collaboration, \
            learning, and cutting-edge projects.",
    cta_label: "Join Our Community",
};

const ABOUT: AboutCopy = AboutCopy {
    mission: "To foster innovation and technological advancement by creating a collaborative \
              environment where students and professionals can learn, create, and grow together.",
    vision: "To become a leading tech community that shapes the future of technology \
             through innovative solutions, continuous learning, and impactful projects.",
    who_we_are: &[
        "Dablie Tech Club is a community of passionate technologists, innovators, \
         and problem solvers. We bring together diverse talents to create \
         cutting-edge solutions that address real-world challenges.",
        "Our community includes students, professionals, and industry experts \
         who collaborate on projects, share knowledge, and push the boundaries \
         of what's possible with technology.",
    ],
};

const FOOTER: FooterCopy = FooterCopy {
    quick_links: &[
        NavSection { id: "about", label: "About Us" },
        NavSection { id: "services", label: "Services" },
        NavSection { id: "portfolio", label: "Portfolio" },
    ],
};

const SERVICES: [ServiceItem; 3] = [
    Feature {
        icon: Icon::Code,
        title: "Software Development",
        description: "Custom solutions for modern challenges",
    },
    Feature {
        icon: Icon::Globe,
        title: "Web Development",
        description: "Responsive and dynamic web applications",
    },
    Feature {
        icon: Icon::Shield,
        title: "Cyber Security",
        description: "Protecting digital assets and infrastructure",
    },
];

const DEPARTMENTS: [DepartmentItem; 4] = [
    Feature {
        icon: Icon::BookOpen,
        title: "Capacity Building",
        description: "Empowering through education and skill development",
    },
    Feature {
        icon: Icon::Terminal,
        title: "Development/Programming",
        description: "Creating innovative software solutions",
    },
    Feature {
        icon: Icon::Shield,
        title: "Cyber Security",
        description: "Protecting digital assets and infrastructure",
    },
    Feature {
        icon: Icon::Trophy,
        title: "Competitive Programming",
        description: "Excelling in coding competitions",
    },
];

const PREVIEW_PROJECTS: [ProjectItem; 2] = [
    ProjectItem {
        title: "AI-Powered Analytics",
        description: "Machine learning solution for predictive analytics",
        image_url: "https://images.unsplash.com/photo-1518932945647-7a1c969f8be2?auto=format&fit=crop&q=80&w=1000",
        link: None,
    },
    ProjectItem {
        title: "Smart City Platform",
        description: "IoT integration for urban infrastructure",
        image_url: "https://images.unsplash.com/photo-1573804633927-bfcbcd909acd?auto=format&fit=crop&q=80&w=1000",
        link: None,
    },
];

const PARTNERS: [PartnerItem; 4] = [
    PartnerItem {
        name: "Dablie",
        image_url: "https://dablie.org/leadership%20page/assests/images/logo.png",
        link: "https://dablie.org",
    },
    PartnerItem {
        name: "Partner 2",
        image_url: "https://images.unsplash.com/photo-1614680376593-902f74cf0d41?auto=format&fit=crop&q=80&w=400",
        link: "https://dablie.org",
    },
    PartnerItem {
        name: "Partner 3",
        image_url: "https://images.unsplash.com/photo-1614680376408-12c8c384c640?auto=format&fit=crop&q=80&w=400",
        link: "https://dablie.org",
    },
    PartnerItem {
        name: "Partner 4",
        image_url: "https://images.unsplash.com/photo-1614680376739-8d7c8f0ec613?auto=format&fit=crop&q=80&w=400",
        link: "https://dablie.org",
    },
];

// -- v1 --

const SLATE_THEME: Theme = Theme {
    page: "bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 text-white",
    band: "bg-slate-800/50",
    accent_gradient: "from-blue-400 via-cyan-300 to-teal-300",
    accent_text: "text-cyan-400",
    accent_hover: "hover:text-cyan-300",
    surface: "bg-slate-700/30",
    surface_hover: "hover:bg-slate-700/50",
    nav: "bg-slate-900/80",
    footer: "bg-slate-900",
};

static LAUNCH: SiteContent = SiteContent {
    revision: Revision::Launch,
    brand: BRAND,
    theme: SLATE_THEME,
    hero: HERO,
    about: ABOUT,
    services: &SERVICES,
    projects: &PREVIEW_PROJECTS,
    departments: &DEPARTMENTS,
    partners: &PARTNERS,
    footer: FOOTER,
};

// -- v2 --

static MOTION: SiteContent = SiteContent {
    revision: Revision::Motion,
    brand: BRAND,
    theme: SLATE_THEME,
    hero: HeroCopy {
        headline: &["Innovate.", "Create.", "Transform."],
        ..HERO
    },
    about: ABOUT,
    services: &SERVICES,
    projects: &PREVIEW_PROJECTS,
    departments: &DEPARTMENTS,
    partners: &PARTNERS,
    footer: FOOTER,
};

// -- v3 --

const INDIGO_THEME: Theme = Theme {
    page: "bg-gradient-to-br from-gray-950 via-indigo-950 to-gray-950 text-gray-100",
    band: "bg-indigo-900/20",
    accent_gradient: "from-indigo-400 via-violet-400 to-fuchsia-400",
    accent_text: "text-violet-400",
    accent_hover: "hover:text-violet-300",
    surface: "bg-white/5",
    surface_hover: "hover:bg-white/10",
    nav: "bg-gray-950/80",
    footer: "bg-gray-950",
};

const SHOWCASE_SERVICES: [ServiceItem; 6] = [
    SERVICES[0],
    SERVICES[1],
    SERVICES[2],
    Feature {
        icon: Icon::Users,
        title: "Mentorship",
        description: "Pairing newcomers with experienced engineers",
    },
    Feature {
        icon: Icon::Cpu,
        title: "Hardware & IoT",
        description: "Prototyping connected devices and embedded systems",
    },
    Feature {
        icon: Icon::Trophy,
        title: "Hackathons",
        description: "Organising and competing in coding events",
    },
];

const SHOWCASE_PROJECTS: [ProjectItem; 3] = [
    ProjectItem {
        title: "Dablie Leadership Portal",
        description: "Member directory and leadership pages for the club",
        image_url: "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&q=80&w=1000",
        link: Some("https://dablie.org"),
    },
    PREVIEW_PROJECTS[0],
    PREVIEW_PROJECTS[1],
];

static SHOWCASE: SiteContent = SiteContent {
    revision: Revision::Showcase,
    brand: BRAND,
    theme: INDIGO_THEME,
    hero: HeroCopy {
        headline: &["Innovate.", "Create.", "Transform."],
        blurb: "A student-run community building real software, securing real systems, \
                and training the next wave of competitive programmers.",
        cta_label: "Join Our Community",
    },
    about: ABOUT,
    services: &SHOWCASE_SERVICES,
    projects: &SHOWCASE_PROJECTS,
    departments: &DEPARTMENTS,
    partners: &PARTNERS,
    footer: FOOTER,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_revision_validates() {
        for revision in Revision::ALL {
            let content = content_for(revision);
            assert_eq!(content.revision, revision);
            content
                .validate()
                .unwrap_or_else(|e| panic!("{revision} failed validation: {e}"));
        }
    }

    #[test]
    fn departments_keep_their_order() {
        let titles: Vec<_> = content_for(Revision::Motion)
            .departments
            .iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(
            titles,
            [
                "Capacity Building",
                "Development/Programming",
                "Cyber Security",
                "Competitive Programming",
            ]
        );
    }

    #[test]
    fn projects_without_links_are_coming_soon() {
        for revision in Revision::ALL {
            for project in content_for(revision).projects {
                let outbound = matches!(project.affordance(), ProjectAffordance::Outbound(_));
                assert_eq!(outbound, project.link.is_some(), "{}", project.title);
            }
        }
    }

    #[test]
    fn showcase_links_at_least_one_project() {
        assert!(
            content_for(Revision::Showcase)
                .projects
                .iter()
                .any(|p| p.link.is_some())
        );
    }

    #[test]
    fn empty_table_is_reported() {
        let content = SiteContent {
            partners: &[],
            ..*content_for(Revision::Launch)
        };
        match content.validate() {
            Err(SiteError::EmptyTable(name)) => assert_eq!(name, "partners"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn dangling_footer_link_is_reported() {
        const BROKEN: &[NavSection] = &[NavSection { id: "team", label: "Team" }];
        let content = SiteContent {
            footer: FooterCopy { quick_links: BROKEN },
            ..*content_for(Revision::Launch)
        };
        assert!(matches!(content.validate(), Err(SiteError::MissingAnchor(id)) if id == "team"));
    }
}
