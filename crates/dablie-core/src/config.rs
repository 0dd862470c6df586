// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Site configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::types::Revision;

/// Settings embedded into the site at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Revision rendered at `/`.
    pub revision: Revision,
    /// Community channel on the messaging platform (hero call to action).
    pub community_url: String,
    /// Contact address shown in the footer.
    pub contact_email: String,
    /// Street location shown in the footer.
    pub location: String,
    /// Fraction of a section that must be visible before it reveals.
    pub reveal_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            revision: Revision::default(),
            community_url: "https://t.me/dablietechclub".into(),
            contact_email: "info@dablietech.com".into(),
            location: "Sarbet, Next to King's Hotel".into(),
            reveal_threshold: 0.1,
        }
    }
}

/// Largest accepted `reveal_threshold`.
pub const MAX_REVEAL_THRESHOLD: f64 = 0.5;

impl SiteConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Above half, a section taller than the viewport may never reach
        // the ratio and would stay hidden.
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= MAX_REVEAL_THRESHOLD) {
            return Err(SiteError::InvalidConfig(format!(
                "reveal_threshold must be in (0, {MAX_REVEAL_THRESHOLD}], got {}",
                self.reveal_threshold
            )));
        }
        if self.community_url.trim().is_empty() {
            return Err(SiteError::InvalidConfig("community_url is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_takes_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.revision, Revision::Showcase);
    }

    #[test]
    fn partial_override() {
        let config =
            SiteConfig::from_json(r#"{ "revision": "v1", "reveal_threshold": 0.25 }"#).unwrap();
        assert_eq!(config.revision, Revision::Launch);
        assert_eq!(config.reveal_threshold, 0.25);
        assert_eq!(config.contact_email, "info@dablietech.com");
    }

    #[test]
    fn threshold_out_of_range_is_invalid() {
        for raw in [
            r#"{ "reveal_threshold": 0 }"#,
            r#"{ "reveal_threshold": 0.75 }"#,
            r#"{ "reveal_threshold": 1.0 }"#,
        ] {
            assert!(matches!(
                SiteConfig::from_json(raw),
                Err(SiteError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn threshold_cap_is_inclusive() {
        let config = SiteConfig::from_json(r#"{ "reveal_threshold": 0.5 }"#).unwrap();
        assert_eq!(config.reveal_threshold, MAX_REVEAL_THRESHOLD);
    }

    #[test]
    fn revision_names_are_accepted() {
        for (raw, expected) in [
            ("launch", Revision::Launch),
            ("motion", Revision::Motion),
            ("showcase", Revision::Showcase),
        ] {
            let config = SiteConfig::from_json(&format!(r#"{{ "revision": "{raw}" }}"#)).unwrap();
            assert_eq!(config.revision, expected);
        }
    }

    #[test]
    fn blank_community_url_is_invalid() {
        let result = SiteConfig::from_json(r#"{ "community_url": "  " }"#);
        assert!(matches!(result, Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let result = SiteConfig::from_json("{ revision: ");
        assert!(matches!(result, Err(SiteError::Serialization(_))));
    }

    #[test]
    fn unknown_revision_slug_fails_to_parse() {
        let result = SiteConfig::from_json(r#"{ "revision": "v7" }"#);
        assert!(matches!(result, Err(SiteError::Serialization(_))));
    }
}
