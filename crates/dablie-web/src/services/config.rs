// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Embedded site configuration.

use dablie_core::SiteConfig;
use tracing::{error, info};

/// Compiled into the binary; there is no filesystem in the browser.
const EMBEDDED_CONFIG: &str = include_str!("../../site.json");

/// Parse the embedded configuration, falling back to defaults if it is
/// rejected.
pub fn load() -> SiteConfig {
    match SiteConfig::from_json(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(revision = %config.revision, "site configuration loaded");
            config
        }
        Err(e) => {
            error!(error = %e, "embedded site configuration rejected, using defaults");
            SiteConfig::default()
        }
    }
}
