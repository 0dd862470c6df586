// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the site.

use thiserror::Error;

/// Top-level error type for site content and configuration.
///
/// None of these stop the page from rendering; the UI logs them and falls
/// back to defaults.
#[derive(Debug, Error)]
pub enum SiteError {
    // -- Routing --
    #[error("unknown site revision: {0}")]
    UnknownRevision(String),

    // -- Content --
    #[error("link target #{0} has no matching section")]
    MissingAnchor(String),

    #[error("content table is empty: {0}")]
    EmptyTable(&'static str),

    // -- Configuration --
    #[error("invalid site configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SiteError>;
