// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dablie Tech Club: content, view state and configuration shared by the UI.

pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod types;
pub mod view_state;

pub use config::SiteConfig;
pub use content::{SiteContent, content_for};
pub use error::SiteError;
pub use reveal::RevealLatch;
pub use types::*;
pub use view_state::{MenuState, ViewState};
