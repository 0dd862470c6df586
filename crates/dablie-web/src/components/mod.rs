// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reusable presentational components.

pub mod cards;
pub mod icons;
pub mod navbar;
pub mod section;
