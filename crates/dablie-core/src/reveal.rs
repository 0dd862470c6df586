// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One-shot reveal latch for viewport-triggered animations.

/// Latches on the first intersection report and ignores everything after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one visibility report from the observer.
    ///
    /// Returns `true` only for the report that reveals the section; a
    /// section that leaves and re-enters the viewport does not fire again.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_reports_do_not_reveal() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn fires_once_across_reentries() {
        let mut latch = RevealLatch::new();
        let reports = [false, true, false, true, true, false, true];
        let fired = reports.iter().filter(|&&r| latch.observe(r)).count();
        assert_eq!(fired, 1);
        assert!(latch.is_revealed());
    }
}
