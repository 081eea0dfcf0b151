// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll direction tracker.
//!
//! Records whether the most recent movement was downward. Used only for the cosmetic
//! dim-while-scrolling-down effect, so it only needs to agree with the latest gesture.

/// Tracks the direction of the last scroll movement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionTracker {
    previous: f64,
    down: bool,
}

impl DirectionTracker {
    /// Establish the baseline at mount. The initial direction is "not down".
    pub const fn new(baseline: f64) -> Self {
        Self {
            previous: baseline,
            down: false,
        }
    }

    /// Whether the last movement was downward.
    pub fn last_scroll_was_down(&self) -> bool {
        self.down
    }

    /// The previous sample.
    pub fn previous(&self) -> f64 {
        self.previous
    }

    /// Record a sample. Returns `true` when the direction flag changed.
    ///
    /// A sample equal to the previous one is not a movement and leaves the flag alone.
    pub fn record(&mut self, offset: f64) -> bool {
        let before = self.down;
        if offset != self.previous {
            self.down = offset > self.previous;
        }
        self.previous = offset;
        before != self.down
    }
}

impl Default for DirectionTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_not_down() {
        let t = DirectionTracker::new(640.0);
        assert!(!t.last_scroll_was_down());
        assert_eq!(t.previous(), 640.0);
    }

    #[test]
    fn follows_latest_movement() {
        let mut t = DirectionTracker::default();
        assert!(t.record(10.0));
        assert!(t.last_scroll_was_down());
        assert!(!t.record(30.0));
        assert!(t.record(20.0));
        assert!(!t.last_scroll_was_down());
    }

    #[test]
    fn repeated_sample_keeps_direction() {
        let mut t = DirectionTracker::default();
        t.record(50.0);
        assert!(!t.record(50.0));
        assert!(t.last_scroll_was_down());

        t.record(10.0);
        assert!(!t.record(10.0));
        assert!(!t.last_scroll_was_down());
    }
}
