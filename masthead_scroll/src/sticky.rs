// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stickiness tracker: a two-state machine with an asymmetric, hysteretic release.
//!
//! ## States
//!
//! - `Free → Stuck` when the sentinel's visible fraction reaches zero.
//!   The scroll offset at that moment becomes the stick threshold `T`.
//! - `Stuck → Free` on a scroll sample where the offset is within
//!   [`top_threshold`](StickinessConfig::top_threshold) of the top, or has dropped below
//!   `T − `[`hysteresis_margin`](StickinessConfig::hysteresis_margin).
//!
//! Entering `Stuck` collapses the header, which shifts everything below it and can
//! change whether the page is "past the sentinel". Releasing only outside the margin
//! keeps that feedback loop from toggling the state on every frame.
//! The sentinel becoming visible again never releases on its own; only scroll samples do.
//!
//! A release can happen while the sentinel is still hidden. The tracker then re-sticks on a
//! later sample at least `hysteresis_margin` past the release offset
//! (see [`StickinessTracker::on_scroll_while_hidden`]), so the same band guards both directions.
//!
//! ```
//! use masthead_scroll::sentinel::Visibility;
//! use masthead_scroll::sticky::{StickinessConfig, StickinessTracker};
//!
//! let mut t = StickinessTracker::new(StickinessConfig::default());
//! t.on_scroll(400.0);
//! t.on_visibility(Visibility::Hidden);
//! assert!(t.is_stuck());
//! for y in [350.0, 290.0, 280.0, 270.0] {
//!     t.on_scroll(y);
//!     assert!(t.is_stuck());
//! }
//! t.on_scroll(269.0);
//! assert!(!t.is_stuck());
//! ```

use masthead_signal::error::ConfigError;

use crate::sentinel::Visibility;

/// Default distance from the top of the page within which the header always releases.
pub const DEFAULT_TOP_THRESHOLD: f64 = 10.0;

/// Default release margin below the stick threshold.
///
/// Matches the height the header loses when it collapses.
pub const DEFAULT_HYSTERESIS_MARGIN: f64 = 130.0;

/// Tuning for [`StickinessTracker`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StickinessConfig {
    /// Offsets at or below this always release.
    pub top_threshold: f64,
    /// How far below the stick threshold the offset must fall to release.
    pub hysteresis_margin: f64,
}

impl Default for StickinessConfig {
    fn default() -> Self {
        Self {
            top_threshold: DEFAULT_TOP_THRESHOLD,
            hysteresis_margin: DEFAULT_HYSTERESIS_MARGIN,
        }
    }
}

impl StickinessConfig {
    /// Derive the margin from measured header heights.
    ///
    /// The margin is the shrink delta `expanded − collapsed`; the top threshold keeps its default.
    pub fn from_header_heights(expanded: f64, collapsed: f64) -> Result<Self, ConfigError> {
        let expanded = ConfigError::check("expanded_height", expanded)?;
        let collapsed = ConfigError::check("collapsed_height", collapsed)?;
        if collapsed > expanded {
            return Err(ConfigError::HeightsInverted {
                expanded,
                collapsed,
            });
        }
        Ok(Self {
            hysteresis_margin: expanded - collapsed,
            ..Self::default()
        })
    }

    /// Replace the top threshold.
    pub fn with_top_threshold(mut self, top_threshold: f64) -> Self {
        self.top_threshold = top_threshold;
        self
    }

    /// Replace the hysteresis margin.
    pub fn with_hysteresis_margin(mut self, hysteresis_margin: f64) -> Self {
        self.hysteresis_margin = hysteresis_margin;
        self
    }

    /// Check both values are finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check("top_threshold", self.top_threshold)?;
        ConfigError::check("hysteresis_margin", self.hysteresis_margin)?;
        Ok(())
    }
}

/// Current stickiness.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum StickyState {
    /// The header sits at its natural position with its full layout.
    #[default]
    Free,
    /// The header is pinned and condensed.
    Stuck {
        /// Scroll offset recorded when the header stuck.
        threshold: f64,
    },
}

/// A state change reported by [`StickinessTracker`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StickyTransition {
    /// `Free → Stuck` at the given threshold.
    Stuck {
        /// Scroll offset recorded as the stick threshold.
        threshold: f64,
    },
    /// `Stuck → Free` at the given offset.
    Released {
        /// Scroll offset that triggered the release.
        offset: f64,
    },
}

/// Tracks whether the header is stuck.
#[derive(Clone, Debug)]
pub struct StickinessTracker {
    config: StickinessConfig,
    state: StickyState,
    offset: f64,
    released_at: Option<f64>,
    transitions: u64,
}

impl StickinessTracker {
    /// A free tracker at offset zero.
    pub fn new(config: StickinessConfig) -> Self {
        Self {
            config,
            state: StickyState::Free,
            offset: 0.0,
            released_at: None,
            transitions: 0,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &StickinessConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> StickyState {
        self.state
    }

    /// Whether the header is stuck.
    pub fn is_stuck(&self) -> bool {
        matches!(self.state, StickyState::Stuck { .. })
    }

    /// Offset of the most recent release, if the header has ever released.
    pub fn released_at(&self) -> Option<f64> {
        self.released_at
    }

    /// Number of transitions so far, in either direction.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Feed a sentinel visibility change.
    ///
    /// Sticks at the latest scroll offset when the sentinel is hidden; ignores everything else.
    pub fn on_visibility(&mut self, visibility: Visibility) -> Option<StickyTransition> {
        match (self.state, visibility) {
            (StickyState::Free, Visibility::Hidden) => {
                let threshold = self.offset;
                self.state = StickyState::Stuck { threshold };
                self.transitions += 1;
                #[cfg(feature = "tracing")]
                tracing::debug!(threshold, "header stuck");
                Some(StickyTransition::Stuck { threshold })
            }
            _ => None,
        }
    }

    /// Feed a scroll sample and apply the release check while stuck.
    pub fn on_scroll(&mut self, offset: f64) -> Option<StickyTransition> {
        self.offset = offset;
        let StickyState::Stuck { threshold } = self.state else {
            return None;
        };
        let near_top = offset <= self.config.top_threshold;
        let below_margin = offset < threshold - self.config.hysteresis_margin;
        if !(near_top || below_margin) {
            return None;
        }
        self.state = StickyState::Free;
        self.released_at = Some(offset);
        self.transitions += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(offset, threshold, near_top, "header released");
        Some(StickyTransition::Released { offset })
    }

    /// Re-stick a free header whose sentinel is still hidden after the latest scroll sample.
    ///
    /// Sticks at the latest offset once it is at least `hysteresis_margin` past the last
    /// release, so jitter around the release point cannot flicker.
    pub fn on_scroll_while_hidden(&mut self) -> Option<StickyTransition> {
        if self.is_stuck() {
            return None;
        }
        let margin = self.config.hysteresis_margin;
        let too_close = self.released_at.is_some_and(|r| self.offset < r + margin);
        if too_close {
            return None;
        }
        self.on_visibility(Visibility::Hidden)
    }
}
