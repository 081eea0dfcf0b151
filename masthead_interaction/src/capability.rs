// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer capability: can this device hover?
//!
//! Interactive elements never branch on raw device checks. They ask a
//! [`PointerCapability`] whether hover affordances apply.
//!
//! [`CapabilityDetector`] reads the host's hover media feature once at mount, synchronously,
//! so the first render already has the right affordance. Later changes arrive as
//! [`EnvSignal::HoverMedia`] signals. A host without the media query API reports `None`,
//! which degrades to [`InputCapability::TouchOnly`].
//!
//! ```
//! use masthead_interaction::capability::{
//!     CapabilityDetector, InputCapability, NoMediaQuery, PointerCapability,
//! };
//!
//! let mut detector = CapabilityDetector::mount(&|| Some(true));
//! assert!(detector.supports_hover());
//! assert_eq!(detector.on_media_change(false), Some(InputCapability::TouchOnly));
//! assert!(!detector.supports_hover());
//!
//! let unsupported = CapabilityDetector::mount(&NoMediaQuery);
//! assert_eq!(unsupported.capability(), InputCapability::TouchOnly);
//! ```

use masthead_signal::types::EnvSignal;

/// Anything that can say whether hover affordances apply.
pub trait PointerCapability {
    /// Whether the primary input can hover.
    fn supports_hover(&self) -> bool;
}

/// The two input capability variants.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputCapability {
    /// A mouse, trackpad or stylus that can hover.
    HoverCapable,
    /// Touch input with no hover.
    #[default]
    TouchOnly,
}

impl InputCapability {
    /// Map a media query result; an absent API means touch-only.
    pub fn from_media(matches: Option<bool>) -> Self {
        match matches {
            Some(true) => Self::HoverCapable,
            Some(false) | None => Self::TouchOnly,
        }
    }
}

impl PointerCapability for InputCapability {
    fn supports_hover(&self) -> bool {
        matches!(self, Self::HoverCapable)
    }
}

impl<T: PointerCapability + ?Sized> PointerCapability for &T {
    fn supports_hover(&self) -> bool {
        (**self).supports_hover()
    }
}

/// The host's `(hover: hover)` media query.
pub trait HoverMediaQuery {
    /// Current match, or `None` when the host has no media query API.
    fn matches(&self) -> Option<bool>;
}

impl<F: Fn() -> Option<bool>> HoverMediaQuery for F {
    fn matches(&self) -> Option<bool> {
        self()
    }
}

impl HoverMediaQuery for InputCapability {
    fn matches(&self) -> Option<bool> {
        Some(self.supports_hover())
    }
}

/// A host without a media query API.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoMediaQuery;

impl HoverMediaQuery for NoMediaQuery {
    fn matches(&self) -> Option<bool> {
        None
    }
}

/// Tracks the live input capability.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CapabilityDetector {
    capability: InputCapability,
}

impl CapabilityDetector {
    /// Read `query` synchronously and start from its answer.
    pub fn mount(query: &impl HoverMediaQuery) -> Self {
        let capability = InputCapability::from_media(query.matches());
        #[cfg(feature = "tracing")]
        tracing::debug!(?capability, "input capability at mount");
        Self { capability }
    }

    /// Current capability.
    pub fn capability(&self) -> InputCapability {
        self.capability
    }

    /// Apply a media query change. Returns the new capability when it differs.
    pub fn on_media_change(&mut self, matches: bool) -> Option<InputCapability> {
        let next = InputCapability::from_media(Some(matches));
        if next == self.capability {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?self.capability, to = ?next, "input capability changed");
        self.capability = next;
        Some(next)
    }

    /// Apply a signal; only [`EnvSignal::HoverMedia`] is relevant.
    pub fn handle(&mut self, signal: &EnvSignal) -> Option<InputCapability> {
        match *signal {
            EnvSignal::HoverMedia { matches } => self.on_media_change(matches),
            _ => None,
        }
    }
}

impl PointerCapability for CapabilityDetector {
    fn supports_hover(&self) -> bool {
        self.capability.supports_hover()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_is_touch_only() {
        assert_eq!(
            InputCapability::from_media(None),
            InputCapability::TouchOnly
        );
        let d = CapabilityDetector::mount(&NoMediaQuery);
        assert!(!d.supports_hover());
    }

    #[test]
    fn initial_value_is_synchronous() {
        let d = CapabilityDetector::mount(&InputCapability::HoverCapable);
        assert_eq!(d.capability(), InputCapability::HoverCapable);
    }

    #[test]
    fn change_reports_only_differences() {
        let mut d = CapabilityDetector::mount(&|| Some(false));
        assert_eq!(d.on_media_change(false), None);
        assert_eq!(
            d.handle(&EnvSignal::HoverMedia { matches: true }),
            Some(InputCapability::HoverCapable)
        );
        assert_eq!(d.handle(&EnvSignal::Scroll { offset_y: 3.0 }), None);
        assert!(d.supports_hover());
    }

    #[test]
    fn reference_forwards_capability() {
        fn hovers(c: impl PointerCapability) -> bool {
            c.supports_hover()
        }
        let d = CapabilityDetector::mount(&|| Some(true));
        assert!(hovers(&d));
        assert!(!hovers(&InputCapability::TouchOnly));
    }
}
