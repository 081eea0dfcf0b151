// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: a touch-safe hovered flag for one interactive element.
//!
//! ## Usage
//!
//! 1) Keep one [`HoverState`] per hoverable element.
//! 2) Feed pointer input with [`HoverState::apply`] (or the individual methods), passing the
//!    current [`PointerCapability`].
//! 3) Render the hover affordance from [`HoverState::is_hovered`], and react to the returned
//!    `Enter` / `Leave` transitions if you animate them.
//!
//! ## Touch safety
//!
//! Touch devices synthesize pointer-enter events that are never followed by a leave, which
//! leaves controls stuck in their hover look. Two rules prevent that:
//!
//! - Pointer-enter only sets the flag when the capability supports hover.
//! - Touch-start and touch-end clear the flag unconditionally, whatever the capability says.
//!
//! ## Minimal example
//!
//! ```
//! use masthead_interaction::capability::InputCapability;
//! use masthead_interaction::hover::{HoverEvent, HoverState};
//!
//! let mut h = HoverState::new();
//! assert_eq!(h.pointer_enter(&InputCapability::HoverCapable), Some(HoverEvent::Enter));
//! assert_eq!(h.touch_start(), Some(HoverEvent::Leave));
//!
//! // Touch-only devices never hover.
//! assert_eq!(h.pointer_enter(&InputCapability::TouchOnly), None);
//! assert!(!h.is_hovered());
//! ```

use masthead_signal::types::PointerKind;

use crate::capability::PointerCapability;

/// A hovered flag for one element.
///
/// Every method returns the transition it caused, or `None` when the flag did not change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: bool,
}

/// A hover transition event.
///
/// Returned by [`HoverState`] methods when the hovered flag flips.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// The element became hovered.
    Enter,
    /// The element stopped being hovered.
    Leave,
}

impl HoverState {
    /// Create an unhovered state.
    pub const fn new() -> Self {
        Self { hovered: false }
    }

    /// Whether the element is hovered.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pointer moved over the element. Ignored unless `capability` supports hover.
    pub fn pointer_enter(&mut self, capability: &impl PointerCapability) -> Option<HoverEvent> {
        if !capability.supports_hover() {
            return None;
        }
        self.set(true)
    }

    /// Pointer moved off the element.
    pub fn pointer_leave(&mut self) -> Option<HoverEvent> {
        self.set(false)
    }

    /// A press landed on some other element.
    pub fn pointer_down_elsewhere(&mut self) -> Option<HoverEvent> {
        self.set(false)
    }

    /// A touch began on the element. Always clears.
    pub fn touch_start(&mut self) -> Option<HoverEvent> {
        self.set(false)
    }

    /// A touch on the element ended. Always clears.
    pub fn touch_end(&mut self) -> Option<HoverEvent> {
        self.set(false)
    }

    /// The element was activated; clearing keeps the affordance from lingering after a tap.
    pub fn activate(&mut self) -> Option<HoverEvent> {
        self.set(false)
    }

    /// Capability dropped hover support; drop any hover it left behind.
    pub fn capability_changed(
        &mut self,
        capability: &impl PointerCapability,
    ) -> Option<HoverEvent> {
        if capability.supports_hover() {
            None
        } else {
            self.set(false)
        }
    }

    /// Route a [`PointerKind`] to the matching method.
    pub fn apply(
        &mut self,
        kind: PointerKind,
        capability: &impl PointerCapability,
    ) -> Option<HoverEvent> {
        match kind {
            PointerKind::Enter => self.pointer_enter(capability),
            PointerKind::Leave => self.pointer_leave(),
            PointerKind::DownElsewhere => self.pointer_down_elsewhere(),
            PointerKind::TouchStart => self.touch_start(),
            PointerKind::TouchEnd => self.touch_end(),
            PointerKind::Activate => self.activate(),
        }
    }

    fn set(&mut self, hovered: bool) -> Option<HoverEvent> {
        if self.hovered == hovered {
            return None;
        }
        self.hovered = hovered;
        Some(if hovered {
            HoverEvent::Enter
        } else {
            HoverEvent::Leave
        })
    }
}
