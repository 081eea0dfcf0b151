// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/exit transition for the breadcrumb slot.
//!
//! The slot has a *target* (the title that should show, or nothing) and a *presence* that
//! animates towards it. Changing the target starts an `Entering` or `Exiting` phase of fixed
//! length; [`Presence::tick`] settles it into `Shown` or empty.
//! Replacing one title with another enters the new title immediately.

use alloc::string::String;

/// Phase of the breadcrumb transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Animating in.
    Entering,
    /// Fully shown.
    Shown,
    /// Animating out; the slot no longer represents a current title.
    Exiting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Slot {
    Empty,
    Active {
        title: String,
        phase: Phase,
        since: u64,
    },
}

/// Breadcrumb presence state.
#[derive(Clone, Debug)]
pub struct Presence {
    duration_ms: u64,
    slot: Slot,
}

impl Presence {
    /// An empty slot with transitions lasting `duration_ms`.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            slot: Slot::Empty,
        }
    }

    /// Title in the slot (current or exiting) and its phase.
    pub fn current(&self) -> Option<(&str, Phase)> {
        match &self.slot {
            Slot::Empty => None,
            Slot::Active { title, phase, .. } => Some((title.as_str(), *phase)),
        }
    }

    /// Progress of the current phase in `0.0..=1.0`; `1.0` when settled.
    pub fn progress(&self, now_ms: u64) -> f32 {
        match &self.slot {
            Slot::Active {
                phase: Phase::Entering | Phase::Exiting,
                since,
                ..
            } => {
                if self.duration_ms == 0 {
                    return 1.0;
                }
                let elapsed = now_ms.saturating_sub(*since).min(self.duration_ms);
                elapsed as f32 / self.duration_ms as f32
            }
            _ => 1.0,
        }
    }

    /// Point the slot at `target`. Returns `true` when a transition started.
    pub fn set_target(&mut self, target: Option<&str>, now_ms: u64) -> bool {
        let unchanged = match (&self.slot, target) {
            (Slot::Empty, None) => true,
            (Slot::Empty, Some(_)) => false,
            (Slot::Active { phase, .. }, None) => *phase == Phase::Exiting,
            (Slot::Active { title, phase, .. }, Some(next)) => {
                title == next && *phase != Phase::Exiting
            }
        };
        if unchanged {
            return false;
        }
        match target {
            Some(next) => self.enter(next, now_ms),
            None => {
                if let Slot::Active { phase, since, .. } = &mut self.slot {
                    *phase = Phase::Exiting;
                    *since = now_ms;
                }
            }
        }
        true
    }

    /// Settle finished phases. Returns `true` when the slot changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Slot::Active { phase, since, .. } = &mut self.slot else {
            return false;
        };
        if *phase == Phase::Shown || now_ms.saturating_sub(*since) < self.duration_ms {
            return false;
        }
        match *phase {
            Phase::Entering => *phase = Phase::Shown,
            Phase::Exiting => self.slot = Slot::Empty,
            Phase::Shown => {}
        }
        true
    }

    fn enter(&mut self, title: &str, now_ms: u64) {
        self.slot = Slot::Active {
            title: String::from(title),
            phase: Phase::Entering,
            since: now_ms,
        };
    }
}
