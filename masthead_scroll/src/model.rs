// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll model: the sentinel observer and both trackers driven by environment signals.
//!
//! [`ScrollModel::mount`] runs the mount-time baselines (direction baseline and the initial
//! sentinel observation). [`ScrollModel::handle`] then routes each geometry signal.
//! Within one scroll signal the scroll sample is applied before the re-observed visibility,
//! so a stick triggered by that scroll records the new offset as its threshold.
//! A hidden sentinel is also treated as a level: a free header re-sticks on a later scroll
//! sample once the offset clears the release point by the hysteresis margin.

use masthead_signal::types::EnvSignal;

use crate::direction::DirectionTracker;
use crate::sentinel::{SentinelObserver, Viewport, Visibility};
use crate::sticky::{StickinessConfig, StickinessTracker, StickyTransition};

/// What a signal changed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollChanges {
    /// Sentinel visibility flip, if any.
    pub visibility: Option<Visibility>,
    /// Stickiness transition, if any.
    pub sticky: Option<StickyTransition>,
    /// Whether the scroll direction flag flipped.
    pub direction: bool,
}

impl ScrollChanges {
    /// Whether anything observable changed.
    pub fn any(&self) -> bool {
        self.visibility.is_some() || self.sticky.is_some() || self.direction
    }
}

/// Sentinel, stickiness and direction state for one header.
#[derive(Clone, Debug)]
pub struct ScrollModel {
    viewport: Viewport,
    sentinel: SentinelObserver,
    sticky: StickinessTracker,
    direction: DirectionTracker,
}

impl ScrollModel {
    /// Set up trackers for a header whose sentinel sits at `sentinel_top`.
    pub fn mount(config: StickinessConfig, viewport: Viewport, sentinel_top: f64) -> Self {
        let mut model = Self {
            viewport,
            sentinel: SentinelObserver::at_top(sentinel_top, viewport.width),
            sticky: StickinessTracker::new(config),
            direction: DirectionTracker::new(viewport.offset_y),
        };
        model.sticky.on_scroll(viewport.offset_y);
        if let Some(v) = model.sentinel.observe(&model.viewport) {
            model.sticky.on_visibility(v);
        }
        model
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the header is stuck.
    pub fn is_stuck(&self) -> bool {
        self.sticky.is_stuck()
    }

    /// Whether the last scroll movement was downward.
    pub fn last_scroll_was_down(&self) -> bool {
        self.direction.last_scroll_was_down()
    }

    /// The stickiness tracker.
    pub fn sticky(&self) -> &StickinessTracker {
        &self.sticky
    }

    /// The sentinel observer.
    pub fn sentinel(&self) -> &SentinelObserver {
        &self.sentinel
    }

    /// Apply one environment signal. Non-geometry signals are ignored.
    pub fn handle(&mut self, signal: &EnvSignal) -> ScrollChanges {
        let mut changes = ScrollChanges::default();
        let scrolled = matches!(signal, EnvSignal::Scroll { .. });
        match *signal {
            EnvSignal::Scroll { offset_y } => {
                self.viewport.offset_y = offset_y;
                changes.direction = self.direction.record(offset_y);
                changes.sticky = self.sticky.on_scroll(offset_y);
            }
            EnvSignal::Resize { width, height } => {
                self.viewport.width = width;
                self.viewport.height = height;
                self.sentinel.set_width(width);
            }
            EnvSignal::Layout { sentinel_top } => self.sentinel.set_top(sentinel_top),
            EnvSignal::HoverMedia { .. } | EnvSignal::Pointer(_) | EnvSignal::Tick { .. } => {
                return changes;
            }
        }
        changes.visibility = self.sentinel.observe(&self.viewport);
        // A sample that released the header never re-sticks it.
        if let (Some(v), None) = (changes.visibility, changes.sticky) {
            changes.sticky = self.sticky.on_visibility(v);
        }
        if scrolled
            && changes.sticky.is_none()
            && self.sentinel.last() == Some(Visibility::Hidden)
        {
            changes.sticky = self.sticky.on_scroll_while_hidden();
        }
        changes
    }
}
