// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=masthead_scroll --heading-base-level=0

//! Masthead Scroll: scroll-driven header state.
//!
//! ## Overview
//!
//! Three independent pieces observe the viewport:
//!
//! - [`SentinelObserver`](crate::sentinel::SentinelObserver) decides whether a marker at the
//!   header's natural top is inside the viewport, using [`kurbo::Rect`] intersection with
//!   threshold `0` and no root margin.
//! - [`StickinessTracker`](crate::sticky::StickinessTracker) turns "sentinel hidden" into a
//!   `Stuck` state and releases it only near the top of the page or once the offset has fallen
//!   a full [`hysteresis_margin`](crate::sticky::StickinessConfig::hysteresis_margin) below
//!   where it stuck.
//! - [`DirectionTracker`](crate::direction::DirectionTracker) remembers whether the latest
//!   movement was downward.
//!
//! [`ScrollModel`](crate::model::ScrollModel) wires them to
//! [`EnvSignal`](masthead_signal::types::EnvSignal)s. Each tracker reads only the latest values,
//! so reordering between them is harmless.
//!
//! ```
//! use masthead_scroll::model::ScrollModel;
//! use masthead_scroll::sentinel::Viewport;
//! use masthead_scroll::sticky::StickinessConfig;
//! use masthead_signal::types::EnvSignal;
//!
//! let mut m = ScrollModel::mount(StickinessConfig::default(), Viewport::new(1280.0, 800.0), 120.0);
//! m.handle(&EnvSignal::Scroll { offset_y: 400.0 });
//! assert!(m.is_stuck());
//! assert!(m.last_scroll_was_down());
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: log visibility flips and stick/release transitions.
//! - `serde`: derive `Serialize`/`Deserialize` for [`StickinessConfig`](crate::sticky::StickinessConfig).
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod direction;
pub mod model;
pub mod sentinel;
pub mod sticky;

pub use direction::DirectionTracker;
pub use masthead_signal::error::ConfigError;
pub use model::{ScrollChanges, ScrollModel};
pub use sentinel::{SentinelObserver, Viewport, Visibility};
pub use sticky::{StickinessConfig, StickinessTracker, StickyState, StickyTransition};
