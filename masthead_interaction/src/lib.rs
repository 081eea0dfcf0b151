// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=masthead_interaction --heading-base-level=0

//! Masthead Interaction: hover/touch-aware state for interactive header controls.
//!
//! ## Overview
//!
//! - [`capability`]: the [`PointerCapability`](crate::capability::PointerCapability) interface
//!   with its `HoverCapable` / `TouchOnly` variants, and the
//!   [`CapabilityDetector`](crate::capability::CapabilityDetector) that follows the host's hover
//!   media feature.
//! - [`hover`]: a per-element [`HoverState`](crate::hover::HoverState) that can never stay
//!   hovered after a touch.
//! - [`copy_button`]: the `Email` / `Copy` / `Copied!` action button.
//! - [`shimmer`]: the rotating subtitle with its sweep/pause timeline.
//!
//! All state here is plain data advanced by explicit calls; nothing reads a clock or registers
//! a callback. Time is passed in as milliseconds from the host.
//!
//! ## Workflow
//!
//! 1) Mount a [`CapabilityDetector`](crate::capability::CapabilityDetector) from the host query.
//! 2) For each pointer signal, call [`HoverState::apply`](crate::hover::HoverState::apply) on the
//!    addressed element with the detector as capability.
//! 3) When the capability changes, call
//!    [`HoverState::capability_changed`](crate::hover::HoverState::capability_changed) on every
//!    element so no stale hover survives.
//!
//! ```
//! use masthead_interaction::capability::{CapabilityDetector, PointerCapability};
//! use masthead_interaction::hover::HoverState;
//! use masthead_signal::types::PointerKind;
//!
//! let detector = CapabilityDetector::mount(&|| Some(false));
//! let mut name = HoverState::new();
//! let _ = name.apply(PointerKind::Enter, &detector);
//! assert!(!detector.supports_hover());
//! assert!(!name.is_hovered());
//! ```
//!
//! ## Features
//!
//! - `tracing`: log capability changes and clipboard failures.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration.
//! - `rand`: `RandomPicker`, which picks shimmer words at random.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod capability;
pub mod copy_button;
pub mod hover;
pub mod shimmer;

pub use capability::{
    CapabilityDetector, HoverMediaQuery, InputCapability, NoMediaQuery, PointerCapability,
};
pub use copy_button::{Clipboard, ClipboardError, CopyButton, CopyLabel};
pub use hover::{HoverEvent, HoverState};
#[cfg(feature = "rand")]
pub use shimmer::RandomPicker;
pub use shimmer::{CyclingPicker, Shimmer, ShimmerConfig, WordPicker};
