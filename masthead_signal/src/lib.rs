// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=masthead_signal --heading-base-level=0

//! Masthead Signal: the message-passing layer between a host environment and a header.
//!
//! ## Overview
//!
//! A header reacts to a handful of environment signals: scroll offsets, viewport resizes,
//! layout shifts of its sentinel, changes of the hover media feature, pointer and touch
//! input on its interactive elements, and animation-frame ticks.
//! Rather than registering one callback per signal, the host publishes every signal to a
//! [`SignalBus`](crate::bus::SignalBus) and each consumer drains its own
//! [`Subscription`](crate::bus::Subscription).
//! This separates "what changed" from "how a consumer reacts to it".
//!
//! The crate also hosts the page-supplied [`TitleSignal`](crate::title::TitleSignal):
//! a nullable display title that page-level code claims while it is mounted and that a header
//! reads to decide whether to show a breadcrumb.
//!
//! ## Lifecycle
//!
//! Every registration is an RAII value.
//! Dropping a [`Subscription`](crate::bus::Subscription) deregisters it from the bus,
//! and dropping a [`TitleClaim`](crate::title::TitleClaim) clears the title it set.
//! There is no way to register a listener without holding the value that releases it.
//!
//! ```
//! use masthead_signal::bus::SignalBus;
//! use masthead_signal::types::{EnvSignal, SignalMask};
//!
//! let bus = SignalBus::new();
//! let sub = bus.subscribe(SignalMask::SCROLL);
//! bus.publish(EnvSignal::Scroll { offset_y: 120.0 });
//! bus.publish(EnvSignal::Tick { now_ms: 16 });
//! assert_eq!(sub.drain(), vec![EnvSignal::Scroll { offset_y: 120.0 }]);
//!
//! drop(sub);
//! assert_eq!(bus.subscriber_count(), 0);
//! ```
//!
//! Configuration across the workspace is validated into a shared
//! [`ConfigError`](crate::error::ConfigError).
//!
//! This crate is `no_std` and uses `alloc`. It is single-threaded by construction:
//! handles are reference counted with `Rc` and are neither `Send` nor `Sync`.

#![no_std]

extern crate alloc;

pub mod bus;
pub mod error;
pub mod title;
pub mod types;

pub use bus::{SignalBus, Subscription};
pub use error::ConfigError;
pub use title::{TitleClaim, TitleReader, TitleReset, TitleSetter, TitleSignal};
pub use types::{ElementKey, EnvSignal, PointerKind, PointerSignal, SignalMask};
