// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=masthead_header --heading-base-level=0

//! Masthead Header: a sticky site header composed from scroll, capability and title signals.
//!
//! ## Overview
//!
//! [`Header`](crate::header::Header) brings the other Masthead crates together:
//!
//! - a [`ScrollModel`](masthead_scroll::model::ScrollModel) decides whether the header is
//!   stuck and which way the page last scrolled;
//! - a [`CapabilityDetector`](masthead_interaction::capability::CapabilityDetector) gates hover
//!   affordances on devices that can actually hover;
//! - a [`TitleReader`](masthead_signal::title::TitleReader) supplies the page title for the
//!   breadcrumb, which enters and exits through a [`Presence`](crate::presence::Presence).
//!
//! Rendering is a pure function of that state: [`compose`](crate::render::compose) produces a
//! [`HeaderRender`](crate::render::HeaderRender), and
//! [`HeaderRender::to_markup`](crate::render::HeaderRender::to_markup) writes it as HTML.
//!
//! ## Render rules
//!
//! 1. On the home page the name is plain text; its hover background needs a hover-capable device.
//! 2. Elsewhere the name links home. Activating it clears the page title first, so the
//!    breadcrumb starts leaving before navigation happens.
//! 3. A stuck header collapses its padding and hides the subtitle. After a downward scroll it
//!    dims to [`dim_opacity`](crate::config::HeaderConfig::dim_opacity) unless the pointer is
//!    over it.
//! 4. A header that is not stuck shows the shimmer subtitle under the name.
//! 5. The breadcrumb shows exactly when the title is set and the route is a detail page.
//!
//! ```
//! use masthead_header::config::HeaderConfig;
//! use masthead_header::header::{Header, MountEnv};
//! use masthead_interaction::capability::InputCapability;
//! use masthead_scroll::sentinel::Viewport;
//! use masthead_signal::bus::SignalBus;
//! use masthead_signal::title::TitleSignal;
//!
//! let bus = SignalBus::new();
//! let title = TitleSignal::new();
//! let env = MountEnv {
//!     viewport: Viewport::new(1280.0, 800.0),
//!     sentinel_top: 120.0,
//!     now_ms: 0,
//!     route: "/projects/cdp",
//! };
//! let config = HeaderConfig::new("Jason Marsh", "hello@example.com");
//! let header = Header::mount(&bus, &title, &InputCapability::HoverCapable, env, config).unwrap();
//!
//! let render = header.render();
//! assert_eq!(render.name.href, Some("/"));
//! assert!(!render.shows_breadcrumb());
//!
//! header.unmount();
//! assert_eq!(bus.subscriber_count(), 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo through `masthead_scroll`.
//! - `tracing`: log mount, unmount and navigation, and enable logging in the child crates.
//! - `serde`: derive `Serialize`/`Deserialize` for [`HeaderConfig`](crate::config::HeaderConfig).
//! - `rand`: enable `RandomPicker` in `masthead_interaction`, for
//!   [`Header::with_picker`](crate::header::Header::with_picker).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod header;
pub mod presence;
pub mod render;
pub mod route;

pub use config::HeaderConfig;
pub use header::{Header, HeaderElement, MountEnv, Navigator, PumpReport};
pub use presence::{Phase, Presence};
pub use render::{HeaderFlags, HeaderRender, compose};
pub use route::{DetailPattern, RouteKind};
