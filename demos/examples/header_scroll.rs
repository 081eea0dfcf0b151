// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll a page under the header and watch it stick, dim and release.
//!
//! The offsets walk down past the sentinel, back up inside the hysteresis band, out of it,
//! down again, and finally to the top.
//! Set `RUST_LOG=trace` for the trackers' own events.
//!
//! Run:
//! - `cargo run -p masthead_demos --example header_scroll`

use masthead_header::config::HeaderConfig;
use masthead_header::header::{Header, HeaderElement, MountEnv, Navigator};
use masthead_interaction::capability::InputCapability;
use masthead_interaction::copy_button::{Clipboard, ClipboardError};
use masthead_scroll::sentinel::Viewport;
use masthead_signal::bus::SignalBus;
use masthead_signal::title::TitleSignal;
use masthead_signal::types::{EnvSignal, PointerKind};
use tracing_subscriber::EnvFilter;

struct NoHost;

impl Clipboard for NoHost {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

impl Navigator for NoHost {
    fn navigate(&mut self, _path: &str) {}
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let bus = SignalBus::new();
    let title = TitleSignal::new();
    let env = MountEnv {
        viewport: Viewport::new(1280.0, 800.0),
        sentinel_top: 120.0,
        now_ms: 0,
        route: "/",
    };
    let config = HeaderConfig::new("Jason Marsh", "hello@example.com");
    let mut header = Header::mount(&bus, &title, &InputCapability::HoverCapable, env, config)
        .expect("default config is valid");
    let mut host = NoHost;

    // The return trip releases at 269 while the sentinel is still hidden, and 600 sticks again.
    for offset in [0.0, 60.0, 400.0, 350.0, 290.0, 271.0, 269.0, 600.0, 5.0] {
        tracing::info!(offset, "scroll");
        bus.publish(EnvSignal::Scroll { offset_y: offset });
        header.pump(&mut host);
        let r = header.render();
        println!(
            "offset {offset:>5}: collapsed={:<5} subtitle={:<5} opacity={}",
            r.is_collapsed(),
            r.subtitle.is_some(),
            r.opacity,
        );
    }

    // Hovering a dimmed header brings it back to full opacity.
    tracing::info!("hover while stuck");
    bus.publish(EnvSignal::Scroll { offset_y: 900.0 });
    bus.publish(HeaderElement::Header.signal(PointerKind::Enter));
    header.pump(&mut host);
    println!("hovered while stuck: opacity={}", header.render().opacity);

    tracing::info!("unmount");
    header.unmount();
    println!("subscribers after unmount: {}", bus.subscriber_count());
}
