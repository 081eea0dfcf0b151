// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A detail page claims the title, the breadcrumb enters, and the name navigates home.
//!
//! Prints the header markup at each step.
//!
//! Run:
//! - `cargo run -p masthead_demos --example header_breadcrumb`

use masthead_header::config::HeaderConfig;
use masthead_header::header::{Header, HeaderElement, MountEnv, Navigator};
use masthead_interaction::capability::InputCapability;
use masthead_interaction::copy_button::{Clipboard, ClipboardError};
use masthead_scroll::sentinel::Viewport;
use masthead_signal::bus::SignalBus;
use masthead_signal::title::TitleSignal;
use masthead_signal::types::{EnvSignal, PointerKind};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Browser {
    clipboard: Option<String>,
    location: Vec<String>,
}

impl Clipboard for Browser {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard = Some(text.to_owned());
        Ok(())
    }
}

impl Navigator for Browser {
    fn navigate(&mut self, path: &str) {
        self.location.push(path.to_owned());
    }
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
        route: "/projects/cdp",
    };
    let config = HeaderConfig::new("Jason Marsh", "hello@example.com");
    let mut header = Header::mount(&bus, &title, &InputCapability::HoverCapable, env, config)
        .expect("default config is valid");
    let mut browser = Browser::default();

    // The page mounts and claims the title for as long as it lives.
    tracing::info!("page mounts");
    let page = title.setter().claim("Customer Data Platform");
    header.pump(&mut browser);
    println!("entering: {}", header.render().to_markup());

    tracing::info!(now_ms = 250, "breadcrumb settles");
    bus.publish(EnvSignal::Tick { now_ms: 250 });
    header.pump(&mut browser);
    println!("shown:    {}", header.render().to_markup());

    tracing::info!("copy email");
    bus.publish(HeaderElement::EmailButton.signal(PointerKind::Activate));
    header.pump(&mut browser);
    println!(
        "copied {:?}, label {}",
        browser.clipboard,
        header.render().action.label
    );

    // Clicking the name clears the title before asking the browser to navigate.
    tracing::info!("name activated");
    bus.publish(HeaderElement::Name.signal(PointerKind::Activate));
    header.pump(&mut browser);
    println!("exiting:  {}", header.render().to_markup());
    println!("navigated to {:?}", browser.location);

    tracing::info!("page unmounts");
    drop(page);
    header.set_route("/");
    bus.publish(EnvSignal::Tick { now_ms: 500 });
    header.pump(&mut browser);
    println!("home:     {}", header.render().to_markup());
}
