// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use masthead_header::config::HeaderConfig;
use masthead_header::header::{Header, HeaderElement, MountEnv, Navigator};
use masthead_interaction::capability::InputCapability;
use masthead_interaction::copy_button::{Clipboard, ClipboardError};
use masthead_scroll::sentinel::Viewport;
use masthead_signal::bus::SignalBus;
use masthead_signal::title::TitleSignal;
use masthead_signal::types::{EnvSignal, PointerKind};

struct Sink;

impl Clipboard for Sink {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

impl Navigator for Sink {
    fn navigate(&mut self, _path: &str) {}
}

fn mount(bus: &SignalBus, title: &TitleSignal) -> Header {
    let env = MountEnv {
        viewport: Viewport::new(1280.0, 800.0),
        sentinel_top: 120.0,
        now_ms: 0,
        route: "/projects/cdp",
    };
    Header::mount(
        bus,
        title,
        &InputCapability::HoverCapable,
        env,
        HeaderConfig::new("Jason Marsh", "hello@example.com"),
    )
    .unwrap()
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("header");
    let title = TitleSignal::new();
    let _claim = title.setter().claim("Customer Data Platform");

    group.bench_function("pump_60_frames", |b| {
        b.iter_batched(
            || {
                let bus = SignalBus::new();
                let header = mount(&bus, &title);
                (bus, header)
            },
            |(bus, mut header)| {
                let mut sink = Sink;
                for frame in 0..60_u64 {
                    bus.publish(EnvSignal::Scroll {
                        offset_y: frame as f64 * 12.0,
                    });
                    bus.publish(HeaderElement::Header.signal(PointerKind::Enter));
                    bus.publish(EnvSignal::Tick { now_ms: frame * 16 });
                    black_box(header.pump(&mut sink));
                }
                (bus, header)
            },
            BatchSize::SmallInput,
        )
    });

    let bus = SignalBus::new();
    let header = mount(&bus, &title);
    group.bench_function("render", |b| b.iter(|| black_box(header.render())));
    let render = header.render();
    group.bench_function("to_markup", |b| b.iter(|| black_box(render.to_markup())));
    group.finish();
}

criterion_group!(benches, bench_frames);
criterion_main!(benches);
