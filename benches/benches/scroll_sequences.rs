// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use masthead_scroll::model::ScrollModel;
use masthead_scroll::sentinel::Viewport;
use masthead_scroll::sticky::StickinessConfig;
use masthead_signal::types::EnvSignal;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A long page read top to bottom with small back-scrolls.
fn reading_session(n: usize) -> Vec<EnvSignal> {
    let mut rng = Rng::new(0x5EED);
    let mut y = 0.0_f64;
    (0..n)
        .map(|_| {
            y = (y + rng.next_f64() * 60.0 - 15.0).max(0.0);
            EnvSignal::Scroll { offset_y: y }
        })
        .collect()
}

/// One-pixel jitter around a release boundary.
fn jitter(n: usize) -> Vec<EnvSignal> {
    (0..n)
        .map(|i| EnvSignal::Scroll {
            offset_y: if i % 2 == 0 { 270.0 } else { 271.0 },
        })
        .collect()
}

fn mount() -> ScrollModel {
    ScrollModel::mount(
        StickinessConfig::default(),
        Viewport::new(1280.0, 800.0),
        120.0,
    )
}

fn bench_scroll_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_model");
    for &n in &[256usize, 4096] {
        let signals = reading_session(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("reading_session_n{}", n), |b| {
            b.iter_batched(
                mount,
                |mut model| {
                    let mut changed = 0_usize;
                    for s in &signals {
                        changed += usize::from(model.handle(s).any());
                    }
                    black_box(changed);
                },
                BatchSize::SmallInput,
            )
        });
    }
    let signals = jitter(4096);
    group.bench_function("boundary_jitter", |b| {
        b.iter_batched(
            || {
                let mut model = mount();
                model.handle(&EnvSignal::Scroll { offset_y: 400.0 });
                model
            },
            |mut model| {
                for s in &signals {
                    model.handle(s);
                }
                black_box(model.is_stuck());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_scroll_model);
criterion_main!(benches);
