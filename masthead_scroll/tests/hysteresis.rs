// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll sequences checked against the stickiness and direction contracts.

use masthead_scroll::direction::DirectionTracker;
use masthead_scroll::model::ScrollModel;
use masthead_scroll::sentinel::{Viewport, Visibility};
use masthead_scroll::sticky::{StickinessConfig, StickyState};
use masthead_signal::types::EnvSignal;
use proptest::prelude::*;

const SENTINEL_TOP: f64 = 120.0;

fn mount() -> ScrollModel {
    ScrollModel::mount(
        StickinessConfig::default(),
        Viewport::new(1280.0, 800.0),
        SENTINEL_TOP,
    )
}

fn scroll(m: &mut ScrollModel, y: f64) {
    m.handle(&EnvSignal::Scroll { offset_y: y });
}

#[test]
fn crossing_exactly_below_margin_releases() {
    let mut m = mount();
    let expected = [
        (0.0, false),
        (400.0, true),
        (350.0, true),
        (290.0, true),
        (280.0, true),
        (270.0, true),
        (269.0, false),
    ];
    for (y, stuck) in expected {
        scroll(&mut m, y);
        assert_eq!(m.is_stuck(), stuck, "offset {y}");
    }
}

#[test]
fn oscillation_at_release_boundary_toggles_once() {
    let mut m = mount();
    scroll(&mut m, 400.0);
    assert!(m.is_stuck());
    // The release boundary is 270: offsets 270 and 271 stay stuck, 269 releases.
    for _ in 0..50 {
        scroll(&mut m, 271.0);
        scroll(&mut m, 270.0);
    }
    assert!(m.is_stuck());
    assert_eq!(m.sticky().transitions(), 1);
    for _ in 0..50 {
        scroll(&mut m, 269.0);
        scroll(&mut m, 270.0);
        scroll(&mut m, 271.0);
    }
    assert!(!m.is_stuck());
    assert_eq!(m.sticky().transitions(), 2);
}

#[test]
fn scrolling_back_down_past_the_sentinel_resticks() {
    let mut m = mount();
    let expected = [
        (400.0, true),
        (269.0, false),
        (600.0, true),
        (1200.0, true),
        (3000.0, true),
    ];
    for (y, stuck) in expected {
        scroll(&mut m, y);
        assert_eq!(m.sentinel().last(), Some(Visibility::Hidden), "offset {y}");
        assert_eq!(m.is_stuck(), stuck, "offset {y}");
    }
    assert_eq!(m.sticky().state(), StickyState::Stuck { threshold: 600.0 });
}

proptest! {
    /// Once stuck at `T`, every sample above `max(T − margin, top_threshold)` keeps it stuck.
    #[test]
    fn stuck_until_offset_leaves_band(
        stick_at in 200.0_f64..5000.0,
        deltas in prop::collection::vec(-120.0_f64..400.0, 1..60),
    ) {
        let mut m = mount();
        scroll(&mut m, stick_at);
        let StickyState::Stuck { threshold } = m.sticky().state() else {
            return Err(TestCaseError::fail("expected stuck after passing the sentinel"));
        };
        prop_assert_eq!(threshold, stick_at);

        let config = *m.sticky().config();
        let floor = threshold - config.hysteresis_margin;
        for d in deltas {
            // Keep samples inside the band so the header must never release.
            let y = (threshold + d).max(floor).max(config.top_threshold + 1.0);
            scroll(&mut m, y);
            prop_assert!(m.is_stuck(), "released at {} (threshold {})", y, threshold);
        }
    }

    /// Any sample at or below the top threshold frees a stuck header.
    #[test]
    fn near_top_always_releases(stick_at in 200.0_f64..5000.0, top in 0.0_f64..=10.0) {
        let mut m = mount();
        scroll(&mut m, stick_at);
        prop_assert!(m.is_stuck());
        scroll(&mut m, top);
        prop_assert!(!m.is_stuck());
    }

    /// Jittering by one pixel around any offset toggles at most once per real crossing.
    #[test]
    fn jitter_never_flickers(
        stick_at in 300.0_f64..3000.0,
        around in 150.0_f64..3000.0,
        n in 1_usize..40,
    ) {
        let mut m = mount();
        scroll(&mut m, stick_at);
        let before = m.sticky().transitions();
        for _ in 0..n {
            scroll(&mut m, around - 1.0);
            scroll(&mut m, around + 1.0);
        }
        prop_assert!(m.sticky().transitions() - before <= 1);
    }

    /// Feeding the same offset twice never changes the direction flag.
    #[test]
    fn repeated_sample_is_idempotent(samples in prop::collection::vec(0.0_f64..10_000.0, 1..50)) {
        let mut t = DirectionTracker::default();
        for y in samples {
            t.record(y);
            let before = t.last_scroll_was_down();
            prop_assert!(!t.record(y));
            prop_assert_eq!(t.last_scroll_was_down(), before);
        }
    }

    /// Down, up past the margin, then down again re-sticks without flickering at the release.
    #[test]
    fn down_up_down_resticks_once(
        stick_at in 600.0_f64..5000.0,
        up_by in 131.0_f64..400.0,
        down_by in 130.0_f64..3000.0,
        jitter in 1_usize..20,
    ) {
        let mut m = mount();
        scroll(&mut m, stick_at);
        prop_assert!(m.is_stuck());

        let released = stick_at - up_by;
        scroll(&mut m, released);
        prop_assert!(!m.is_stuck());
        prop_assert_eq!(m.sentinel().last(), Some(Visibility::Hidden));
        for _ in 0..jitter {
            scroll(&mut m, released + 1.0);
            scroll(&mut m, released - 1.0);
        }
        prop_assert!(!m.is_stuck());
        prop_assert_eq!(m.sticky().transitions(), 2);

        let back = released + down_by;
        scroll(&mut m, back);
        prop_assert_eq!(m.sticky().state(), StickyState::Stuck { threshold: back });
        prop_assert_eq!(m.sticky().transitions(), 3);
    }
}
