// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random pointer input never leaves a control hovered on touch.

use masthead_interaction::capability::{CapabilityDetector, InputCapability};
use masthead_interaction::copy_button::{CopyButton, CopyLabel};
use masthead_interaction::hover::HoverState;
use masthead_signal::types::{EnvSignal, PointerKind};
use proptest::prelude::*;

fn pointer_kind() -> impl Strategy<Value = PointerKind> {
    prop_oneof![
        Just(PointerKind::Enter),
        Just(PointerKind::Leave),
        Just(PointerKind::DownElsewhere),
        Just(PointerKind::TouchStart),
        Just(PointerKind::TouchEnd),
        Just(PointerKind::Activate),
    ]
}

proptest! {
    #[test]
    fn touch_only_never_hovers(kinds in prop::collection::vec(pointer_kind(), 0..64)) {
        let mut h = HoverState::new();
        let mut button = CopyButton::new("hello@example.com", 2000);
        for kind in kinds {
            let _ = h.apply(kind, &InputCapability::TouchOnly);
            let _ = button.pointer(kind, &InputCapability::TouchOnly);
            prop_assert!(!h.is_hovered());
            prop_assert_ne!(button.label(), CopyLabel::Copy);
        }
    }

    #[test]
    fn touch_always_clears(
        steps in prop::collection::vec((any::<bool>(), pointer_kind()), 0..64),
    ) {
        let mut detector = CapabilityDetector::mount(&InputCapability::HoverCapable);
        let mut h = HoverState::new();
        for (hover_media, kind) in steps {
            if detector.handle(&EnvSignal::HoverMedia { matches: hover_media }).is_some() {
                let _ = h.capability_changed(&detector);
            }
            let _ = h.apply(kind, &detector);
            if matches!(kind, PointerKind::TouchStart | PointerKind::TouchEnd) {
                prop_assert!(!h.is_hovered());
            }
            if !hover_media {
                prop_assert!(!h.is_hovered());
            }
        }
    }
}
