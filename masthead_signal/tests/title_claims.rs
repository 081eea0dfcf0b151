// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page mount/unmount sequences against a reference model of title ownership.

use masthead_signal::title::{TitleClaim, TitleSignal};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Mount(u8),
    Unmount(usize),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0_u8..6).prop_map(Op::Mount),
        3 => (0_usize..8).prop_map(Op::Unmount),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn title_follows_latest_live_claim(ops in prop::collection::vec(op(), 0..40)) {
        let signal = TitleSignal::new();
        let setter = signal.setter();
        let reader = signal.reader();

        // (page number, claim) for every mounted page, in mount order.
        let mut mounted: Vec<(u8, TitleClaim)> = Vec::new();
        // Page number whose claim owns the title in the model.
        let mut owner: Option<(usize, u8)> = None;
        let mut serial = 0_usize;
        let mut serials: Vec<usize> = Vec::new();

        for op in ops {
            match op {
                Op::Mount(page) => {
                    serial += 1;
                    mounted.push((page, setter.claim(&format!("Project {page}"))));
                    serials.push(serial);
                    owner = Some((serial, page));
                }
                Op::Unmount(i) => {
                    if mounted.is_empty() {
                        continue;
                    }
                    let i = i % mounted.len();
                    let (_, claim) = mounted.remove(i);
                    let gone = serials.remove(i);
                    drop(claim);
                    if owner.is_some_and(|(s, _)| s == gone) {
                        owner = None;
                    }
                }
                Op::Reset => {
                    signal.reset();
                    owner = None;
                }
            }
            let expected = owner.map(|(_, page)| format!("Project {page}"));
            prop_assert_eq!(reader.title(), expected);
        }

        mounted.clear();
        prop_assert_eq!(reader.title(), None);
    }
}

#[test]
fn page_swap_keeps_incoming_title() {
    let signal = TitleSignal::new();
    let setter = signal.setter();
    let first = setter.claim("CDP");
    let second = setter.claim("ChatGPT App");
    drop(first);
    assert_eq!(signal.reader().title().as_deref(), Some("ChatGPT App"));
    drop(second);
    assert!(!signal.reader().is_set());
}
