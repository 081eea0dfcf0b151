// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signal bus: fan environment signals out to per-subscriber queues.
//!
//! ## Usage
//!
//! 1) The host creates one [`SignalBus`] and publishes every environment change to it.
//! 2) Each consumer calls [`SignalBus::subscribe`] with the [`SignalMask`] it cares about and
//!    keeps the returned [`Subscription`] for as long as it is mounted.
//! 3) The consumer calls [`Subscription::drain`] when it is ready to react, typically once per frame.
//!
//! Delivery is FIFO per subscription. Signals published while nobody listens are dropped.
//! Consumers read the latest values rather than a causal history, so independent
//! subscriptions may process the same signals in any relative order.
//!
//! ## Teardown
//!
//! Dropping a [`Subscription`] removes its queue from the bus.
//! A subscription that outlives its bus stays valid and simply never receives anything.

use alloc::collections::VecDeque;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::types::{EnvSignal, SignalMask};

#[derive(Debug)]
struct Slot {
    id: u64,
    mask: SignalMask,
    queue: VecDeque<EnvSignal>,
}

#[derive(Debug, Default)]
struct BusInner {
    next_id: u64,
    slots: Vec<Slot>,
    published: u64,
}

/// Shared handle to a single-threaded signal bus.
///
/// Cloning the handle yields another reference to the same bus.
#[derive(Clone, Debug, Default)]
pub struct SignalBus {
    inner: Rc<RefCell<BusInner>>,
}

impl SignalBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a consumer for the signal kinds in `mask`.
    ///
    /// The registration lasts until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, mask: SignalMask) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.slots.push(Slot {
            id,
            mask,
            queue: VecDeque::new(),
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(id, mask = ?mask, subscribers = inner.slots.len(), "subscribed");
        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
            mask,
        }
    }

    /// Deliver `signal` to every subscription whose mask selects it.
    ///
    /// Returns the number of subscriptions that received it.
    pub fn publish(&self, signal: EnvSignal) -> usize {
        let kind = signal.kind();
        let mut inner = self.inner.borrow_mut();
        inner.published += 1;
        let mut delivered = 0;
        for slot in inner.slots.iter_mut().filter(|s| s.mask.intersects(kind)) {
            slot.queue.push_back(signal.clone());
            delivered += 1;
        }
        delivered
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().slots.len()
    }

    /// Total number of signals published so far, delivered or not.
    pub fn published_count(&self) -> u64 {
        self.inner.borrow().published
    }
}

/// A live registration on a [`SignalBus`].
///
/// Dropping the subscription deregisters it.
#[derive(Debug)]
pub struct Subscription {
    bus: Weak<RefCell<BusInner>>,
    id: u64,
    mask: SignalMask,
}

impl Subscription {
    /// Signal kinds this subscription receives.
    pub fn mask(&self) -> SignalMask {
        self.mask
    }

    /// Whether the bus this subscription belongs to still exists.
    pub fn is_attached(&self) -> bool {
        self.bus.strong_count() > 0
    }

    /// Number of signals waiting to be drained.
    pub fn pending(&self) -> usize {
        self.with_slot(|slot| slot.queue.len()).unwrap_or(0)
    }

    /// Take the oldest pending signal, if any.
    pub fn next_signal(&self) -> Option<EnvSignal> {
        self.with_slot(|slot| slot.queue.pop_front()).flatten()
    }

    /// Take every pending signal in publish order.
    pub fn drain(&self) -> Vec<EnvSignal> {
        self.with_slot(|slot| slot.queue.drain(..).collect())
            .unwrap_or_default()
    }

    fn with_slot<R>(&self, f: impl FnOnce(&mut Slot) -> R) -> Option<R> {
        let bus = self.bus.upgrade()?;
        let mut inner = bus.borrow_mut();
        inner.slots.iter_mut().find(|s| s.id == self.id).map(f)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(bus) = self.bus.upgrade() else {
            return;
        };
        let mut inner = bus.borrow_mut();
        inner.slots.retain(|s| s.id != self.id);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = self.id,
            subscribers = inner.slots.len(),
            "unsubscribed"
        );
    }
}
