// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page title signal: a nullable display title shared across the page tree.
//!
//! ## Roles
//!
//! - The root layout owns the [`TitleSignal`] and hands out capabilities.
//! - Pages get a [`TitleSetter`]. A mounted page holds a [`TitleClaim`], which sets the title
//!   on creation and clears it on drop.
//! - The header gets a [`TitleReader`] to render its breadcrumb, and a [`TitleReset`] so that
//!   navigating home can clear the title before the route actually changes.
//!
//! ## Ownership
//!
//! The title has at most one writer at a time: the most recent claim owns it.
//! When an older claim is dropped after a newer one replaced it (the outgoing page unmounts
//! after the incoming page mounted), the newer title is left in place.
//!
//! ```
//! use masthead_signal::title::TitleSignal;
//!
//! let signal = TitleSignal::new();
//! let reader = signal.reader();
//! let page = signal.setter().claim("Skye 2.0");
//! assert_eq!(reader.title().as_deref(), Some("Skye 2.0"));
//! drop(page);
//! assert_eq!(reader.title(), None);
//! ```

use alloc::rc::{Rc, Weak};
use alloc::string::{String, ToString};
use core::cell::RefCell;

#[derive(Debug, Default)]
struct TitleState {
    title: Option<String>,
    version: u64,
    /// Claim that currently owns the title; `0` when unowned.
    owner: u64,
    next_claim: u64,
}

impl TitleState {
    fn replace(&mut self, title: Option<String>, owner: u64) {
        self.owner = owner;
        if self.title != title {
            #[cfg(feature = "tracing")]
            tracing::debug!(from = ?self.title, to = ?title, owner, "title changed");
            self.title = title;
            self.version += 1;
        }
    }
}

/// The shared title store, owned by the root layout.
#[derive(Clone, Debug, Default)]
pub struct TitleSignal {
    inner: Rc<RefCell<TitleState>>,
}

impl TitleSignal {
    /// Create an empty signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer capability for page-level code.
    pub fn setter(&self) -> TitleSetter {
        TitleSetter {
            inner: self.inner.clone(),
        }
    }

    /// Read capability for the header.
    pub fn reader(&self) -> TitleReader {
        TitleReader {
            inner: self.inner.clone(),
        }
    }

    /// Clear-only capability.
    pub fn resetter(&self) -> TitleReset {
        TitleReset {
            inner: self.inner.clone(),
        }
    }

    /// Clear the title and drop ownership, as the root layout does when no page claims it.
    pub fn reset(&self) {
        self.inner.borrow_mut().replace(None, 0);
    }
}

/// Write capability handed to pages.
#[derive(Clone, Debug)]
pub struct TitleSetter {
    inner: Rc<RefCell<TitleState>>,
}

impl TitleSetter {
    /// Set or clear the title without taking ownership.
    pub fn set_title(&self, title: Option<&str>) {
        self.inner
            .borrow_mut()
            .replace(title.map(ToString::to_string), 0);
    }

    /// Set the title for as long as the returned claim lives.
    pub fn claim(&self, title: &str) -> TitleClaim {
        let mut state = self.inner.borrow_mut();
        state.next_claim += 1;
        let id = state.next_claim;
        state.replace(Some(title.to_string()), id);
        TitleClaim {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }
}

/// A page's hold on the title. Dropping it clears the title unless a newer claim replaced it.
#[derive(Debug)]
#[must_use = "dropping a claim clears the title immediately"]
pub struct TitleClaim {
    inner: Weak<RefCell<TitleState>>,
    id: u64,
}

impl TitleClaim {
    /// Whether this claim still owns the title.
    pub fn is_current(&self) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|inner| inner.borrow().owner == self.id)
    }

    /// Change the claimed title, re-taking ownership.
    pub fn retitle(&self, title: &str) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().replace(Some(title.to_string()), self.id);
        }
    }
}

impl Drop for TitleClaim {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let mut state = inner.borrow_mut();
        if state.owner == self.id {
            state.replace(None, 0);
        }
    }
}

/// Read capability handed to the header.
#[derive(Clone, Debug)]
pub struct TitleReader {
    inner: Rc<RefCell<TitleState>>,
}

impl TitleReader {
    /// Current title.
    pub fn title(&self) -> Option<String> {
        self.inner.borrow().title.clone()
    }

    /// Borrow the current title without cloning it.
    pub fn with_title<R>(&self, f: impl FnOnce(Option<&str>) -> R) -> R {
        f(self.inner.borrow().title.as_deref())
    }

    /// Whether a title is set.
    pub fn is_set(&self) -> bool {
        self.inner.borrow().title.is_some()
    }

    /// Change counter; increases every time the title value changes.
    ///
    /// Compare against a previously observed version to detect updates.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }
}

/// Clear-only capability: lets a reader dismiss the title before navigating away.
#[derive(Clone, Debug)]
pub struct TitleReset {
    inner: Rc<RefCell<TitleState>>,
}

impl TitleReset {
    /// Clear the title and drop ownership.
    pub fn clear(&self) {
        self.inner.borrow_mut().replace(None, 0);
    }
}
