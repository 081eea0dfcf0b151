// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copy-email action button.
//!
//! The button shows `Email` at rest, `Copy` while hovered and `Copied!` for a short while
//! after a successful copy. Pressing it clears hover first, so a tap on a touch screen
//! never leaves the `Copy` label behind.
//!
//! Clipboard access goes through the [`Clipboard`] trait. A failed write is logged and
//! otherwise ignored: the label simply stays as it was.

use alloc::string::String;
use core::fmt;

use masthead_signal::types::PointerKind;

use crate::capability::PointerCapability;
use crate::hover::{HoverEvent, HoverState};

/// How long `Copied!` stays up by default.
pub const DEFAULT_COPIED_MS: u64 = 2000;

/// Why a clipboard write failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipboardError {
    /// The host refused access (permissions, insecure context).
    Denied,
    /// The host has no clipboard API.
    Unavailable,
    /// Any other host failure.
    Other(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Denied => f.write_str("clipboard access denied"),
            Self::Unavailable => f.write_str("clipboard unavailable"),
            Self::Other(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl core::error::Error for ClipboardError {}

/// Host clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Text shown on the button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CopyLabel {
    /// At rest.
    Email,
    /// Hovered.
    Copy,
    /// Just copied.
    Copied,
}

impl CopyLabel {
    /// The visible text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Copy => "Copy",
            Self::Copied => "Copied!",
        }
    }
}

impl fmt::Display for CopyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the copy-email button.
#[derive(Clone, Debug)]
pub struct CopyButton {
    address: String,
    copied_ms: u64,
    hover: HoverState,
    copied_until: Option<u64>,
}

impl CopyButton {
    /// A button that copies `address` and shows `Copied!` for `copied_ms`.
    pub fn new(address: impl Into<String>, copied_ms: u64) -> Self {
        Self {
            address: address.into(),
            copied_ms,
            hover: HoverState::new(),
            copied_until: None,
        }
    }

    /// Address copied on press; also the tooltip text.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Hover state of the button.
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Whether the `Copied!` confirmation is up.
    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// Current label.
    pub fn label(&self) -> CopyLabel {
        if self.is_copied() {
            CopyLabel::Copied
        } else if self.hover.is_hovered() {
            CopyLabel::Copy
        } else {
            CopyLabel::Email
        }
    }

    /// Pointer input on the button. Activation is handled by [`CopyButton::press`].
    pub fn pointer(
        &mut self,
        kind: PointerKind,
        capability: &impl PointerCapability,
    ) -> Option<HoverEvent> {
        self.hover.apply(kind, capability)
    }

    /// The input capability changed; a hover left by a mouse is dropped on touch.
    pub fn capability_changed(
        &mut self,
        capability: &impl PointerCapability,
    ) -> Option<HoverEvent> {
        self.hover.capability_changed(capability)
    }

    /// Copy the address. Returns whether the clipboard accepted it.
    pub fn press(&mut self, clipboard: &mut impl Clipboard, now_ms: u64) -> bool {
        let _ = self.hover.activate();
        match clipboard.write_text(&self.address) {
            Ok(()) => {
                self.copied_until = Some(now_ms.saturating_add(self.copied_ms));
                true
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "failed to copy email address");
                false
            }
        }
    }

    /// Advance time. Returns `true` when the confirmation expired on this tick.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.copied_until {
            Some(until) if now_ms >= until => {
                self.copied_until = None;
                true
            }
            _ => false,
        }
    }
}
