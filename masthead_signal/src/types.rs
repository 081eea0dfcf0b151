// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signal vocabulary shared by the bus and its consumers.

/// Identifier of an interactive element that receives pointer input.
///
/// The bus does not interpret keys; consumers agree on their meaning
/// (a header, for example, assigns one key per hoverable control).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElementKey(pub u32);

/// Kind of pointer or touch input delivered to an element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// The pointer moved over the element.
    Enter,
    /// The pointer moved off the element.
    Leave,
    /// A pointer press landed somewhere other than the element.
    DownElsewhere,
    /// A touch began on the element.
    TouchStart,
    /// A touch on the element ended.
    TouchEnd,
    /// The element was activated (click or tap).
    Activate,
}

/// Pointer input addressed to one element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PointerSignal {
    /// Element that received the input.
    pub target: ElementKey,
    /// What happened.
    pub kind: PointerKind,
}

impl PointerSignal {
    /// Pointer input of `kind` on `target`.
    pub const fn new(target: ElementKey, kind: PointerKind) -> Self {
        Self { target, kind }
    }
}

/// A change in the environment, published by the host.
///
/// Offsets and sizes are in CSS pixels. Timestamps are milliseconds on a
/// monotonic host clock.
#[derive(Clone, Debug, PartialEq)]
pub enum EnvSignal {
    /// The viewport scrolled; `offset_y` is the new vertical offset.
    Scroll {
        /// Vertical scroll offset of the viewport.
        offset_y: f64,
    },
    /// The viewport changed size.
    Resize {
        /// Viewport width.
        width: f64,
        /// Viewport height.
        height: f64,
    },
    /// A layout shift moved the sentinel to a new document position.
    Layout {
        /// Document-space y of the sentinel's top edge.
        sentinel_top: f64,
    },
    /// The hover-capability media feature changed.
    HoverMedia {
        /// Whether `(hover: hover)` now matches.
        matches: bool,
    },
    /// Pointer or touch input on an interactive element.
    Pointer(PointerSignal),
    /// An animation frame.
    Tick {
        /// Host clock at the frame.
        now_ms: u64,
    },
}

impl EnvSignal {
    /// The mask bit that selects this signal.
    pub fn kind(&self) -> SignalMask {
        match self {
            Self::Scroll { .. } => SignalMask::SCROLL,
            Self::Resize { .. } => SignalMask::RESIZE,
            Self::Layout { .. } => SignalMask::LAYOUT,
            Self::HoverMedia { .. } => SignalMask::HOVER_MEDIA,
            Self::Pointer(_) => SignalMask::POINTER,
            Self::Tick { .. } => SignalMask::TICK,
        }
    }
}

bitflags::bitflags! {
    /// Selects which signal kinds a [`Subscription`](crate::bus::Subscription) receives.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SignalMask: u8 {
        /// [`EnvSignal::Scroll`].
        const SCROLL      = 0b0000_0001;
        /// [`EnvSignal::Resize`].
        const RESIZE      = 0b0000_0010;
        /// [`EnvSignal::Layout`].
        const LAYOUT      = 0b0000_0100;
        /// [`EnvSignal::HoverMedia`].
        const HOVER_MEDIA = 0b0000_1000;
        /// [`EnvSignal::Pointer`].
        const POINTER     = 0b0001_0000;
        /// [`EnvSignal::Tick`].
        const TICK        = 0b0010_0000;
        /// Scroll, resize and layout: everything that can move the sentinel.
        const GEOMETRY = Self::SCROLL.bits() | Self::RESIZE.bits() | Self::LAYOUT.bits();
    }
}

impl Default for SignalMask {
    fn default() -> Self {
        Self::all()
    }
}
