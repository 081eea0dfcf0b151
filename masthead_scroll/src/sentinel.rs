// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sentinel visibility: intersection-observer semantics over kurbo rectangles.
//!
//! The sentinel is an invisible marker placed at the header's natural top position.
//! It is usually zero-height, so visibility is decided by an inclusive edge test
//! rather than by intersection area alone: a sentinel lying exactly on the viewport
//! edge still counts as intersecting. The threshold is `0` and there is no root margin.
//!
//! [`SentinelObserver`] reports a [`Visibility`] on the initial observation and then
//! only when the intersecting status flips, like a browser intersection observer.

use kurbo::Rect;

/// Whether the sentinel intersects the viewport.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Visibility {
    /// Some part of the sentinel (or its edge, for degenerate sentinels) is inside the viewport.
    Visible,
    /// The visible fraction reached zero.
    Hidden,
}

/// Viewport geometry in document space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset.
    pub offset_y: f64,
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl Viewport {
    /// A viewport of the given size scrolled to the top.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            offset_y: 0.0,
            width,
            height,
        }
    }

    /// The same viewport scrolled to `offset_y`.
    pub const fn scrolled_to(self, offset_y: f64) -> Self {
        Self { offset_y, ..self }
    }

    /// The visible document region.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.offset_y, self.width, self.offset_y + self.height)
    }
}

/// Fraction of `target` visible inside `root`, in `0.0..=1.0`.
///
/// Degenerate targets (zero width or height) report `1.0` when they touch `root`
/// (edges inclusive) and `0.0` otherwise.
pub fn visible_fraction(root: Rect, target: Rect) -> f64 {
    if !touches(root, target) {
        return 0.0;
    }
    let area = target.area();
    if area <= 0.0 {
        return 1.0;
    }
    (root.intersect(target).area() / area).clamp(0.0, 1.0)
}

fn touches(a: Rect, b: Rect) -> bool {
    let (a, b) = (a.abs(), b.abs());
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Observes one sentinel against the viewport.
#[derive(Clone, Debug)]
pub struct SentinelObserver {
    sentinel: Rect,
    last: Option<Visibility>,
}

impl SentinelObserver {
    /// Observe `sentinel`. Nothing has been reported yet.
    pub fn new(sentinel: Rect) -> Self {
        Self {
            sentinel,
            last: None,
        }
    }

    /// A zero-height sentinel spanning `width` at document position `top`.
    pub fn at_top(top: f64, width: f64) -> Self {
        Self::new(Rect::new(0.0, top, width, top))
    }

    /// The observed rectangle.
    pub fn sentinel(&self) -> Rect {
        self.sentinel
    }

    /// Move the sentinel vertically, keeping its size (a layout shift).
    pub fn set_top(&mut self, top: f64) {
        self.sentinel = self.sentinel.with_origin((self.sentinel.x0, top));
    }

    /// Stretch the sentinel to `width`, keeping its position (a resize).
    pub fn set_width(&mut self, width: f64) {
        self.sentinel.x1 = self.sentinel.x0 + width;
    }

    /// Last reported visibility, if any observation has been made.
    pub fn last(&self) -> Option<Visibility> {
        self.last
    }

    /// Evaluate the sentinel against `viewport`.
    ///
    /// Returns `Some` on the first call and whenever visibility flips; `None` otherwise.
    pub fn observe(&mut self, viewport: &Viewport) -> Option<Visibility> {
        let now = if touches(viewport.rect(), self.sentinel) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if self.last == Some(now) {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(?now, offset_y = viewport.offset_y, "sentinel visibility");
        self.last = Some(now);
        Some(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_sentinel_visible_on_edge() {
        let root = Rect::new(0.0, 100.0, 800.0, 900.0);
        assert_eq!(
            visible_fraction(root, Rect::new(0.0, 100.0, 800.0, 100.0)),
            1.0
        );
        assert_eq!(
            visible_fraction(root, Rect::new(0.0, 900.0, 800.0, 900.0)),
            1.0
        );
        assert_eq!(
            visible_fraction(root, Rect::new(0.0, 99.0, 800.0, 99.0)),
            0.0
        );
    }

    #[test]
    fn partial_overlap_fraction() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let half = Rect::new(0.0, 50.0, 100.0, 150.0);
        assert!((visible_fraction(root, half) - 0.5).abs() < 1e-9);
        let inside = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(visible_fraction(root, inside), 1.0);
    }

    #[test]
    fn reports_initial_then_only_changes() {
        let mut obs = SentinelObserver::at_top(120.0, 1024.0);
        let vp = Viewport::new(1024.0, 768.0);
        assert_eq!(obs.observe(&vp), Some(Visibility::Visible));
        assert_eq!(obs.observe(&vp.scrolled_to(60.0)), None);
        assert_eq!(obs.observe(&vp.scrolled_to(120.0)), None);
        assert_eq!(
            obs.observe(&vp.scrolled_to(121.0)),
            Some(Visibility::Hidden)
        );
        assert_eq!(obs.observe(&vp.scrolled_to(400.0)), None);
        assert_eq!(
            obs.observe(&vp.scrolled_to(100.0)),
            Some(Visibility::Visible)
        );
    }

    #[test]
    fn initial_observation_can_be_hidden() {
        let mut obs = SentinelObserver::at_top(120.0, 1024.0);
        let vp = Viewport::new(1024.0, 768.0).scrolled_to(2000.0);
        assert_eq!(obs.observe(&vp), Some(Visibility::Hidden));
        assert_eq!(obs.last(), Some(Visibility::Hidden));
    }

    #[test]
    fn layout_shift_moves_sentinel() {
        let mut obs = SentinelObserver::at_top(120.0, 1024.0);
        let vp = Viewport::new(1024.0, 768.0).scrolled_to(200.0);
        assert_eq!(obs.observe(&vp), Some(Visibility::Hidden));
        obs.set_top(400.0);
        assert_eq!(obs.sentinel().y0, 400.0);
        assert_eq!(obs.sentinel().height(), 0.0);
        assert_eq!(obs.observe(&vp), Some(Visibility::Visible));
    }

    #[test]
    fn resize_keeps_position() {
        let mut obs = SentinelObserver::at_top(50.0, 1024.0);
        obs.set_width(375.0);
        assert_eq!(obs.sentinel(), Rect::new(0.0, 50.0, 375.0, 50.0));
    }
}
