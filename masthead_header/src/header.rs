// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mounted header.
//!
//! A [`Header`] owns one bus [`Subscription`], the scroll model, the capability detector, the
//! hover state of its interactive elements, the email button, the shimmer subtitle and the
//! breadcrumb [`Presence`]. It reads the page title through a [`TitleReader`] and can only
//! clear it (never set it) through a [`TitleReset`].
//!
//! The host publishes signals to the bus, calls [`Header::pump`] once per frame and draws
//! [`Header::render`]. Dropping or [unmounting](Header::unmount) the header releases the
//! subscription.

use alloc::string::String;

use masthead_interaction::capability::{
    CapabilityDetector, HoverMediaQuery, InputCapability, PointerCapability,
};
use masthead_interaction::copy_button::{Clipboard, CopyButton};
use masthead_interaction::hover::HoverState;
use masthead_interaction::shimmer::{CyclingPicker, Shimmer, WordPicker};
use masthead_scroll::model::ScrollModel;
use masthead_scroll::sentinel::Viewport;
use masthead_signal::bus::{SignalBus, Subscription};
use masthead_signal::error::ConfigError;
use masthead_signal::title::{TitleReader, TitleReset, TitleSignal};
use masthead_signal::types::{ElementKey, EnvSignal, PointerKind, PointerSignal, SignalMask};

use crate::config::HeaderConfig;
use crate::presence::Presence;
use crate::render::{BreadcrumbRender, HeaderRender, RenderInputs, SubtitleRender, compose};
use crate::route::{DetailPattern, ROOT, is_root};

/// Interactive elements of the header, addressed by pointer signals.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum HeaderElement {
    /// The header box as a whole; hovering it cancels the dim.
    Header = 1,
    /// The name (plain text on the home page, a link elsewhere).
    Name = 2,
    /// The copy-email button.
    EmailButton = 3,
}

impl HeaderElement {
    /// Key the host uses when publishing pointer input for this element.
    pub const fn key(self) -> ElementKey {
        ElementKey(self as u32)
    }

    /// Element for `key`, if it belongs to the header.
    pub fn from_key(key: ElementKey) -> Option<Self> {
        match key.0 {
            1 => Some(Self::Header),
            2 => Some(Self::Name),
            3 => Some(Self::EmailButton),
            _ => None,
        }
    }

    /// A pointer signal of `kind` addressed to this element.
    pub fn signal(self, kind: PointerKind) -> EnvSignal {
        EnvSignal::Pointer(PointerSignal::new(self.key(), kind))
    }
}

/// Host navigation.
pub trait Navigator {
    /// Navigate to `path`.
    fn navigate(&mut self, path: &str);
}

/// Environment at mount time.
#[derive(Copy, Clone, Debug)]
pub struct MountEnv<'a> {
    /// Viewport, including its current scroll offset.
    pub viewport: Viewport,
    /// Document-space y of the sentinel at the header's natural top.
    pub sentinel_top: f64,
    /// Host clock.
    pub now_ms: u64,
    /// Current route path.
    pub route: &'a str,
}

/// What one [`Header::pump`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PumpReport {
    /// Signals drained from the subscription.
    pub signals: usize,
    /// Whether anything visible may have changed.
    pub changed: bool,
    /// Whether the name navigated home.
    pub navigated: bool,
}

/// A mounted header.
#[derive(Debug)]
pub struct Header<P = CyclingPicker> {
    config: HeaderConfig,
    subscription: Subscription,
    title: TitleReader,
    title_reset: TitleReset,
    title_version: u64,
    route: String,
    now_ms: u64,
    scroll: ScrollModel,
    capability: CapabilityDetector,
    header_hover: HoverState,
    name_hover: HoverState,
    email: CopyButton,
    shimmer: Shimmer<P>,
    breadcrumb: Presence,
}

impl Header<CyclingPicker> {
    /// Mount a header with the cycling subtitle picker.
    ///
    /// Subscribes to every signal kind on `bus`, records the direction baseline, reads the
    /// hover capability once from `query`, observes the sentinel and starts the shimmer.
    pub fn mount(
        bus: &SignalBus,
        title: &TitleSignal,
        query: &impl HoverMediaQuery,
        env: MountEnv<'_>,
        config: HeaderConfig,
    ) -> Result<Self, ConfigError> {
        Self::with_picker(bus, title, query, env, config, CyclingPicker)
    }
}

impl<P: WordPicker> Header<P> {
    /// Mount a header whose subtitle words are chosen by `picker`.
    pub fn with_picker(
        bus: &SignalBus,
        title: &TitleSignal,
        query: &impl HoverMediaQuery,
        env: MountEnv<'_>,
        config: HeaderConfig,
        picker: P,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let subscription = bus.subscribe(SignalMask::all());
        let reader = title.reader();
        let mut shimmer = Shimmer::with_picker(config.shimmer.clone(), picker);
        shimmer.start(env.now_ms);
        let mut header = Self {
            subscription,
            title_version: reader.version(),
            title: reader,
            title_reset: title.resetter(),
            route: String::from(env.route),
            now_ms: env.now_ms,
            scroll: ScrollModel::mount(config.stickiness, env.viewport, env.sentinel_top),
            capability: CapabilityDetector::mount(query),
            header_hover: HoverState::new(),
            name_hover: HoverState::new(),
            email: CopyButton::new(config.email.clone(), config.copied_ms),
            shimmer,
            breadcrumb: Presence::new(config.breadcrumb_transition_ms),
            config,
        };
        header.sync_breadcrumb();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            route = %header.route,
            stuck = header.scroll.is_stuck(),
            capability = ?header.capability.capability(),
            "header mounted"
        );
        Ok(header)
    }

    /// Configuration in use.
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Current route path.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Latest host clock seen.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Scroll state.
    pub fn scroll(&self) -> &ScrollModel {
        &self.scroll
    }

    /// Current input capability.
    pub fn capability(&self) -> InputCapability {
        self.capability.capability()
    }

    /// Whether the pointer is over the header.
    pub fn is_header_hovered(&self) -> bool {
        self.header_hover.is_hovered()
    }

    /// Whether the pointer is over the name.
    pub fn is_name_hovered(&self) -> bool {
        self.name_hover.is_hovered()
    }

    /// The email button.
    pub fn email_button(&self) -> &CopyButton {
        &self.email
    }

    /// The shimmer subtitle.
    pub fn shimmer(&self) -> &Shimmer<P> {
        &self.shimmer
    }

    /// The breadcrumb transition.
    pub fn breadcrumb(&self) -> &Presence {
        &self.breadcrumb
    }

    /// The host changed route. Returns `true` when the breadcrumb started a transition.
    pub fn set_route(&mut self, path: &str) -> bool {
        if self.route == path {
            return false;
        }
        self.route.clear();
        self.route.push_str(path);
        self.sync_breadcrumb()
    }

    /// Drain pending signals and apply them in order.
    ///
    /// `host` receives clipboard writes from the email button and navigation from the name.
    /// The title is re-read after the signals, so a page swap between frames shows up here.
    pub fn pump<H: Clipboard + Navigator>(&mut self, host: &mut H) -> PumpReport {
        let mut report = PumpReport::default();
        while let Some(signal) = self.subscription.next_signal() {
            report.signals += 1;
            report.changed |= self.apply(&signal, host, &mut report.navigated);
        }
        let version = self.title.version();
        if version != self.title_version {
            self.title_version = version;
            report.changed = true;
        }
        report.changed |= self.sync_breadcrumb();
        report
    }

    /// Activate the name.
    ///
    /// Off the home page this clears the title first, so the breadcrumb starts exiting before
    /// the route changes, then navigates home. Returns whether it navigated.
    pub fn activate_name(&mut self, navigator: &mut impl Navigator) -> bool {
        let _ = self.name_hover.activate();
        if is_root(&self.route) {
            return false;
        }
        self.title_reset.clear();
        self.title_version = self.title.version();
        self.sync_breadcrumb();
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %self.route, "navigating home");
        navigator.navigate(ROOT);
        true
    }

    /// Copy the email address. Returns whether the clipboard accepted it.
    pub fn press_email(&mut self, clipboard: &mut impl Clipboard) -> bool {
        self.email.press(clipboard, self.now_ms)
    }

    /// Render the current state.
    pub fn render(&self) -> HeaderRender {
        let shimmer = self.shimmer.config();
        let breadcrumb = self
            .breadcrumb
            .current()
            .map(|(title, phase)| BreadcrumbRender {
                title: String::from(title),
                phase,
                progress: self.breadcrumb.progress(self.now_ms),
            });
        compose(RenderInputs {
            display_name: &self.config.display_name,
            at_root: is_root(&self.route),
            supports_hover: self.capability.supports_hover(),
            name_hovered: self.name_hover.is_hovered(),
            header_hovered: self.header_hover.is_hovered(),
            stuck: self.scroll.is_stuck(),
            last_scroll_was_down: self.scroll.last_scroll_was_down(),
            dim_opacity: self.config.dim_opacity,
            subtitle: SubtitleRender {
                text: self.shimmer.text(),
                animating: self.shimmer.is_animating(),
                stops: shimmer.gradient_stops(),
                pass_ms: shimmer.pass_ms,
            },
            breadcrumb,
            email: &self.config.email,
            label: self.email.label(),
        })
    }

    /// Tear the header down, releasing its bus subscription.
    pub fn unmount(self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(route = %self.route, "header unmounted");
        drop(self);
    }

    fn apply<H: Clipboard + Navigator>(
        &mut self,
        signal: &EnvSignal,
        host: &mut H,
        navigated: &mut bool,
    ) -> bool {
        match *signal {
            EnvSignal::Scroll { .. } | EnvSignal::Resize { .. } | EnvSignal::Layout { .. } => {
                self.scroll.handle(signal).any()
            }
            EnvSignal::HoverMedia { .. } => {
                if self.capability.handle(signal).is_none() {
                    return false;
                }
                let cap = &self.capability;
                let _ = self.header_hover.capability_changed(cap);
                let _ = self.name_hover.capability_changed(cap);
                let _ = self.email.capability_changed(cap);
                true
            }
            EnvSignal::Pointer(PointerSignal { target, kind }) => {
                self.pointer(target, kind, host, navigated)
            }
            EnvSignal::Tick { now_ms } => {
                self.now_ms = self.now_ms.max(now_ms);
                let now = self.now_ms;
                let animating = self.shimmer.is_animating();
                let mut changed = self.email.tick(now);
                changed |= self.shimmer.tick(now);
                changed |= self.breadcrumb.tick(now);
                changed | (animating != self.shimmer.is_animating())
            }
        }
    }

    fn pointer<H: Clipboard + Navigator>(
        &mut self,
        target: ElementKey,
        kind: PointerKind,
        host: &mut H,
        navigated: &mut bool,
    ) -> bool {
        let Some(element) = HeaderElement::from_key(target) else {
            return false;
        };
        let cap = &self.capability;
        match (element, kind) {
            (HeaderElement::Header, _) => self.header_hover.apply(kind, cap).is_some(),
            (HeaderElement::Name, PointerKind::Activate) => {
                *navigated |= self.activate_name(host);
                true
            }
            (HeaderElement::Name, _) => self.name_hover.apply(kind, cap).is_some(),
            (HeaderElement::EmailButton, PointerKind::Activate) => {
                self.email.press(host, self.now_ms);
                true
            }
            (HeaderElement::EmailButton, _) => self.email.pointer(kind, cap).is_some(),
        }
    }

    fn sync_breadcrumb(&mut self) -> bool {
        let detail = DetailPattern::new(&self.config.detail_prefix).is_detail(&self.route);
        let breadcrumb = &mut self.breadcrumb;
        let now = self.now_ms;
        self.title
            .with_title(|title| breadcrumb.set_target(title.filter(|_| detail), now))
    }
}
