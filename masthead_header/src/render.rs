// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render model of the header and its markup.
//!
//! [`compose`] is a pure function from [`RenderInputs`] to a [`HeaderRender`]; the header only
//! gathers the inputs. [`HeaderRender::to_markup`] writes the render as escaped HTML.

use alloc::string::{String, ToString};
use core::fmt;

use masthead_interaction::copy_button::CopyLabel;

use crate::presence::Phase;
use crate::route::ROOT;

/// Accessible name of the email button.
pub const EMAIL_ARIA_LABEL: &str = "Copy email address to clipboard";

/// Separator between the name and the breadcrumb title.
pub const BREADCRUMB_SEPARATOR: &str = "/";

/// Horizontal shift of a hovered name link, in pixels.
pub const NAME_NUDGE_PX: f64 = -2.0;

bitflags::bitflags! {
    /// Boolean facets of a [`HeaderRender`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HeaderFlags: u8 {
        /// Collapsed padding, no subtitle.
        const STUCK         = 0b0000_0001;
        /// Opacity lowered after a downward scroll.
        const DIMMED        = 0b0000_0010;
        /// The device can hover; hover affordances are live.
        const HOVER_CAPABLE = 0b0000_0100;
        /// The name navigates to the home page.
        const NAME_LINK     = 0b0000_1000;
        /// A current title is shown in the breadcrumb slot (an exiting one is not).
        const BREADCRUMB    = 0b0001_0000;
    }
}

/// How the name renders.
#[derive(Clone, Debug, PartialEq)]
pub struct NameRender {
    /// The displayed name.
    pub text: String,
    /// Link target, `None` on the home page.
    pub href: Option<&'static str>,
    /// Whether the hover background shows.
    pub hover_background: bool,
    /// Horizontal offset of the label in pixels.
    pub nudge_px: f64,
}

/// The shimmer subtitle under the name.
#[derive(Clone, Debug, PartialEq)]
pub struct SubtitleRender {
    /// Full line, e.g. `In New York, Designing...`.
    pub text: String,
    /// Whether the highlight is sweeping.
    pub animating: bool,
    /// Gradient stop percentages of the highlight band.
    pub stops: [f64; 2],
    /// Length of one sweep.
    pub pass_ms: u64,
}

/// The breadcrumb slot.
#[derive(Clone, Debug, PartialEq)]
pub struct BreadcrumbRender {
    /// Title shown after the separator.
    pub title: String,
    /// Transition phase.
    pub phase: Phase,
    /// Progress of the phase in `0.0..=1.0`.
    pub progress: f32,
}

impl BreadcrumbRender {
    /// Opacity of the slot: fading in while entering, out while exiting.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            Phase::Entering => self.progress,
            Phase::Shown => 1.0,
            Phase::Exiting => 1.0 - self.progress,
        }
    }
}

/// The copy-email button.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionRender {
    /// Visible label.
    pub label: CopyLabel,
    /// Tooltip text: the address itself.
    pub tooltip: String,
    /// Accessible name.
    pub aria_label: &'static str,
}

/// Everything needed to draw the header for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderRender {
    /// Boolean facets.
    pub flags: HeaderFlags,
    /// The name.
    pub name: NameRender,
    /// Subtitle, absent while stuck.
    pub subtitle: Option<SubtitleRender>,
    /// Breadcrumb slot, present while a title is shown or exiting.
    pub breadcrumb: Option<BreadcrumbRender>,
    /// Opacity of the whole header.
    pub opacity: f64,
    /// The email button.
    pub action: ActionRender,
}

/// Inputs to [`compose`], gathered from the live header state.
#[derive(Clone, Debug)]
pub struct RenderInputs<'a> {
    /// Displayed name.
    pub display_name: &'a str,
    /// Whether the current route is the home page.
    pub at_root: bool,
    /// Whether the device can hover.
    pub supports_hover: bool,
    /// Hover state of the name.
    pub name_hovered: bool,
    /// Hover state of the header as a whole.
    pub header_hovered: bool,
    /// Stickiness.
    pub stuck: bool,
    /// Direction of the latest scroll.
    pub last_scroll_was_down: bool,
    /// Opacity used when dimmed.
    pub dim_opacity: f64,
    /// Subtitle to show when not stuck.
    pub subtitle: SubtitleRender,
    /// Breadcrumb slot contents.
    pub breadcrumb: Option<BreadcrumbRender>,
    /// Email address.
    pub email: &'a str,
    /// Email button label.
    pub label: CopyLabel,
}

/// Whether a header in this state is dimmed.
///
/// Only a stuck header dims, only after a downward scroll, and never while the pointer is over it.
pub fn is_dimmed(stuck: bool, last_scroll_was_down: bool, header_hovered: bool) -> bool {
    stuck && last_scroll_was_down && !header_hovered
}

/// Build the render for one frame.
pub fn compose(inputs: RenderInputs<'_>) -> HeaderRender {
    let mut flags = HeaderFlags::empty();
    flags.set(HeaderFlags::STUCK, inputs.stuck);
    flags.set(HeaderFlags::HOVER_CAPABLE, inputs.supports_hover);
    flags.set(HeaderFlags::NAME_LINK, !inputs.at_root);

    let dimmed = is_dimmed(
        inputs.stuck,
        inputs.last_scroll_was_down,
        inputs.header_hovered,
    );
    flags.set(HeaderFlags::DIMMED, dimmed);
    let opacity = if dimmed { inputs.dim_opacity } else { 1.0 };

    let hovered = inputs.name_hovered && inputs.supports_hover;
    let name = NameRender {
        text: inputs.display_name.to_string(),
        href: (!inputs.at_root).then_some(ROOT),
        hover_background: hovered,
        nudge_px: if hovered && !inputs.at_root {
            NAME_NUDGE_PX
        } else {
            0.0
        },
    };

    flags.set(
        HeaderFlags::BREADCRUMB,
        inputs
            .breadcrumb
            .as_ref()
            .is_some_and(|b| b.phase != Phase::Exiting),
    );

    HeaderRender {
        flags,
        name,
        subtitle: (!inputs.stuck).then_some(inputs.subtitle),
        breadcrumb: inputs.breadcrumb,
        opacity,
        action: ActionRender {
            label: inputs.label,
            tooltip: inputs.email.to_string(),
            aria_label: EMAIL_ARIA_LABEL,
        },
    }
}

impl HeaderRender {
    /// Whether the padding is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.flags.contains(HeaderFlags::STUCK)
    }

    /// Whether a current title is in the breadcrumb slot.
    pub fn shows_breadcrumb(&self) -> bool {
        self.flags.contains(HeaderFlags::BREADCRUMB)
    }

    /// A [`fmt::Display`] adapter writing the header as HTML.
    pub fn markup(&self) -> Markup<'_> {
        Markup(self)
    }

    /// The header as an HTML string.
    pub fn to_markup(&self) -> String {
        self.markup().to_string()
    }
}

/// HTML writer for a [`HeaderRender`].
#[derive(Copy, Clone, Debug)]
pub struct Markup<'a>(&'a HeaderRender);

impl fmt::Display for Markup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let layout = if r.is_collapsed() {
            "collapsed"
        } else {
            "expanded"
        };
        write!(f, "<header class=\"masthead\" data-layout=\"{layout}\"")?;
        if r.flags.contains(HeaderFlags::HOVER_CAPABLE) {
            f.write_str(" data-hover")?;
        }
        write!(f, " style=\"opacity:{}\">", r.opacity)?;

        f.write_str("<div class=\"masthead-title\">")?;
        write_name(f, &r.name)?;
        if let Some(crumb) = &r.breadcrumb {
            write!(
                f,
                "<span class=\"masthead-breadcrumb\" data-phase=\"{}\" style=\"opacity:{}\">\
                 <span aria-hidden=\"true\">{BREADCRUMB_SEPARATOR}</span><span>{}</span></span>",
                phase_name(crumb.phase),
                crumb.opacity(),
                Escaped(&crumb.title),
            )?;
        }
        f.write_str("</div>")?;

        if let Some(sub) = &r.subtitle {
            write!(
                f,
                "<p class=\"masthead-subtitle\" data-animating=\"{}\" \
                 style=\"--shimmer-from:{}%;--shimmer-to:{}%;--shimmer-ms:{}\">{}</p>",
                sub.animating,
                sub.stops[0],
                sub.stops[1],
                sub.pass_ms,
                Escaped(&sub.text),
            )?;
        }

        write!(
            f,
            "<button type=\"button\" class=\"masthead-email\" aria-label=\"{}\" title=\"{}\">{}</button>",
            r.action.aria_label,
            Escaped(&r.action.tooltip),
            r.action.label,
        )?;
        f.write_str("</header>")
    }
}

fn write_name(f: &mut fmt::Formatter<'_>, name: &NameRender) -> fmt::Result {
    let class = if name.hover_background {
        "masthead-name hovered"
    } else {
        "masthead-name"
    };
    match name.href {
        Some(href) => write!(
            f,
            "<a class=\"{class}\" href=\"{href}\" style=\"transform:translateX({}px)\">{}</a>",
            name.nudge_px,
            Escaped(&name.text),
        ),
        None => write!(f, "<span class=\"{class}\">{}</span>", Escaped(&name.text)),
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Entering => "entering",
        Phase::Shown => "shown",
        Phase::Exiting => "exiting",
    }
}

/// HTML-escapes text and attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['<', '>', '&', '"', '\'']) {
            f.write_str(&rest[..i])?;
            f.write_str(match rest.as_bytes()[i] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                b'"' => "&quot;",
                _ => "&#39;",
            })?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> RenderInputs<'static> {
        RenderInputs {
            display_name: "Jason Marsh",
            at_root: true,
            supports_hover: true,
            name_hovered: false,
            header_hovered: false,
            stuck: false,
            last_scroll_was_down: false,
            dim_opacity: 0.12,
            subtitle: SubtitleRender {
                text: String::from("In New York, Designing..."),
                animating: true,
                stops: [25.0, 75.0],
                pass_ms: 2000,
            },
            breadcrumb: None,
            email: "hello@example.com",
            label: CopyLabel::Email,
        }
    }

    #[test]
    fn root_name_is_plain_text() {
        let r = compose(RenderInputs {
            name_hovered: true,
            ..inputs()
        });
        assert_eq!(r.name.href, None);
        assert!(r.name.hover_background);
        assert_eq!(r.name.nudge_px, 0.0);
        assert!(!r.flags.contains(HeaderFlags::NAME_LINK));
        let markup = r.to_markup();
        assert!(markup.contains("<span class=\"masthead-name hovered\">"));
    }

    #[test]
    fn detail_name_links_home_and_nudges() {
        let r = compose(RenderInputs {
            at_root: false,
            name_hovered: true,
            ..inputs()
        });
        assert_eq!(r.name.href, Some("/"));
        assert_eq!(r.name.nudge_px, -2.0);
        assert!(r.to_markup().contains("href=\"/\""));
    }

    #[test]
    fn hover_background_needs_hover_capability() {
        let r = compose(RenderInputs {
            supports_hover: false,
            name_hovered: true,
            ..inputs()
        });
        assert!(!r.name.hover_background);
        assert!(!r.flags.contains(HeaderFlags::HOVER_CAPABLE));
    }

    #[test]
    fn stuck_collapses_and_hides_subtitle() {
        let expanded = compose(inputs());
        assert!(!expanded.is_collapsed());
        assert!(expanded.subtitle.is_some());
        let stuck = compose(RenderInputs {
            stuck: true,
            ..inputs()
        });
        assert!(stuck.is_collapsed());
        assert!(stuck.subtitle.is_none());
        assert_eq!(stuck.opacity, 1.0);
        assert!(!stuck.to_markup().contains("masthead-subtitle"));
    }

    #[test]
    fn dims_only_when_stuck_down_and_not_hovered() {
        let dim = compose(RenderInputs {
            stuck: true,
            last_scroll_was_down: true,
            ..inputs()
        });
        assert_eq!(dim.opacity, 0.12);
        assert!(dim.flags.contains(HeaderFlags::DIMMED));
        let hovered = compose(RenderInputs {
            stuck: true,
            last_scroll_was_down: true,
            header_hovered: true,
            ..inputs()
        });
        assert_eq!(hovered.opacity, 1.0);
        assert!(!is_dimmed(false, true, false));
        assert!(!is_dimmed(true, false, false));
    }

    #[test]
    fn exiting_breadcrumb_is_drawn_but_not_shown() {
        let crumb = |phase| BreadcrumbRender {
            title: String::from("CDP"),
            phase,
            progress: 0.25,
        };
        let entering = compose(RenderInputs {
            breadcrumb: Some(crumb(Phase::Entering)),
            ..inputs()
        });
        assert!(entering.shows_breadcrumb());
        let exiting = compose(RenderInputs {
            breadcrumb: Some(crumb(Phase::Exiting)),
            ..inputs()
        });
        assert!(!exiting.shows_breadcrumb());
        assert_eq!(exiting.breadcrumb.as_ref().map(|b| b.opacity()), Some(0.75));
        assert!(exiting.to_markup().contains("data-phase=\"exiting\""));
    }

    #[test]
    fn markup_escapes_text() {
        let r = compose(RenderInputs {
            display_name: "A & B <Studio>",
            email: "\"x\"@example.com",
            breadcrumb: Some(BreadcrumbRender {
                title: String::from("Tom's <App>"),
                phase: Phase::Shown,
                progress: 1.0,
            }),
            ..inputs()
        });
        let html = r.to_markup();
        assert!(html.contains("A &amp; B &lt;Studio&gt;"));
        assert!(html.contains("title=\"&quot;x&quot;@example.com\""));
        assert!(html.contains("Tom&#39;s &lt;App&gt;"));
        assert!(html.contains("aria-label=\"Copy email address to clipboard\""));
        assert!(html.contains(">Email</button>"));
    }
}
