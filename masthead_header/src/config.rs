// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header configuration.

use alloc::string::String;

use masthead_interaction::copy_button::DEFAULT_COPIED_MS;
use masthead_interaction::shimmer::ShimmerConfig;
use masthead_scroll::sticky::StickinessConfig;
use masthead_signal::error::ConfigError;

use crate::route::DEFAULT_DETAIL_PREFIX;

/// Opacity of a stuck header after a downward scroll.
pub const DEFAULT_DIM_OPACITY: f64 = 0.12;

/// Length of the breadcrumb enter/exit transition.
pub const DEFAULT_BREADCRUMB_TRANSITION_MS: u64 = 200;

/// Everything a [`Header`](crate::header::Header) needs besides live signals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeaderConfig {
    /// Site owner's name, shown as the header title.
    pub display_name: String,
    /// Address copied by the email button and shown in its tooltip.
    pub email: String,
    /// Stick/release tuning.
    pub stickiness: StickinessConfig,
    /// Subtitle line.
    pub shimmer: ShimmerConfig,
    /// Opacity applied when stuck and the last scroll went down.
    pub dim_opacity: f64,
    /// Breadcrumb transition length.
    pub breadcrumb_transition_ms: u64,
    /// How long `Copied!` stays up.
    pub copied_ms: u64,
    /// Route prefix of pages that may show a breadcrumb.
    pub detail_prefix: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            email: String::new(),
            stickiness: StickinessConfig::default(),
            shimmer: ShimmerConfig::default(),
            dim_opacity: DEFAULT_DIM_OPACITY,
            breadcrumb_transition_ms: DEFAULT_BREADCRUMB_TRANSITION_MS,
            copied_ms: DEFAULT_COPIED_MS,
            detail_prefix: String::from(DEFAULT_DETAIL_PREFIX),
        }
    }
}

impl HeaderConfig {
    /// Defaults for `display_name` with the email button copying `email`.
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Replace the stickiness tuning.
    pub fn with_stickiness(mut self, stickiness: StickinessConfig) -> Self {
        self.stickiness = stickiness;
        self
    }

    /// Replace the subtitle configuration.
    pub fn with_shimmer(mut self, shimmer: ShimmerConfig) -> Self {
        self.shimmer = shimmer;
        self
    }

    /// Replace the dim opacity.
    pub fn with_dim_opacity(mut self, dim_opacity: f64) -> Self {
        self.dim_opacity = dim_opacity;
        self
    }

    /// Replace the breadcrumb transition length.
    pub fn with_breadcrumb_transition_ms(mut self, ms: u64) -> Self {
        self.breadcrumb_transition_ms = ms;
        self
    }

    /// Replace how long `Copied!` stays up.
    pub fn with_copied_ms(mut self, ms: u64) -> Self {
        self.copied_ms = ms;
        self
    }

    /// Replace the detail route prefix.
    pub fn with_detail_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.detail_prefix = prefix.into();
        self
    }

    /// Validate the nested configs and the dim opacity (`0.0..=1.0`).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.stickiness.validate()?;
        self.shimmer.validate()?;
        let dim = ConfigError::check("dim_opacity", self.dim_opacity)?;
        if dim > 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "dim_opacity",
                value: dim,
            });
        }
        Ok(())
    }
}
