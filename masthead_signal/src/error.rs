// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use core::fmt;

/// A tuning value was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A distance or duration must be finite and not negative.
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A duration that drives a timeline must be positive.
    ZeroDuration {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The collapsed header was measured taller than the expanded one.
    HeightsInverted {
        /// Measured height of the expanded header.
        expanded: f64,
        /// Measured height of the collapsed header.
        collapsed: f64,
    },
}

impl ConfigError {
    /// Check that `value` is finite and non-negative.
    pub fn check(field: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidValue { field, value })
        }
    }

    /// Check that a timeline duration is not zero.
    pub fn check_duration(field: &'static str, ms: u64) -> Result<u64, Self> {
        if ms == 0 {
            Err(Self::ZeroDuration { field })
        } else {
            Ok(ms)
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, value } => {
                write!(f, "{field} must be finite and non-negative, got {value}")
            }
            Self::ZeroDuration { field } => write!(f, "{field} must be greater than zero"),
            Self::HeightsInverted {
                expanded,
                collapsed,
            } => write!(
                f,
                "collapsed header height {collapsed} exceeds expanded height {expanded}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn check_rejects_negative_and_nan() {
        assert_eq!(ConfigError::check("margin", 4.0), Ok(4.0));
        assert_eq!(ConfigError::check("margin", 0.0), Ok(0.0));
        assert!(ConfigError::check("margin", -1.0).is_err());
        assert!(ConfigError::check("margin", f64::NAN).is_err());
        assert!(ConfigError::check("margin", f64::INFINITY).is_err());
    }

    #[test]
    fn check_duration_rejects_zero() {
        assert_eq!(ConfigError::check_duration("pass_ms", 2000), Ok(2000));
        assert_eq!(
            ConfigError::check_duration("pass_ms", 0),
            Err(ConfigError::ZeroDuration { field: "pass_ms" })
        );
    }

    #[test]
    fn display_names_field() {
        let err = ConfigError::check("top_threshold", -3.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "top_threshold must be finite and non-negative, got -3"
        );
    }
}
