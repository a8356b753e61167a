// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for the character's display level.
//!
//! Unlike most constrained types in this crate there is no rejection path:
//! every input is clamped into the 0-100 range.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Brightness level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use macs::types::Brightness;
///
/// assert_eq!(Brightness::clamped(42.0).value(), 42.0);
/// assert_eq!(Brightness::clamped(150.0), Brightness::MAX);
/// assert_eq!(Brightness::clamped(-20.0), Brightness::MIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct Brightness(f64);

impl Brightness {
    /// Minimum brightness (0%).
    pub const MIN: Self = Self(0.0);

    /// Maximum brightness (100%).
    pub const MAX: Self = Self(100.0);

    /// Slider granularity advertised to the host.
    pub const STEP: f64 = 1.0;

    /// Unit of measurement advertised to the host.
    pub const UNIT: &'static str = "%";

    /// Creates a brightness value, clamping to the valid range.
    ///
    /// NaN resolves to [`Brightness::MAX`], the same result as evaluating
    /// `max(0, min(100, NaN))` with ordered comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use macs::types::Brightness;
    ///
    /// assert_eq!(Brightness::clamped(f64::NAN), Brightness::MAX);
    /// assert_eq!(Brightness::clamped(f64::NEG_INFINITY), Brightness::MIN);
    /// ```
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::MAX;
        }
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, Self::UNIT)
    }
}

impl From<f64> for Brightness {
    fn from(value: f64) -> Self {
        Self::clamped(value)
    }
}

impl From<Brightness> for f64 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_in_range_is_kept() {
        for v in 0..=100 {
            let v = f64::from(v);
            assert!((Brightness::clamped(v).value() - v).abs() < f64::EPSILON);
        }
        assert!((Brightness::clamped(42.5).value() - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn brightness_clamps_out_of_range() {
        assert_eq!(Brightness::clamped(150.0), Brightness::MAX);
        assert_eq!(Brightness::clamped(-5.0), Brightness::MIN);
        assert_eq!(Brightness::clamped(f64::INFINITY), Brightness::MAX);
    }

    #[test]
    fn brightness_nan_is_max() {
        assert_eq!(Brightness::clamped(f64::NAN), Brightness::MAX);
    }

    #[test]
    fn brightness_default_is_full() {
        assert_eq!(Brightness::default(), Brightness::MAX);
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::clamped(75.0).to_string(), "75%");
    }

    #[test]
    fn brightness_deserialize_clamps() {
        let b: Brightness = serde_json::from_str("250").unwrap();
        assert_eq!(b, Brightness::MAX);
        assert_eq!(serde_json::to_string(&Brightness::clamped(42.0)).unwrap(), "42.0");
    }
}
