//! Fixed-point score in tenths.
//!
//! The results modal counts up in steps of 0.1. Keeping the value as an
//! integer number of tenths means `0.1 + 0.1 + 0.1` is exactly `0.3`.

use serde::Serialize;
use std::fmt;

/// Upper bound of the displayed IBE scale (10.0).
pub const SCALE_MAX: Score = Score(100);

/// A non-negative score with one decimal digit of precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    /// Zero.
    pub const ZERO: Score = Score(0);

    /// Build a score from a whole number of tenths (`85` is `8.5`).
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// Round a float to the nearest tenth. Negative and NaN inputs clamp to zero.
    pub fn from_f64(value: f64) -> Self {
        let tenths = (value * 10.0).round();
        if tenths.is_nan() || tenths <= 0.0 {
            Self::ZERO
        } else if tenths >= u32::MAX as f64 {
            Self(u32::MAX)
        } else {
            Self(tenths as u32)
        }
    }

    /// Raw tenths.
    pub const fn tenths(self) -> u32 {
        self.0
    }

    /// Value as a float, for display math only.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Adds `step`, saturating instead of wrapping.
    pub fn saturating_add(self, step: Score) -> Self {
        Self(self.0.saturating_add(step.0))
    }

    /// Fill of a bar on the 0-10 scale, in percent (`8.5` -> `85`).
    pub fn fill_percent(self) -> u32 {
        self.0.min(SCALE_MAX.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_always_has_one_decimal() {
        assert_eq!(Score::ZERO.to_string(), "0.0");
        assert_eq!(Score::from_tenths(3).to_string(), "0.3");
        assert_eq!(Score::from_tenths(85).to_string(), "8.5");
        assert_eq!(Score::from_tenths(120).to_string(), "12.0");
    }

    #[test]
    fn repeated_increments_do_not_drift() {
        let step = Score::from_f64(0.1);
        let mut value = Score::ZERO;
        for _ in 0..3 {
            value = value.saturating_add(step);
        }
        assert_eq!(value, Score::from_f64(0.3));
        assert_eq!(value.to_string(), "0.3");
    }

    #[test]
    fn from_f64_rounds_and_clamps() {
        assert_eq!(Score::from_f64(8.5).tenths(), 85);
        assert_eq!(Score::from_f64(0.30000000000000004).tenths(), 3);
        assert_eq!(Score::from_f64(-1.0), Score::ZERO);
        assert_eq!(Score::from_f64(f64::NAN), Score::ZERO);
    }

    #[test]
    fn fill_percent_is_capped_at_scale() {
        assert_eq!(Score::from_tenths(85).fill_percent(), 85);
        assert_eq!(Score::from_tenths(150).fill_percent(), 100);
    }
}
