//! Attenuation levels
//!
//! Hardware mixer APIs express playback levels in hundredths of a decibel
//! (millibels). [`Attenuation`] wraps that unit: 0 is full volume, negative
//! values are quieter. Values above 0 are representable (some hardware can
//! amplify) but the convention throughout this crate is ≤ 0.

use std::fmt;
use std::ops::{Sub, SubAssign};

/// An output level relative to full volume, in millibels (1/100 dB)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attenuation(i64);

impl Attenuation {
    /// Full volume, no attenuation (0 dB)
    pub const FULL: Self = Self(0);

    /// Create from a raw millibel value
    #[must_use]
    pub fn from_millibels(millibels: i64) -> Self {
        Self(millibels)
    }

    /// Create from a decibel value
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Hardware dB ranges are tiny relative to i64"
    )]
    pub fn from_db(db: f32) -> Self {
        Self((db * 100.0).round() as i64)
    }

    /// Get the raw millibel value
    #[must_use]
    pub fn millibels(self) -> i64 {
        self.0
    }

    /// Get as decibels
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Hardware dB ranges are tiny")]
    pub fn to_db(self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// Check if this is full volume (no attenuation)
    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 == 0
    }
}

impl Sub for Attenuation {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Attenuation {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i64> for Attenuation {
    fn from(millibels: i64) -> Self {
        Self(millibels)
    }
}

impl fmt::Display for Attenuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} dB", self.to_db())
    }
}
