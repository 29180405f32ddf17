//! Spin timing profiles
//!
//! The engine runs on host-supplied virtual time: `spin(now)` records a
//! resolve deadline and `poll(now)` fires the single timed transition. No
//! blocking sleep anywhere, so tests fast-forward by passing a later `now`.

use serde::{Deserialize, Serialize};

/// Timing profile for the spin animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinProfile {
    /// Normal gameplay timing
    Normal,
    /// Fast mode
    Turbo,
    /// Instant resolution for tests and headless runs
    Studio,
    /// Custom duration
    Custom,
}

impl Default for SpinProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Spin timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinTiming {
    /// Profile type
    pub profile: SpinProfile,

    /// Animation duration from spin start to resolution (ms)
    ///
    /// Must be long enough for the host's rotation animation to visually
    /// complete.
    pub spin_duration_ms: f64,
}

impl SpinTiming {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            profile: SpinProfile::Normal,
            spin_duration_ms: 2600.0,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: SpinProfile::Turbo,
            spin_duration_ms: 1200.0,
        }
    }

    /// Studio mode (instant, for testing)
    pub fn studio() -> Self {
        Self {
            profile: SpinProfile::Studio,
            spin_duration_ms: 0.0,
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: SpinProfile) -> Self {
        match profile {
            SpinProfile::Normal => Self::normal(),
            SpinProfile::Turbo => Self::turbo(),
            SpinProfile::Studio => Self::studio(),
            SpinProfile::Custom => Self::normal(),
        }
    }

    /// Scale timing by factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: SpinProfile::Custom,
            spin_duration_ms: self.spin_duration_ms * factor.max(0.0),
        }
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_profiles() {
        let normal = SpinTiming::normal();
        let turbo = SpinTiming::turbo();
        let studio = SpinTiming::studio();

        assert!(turbo.spin_duration_ms < normal.spin_duration_ms);
        assert_eq!(studio.spin_duration_ms, 0.0);
        assert_eq!(
            SpinTiming::from_profile(SpinProfile::Turbo).spin_duration_ms,
            turbo.spin_duration_ms
        );
    }

    #[test]
    fn test_scaled() {
        let half = SpinTiming::normal().scaled(0.5);
        assert_eq!(half.profile, SpinProfile::Custom);
        assert_eq!(half.spin_duration_ms, 1300.0);
    }
}
