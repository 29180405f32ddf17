//! Rotation planning — forward-only wheel motion
//!
//! Given the wheel's accumulated rotation and the sector that was just
//! sampled, computes how much further to rotate so the sector's center
//! lands under the fixed pointer. Extra full revolutions and a small jitter
//! are cosmetic; the outcome was fixed before planning.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::layout::{AngularRange, normalize_degrees};

/// Cosmetic tuning for the planner
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RotationTuning {
    /// Maximum jitter magnitude in degrees (jitter is drawn from [-j, +j))
    pub jitter_degrees: f64,
    /// Minimum extra full revolutions per spin
    pub min_revolutions: u32,
    /// Maximum extra full revolutions per spin (inclusive)
    pub max_revolutions: u32,
}

impl Default for RotationTuning {
    fn default() -> Self {
        Self {
            jitter_degrees: 1.0,
            min_revolutions: 4,
            max_revolutions: 6,
        }
    }
}

/// A planned rotation for one spin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationPlan {
    /// Minimal forward rotation in [0, 360) that aligns the sector center
    /// with the pointer
    pub additional_degrees: f64,
    /// Extra full revolutions added for visual effect
    pub revolutions: u32,
    /// Cosmetic jitter applied on top, in degrees
    pub jitter_degrees: f64,
    /// New accumulated rotation after this spin
    pub total_degrees: f64,
}

/// Plan the rotation that settles `range`'s center under the pointer
///
/// `accumulated_degrees` is the wheel's lifetime rotation so far; the plan
/// only ever adds to it, so the wheel always turns forward. Modulo jitter,
/// `total_degrees % 360` satisfies
/// `(pointer - center + 360) % 360` regardless of prior rotation.
pub fn plan_rotation<R: Rng + ?Sized>(
    accumulated_degrees: f64,
    range: &AngularRange,
    pointer_degrees: f64,
    tuning: &RotationTuning,
    rng: &mut R,
) -> RotationPlan {
    let center = range.center();
    let current = normalize_degrees(accumulated_degrees);
    let target = normalize_degrees(pointer_degrees - center + 360.0);
    let additional_degrees = normalize_degrees(target - current + 360.0);

    let jitter_degrees = (rng.random::<f64>() - 0.5) * 2.0 * tuning.jitter_degrees;
    let revolutions = rng.random_range(tuning.min_revolutions..=tuning.max_revolutions);

    let total_degrees =
        accumulated_degrees + f64::from(revolutions) * 360.0 + additional_degrees + jitter_degrees;

    RotationPlan {
        additional_degrees,
        revolutions,
        jitter_degrees,
        total_degrees,
    }
}
