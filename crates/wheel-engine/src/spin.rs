//! Spin lifecycle phases and resolved spin results

use serde::{Deserialize, Serialize};

use wheel_core::CategoryKey;

use crate::rotation::RotationPlan;

/// Lifecycle phase of the widget
///
/// `Resolved` is re-entrant: a new spin may start immediately while the
/// previous outcome stays on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinPhase {
    /// No spin has run yet, or the last outcome was cleared
    Idle,
    /// Animation in progress; new spin requests are dropped
    Spinning,
    /// Outcome fixed and published
    Resolved,
}

impl Default for SpinPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Outcome of one spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    /// Spin ID ("spin-000001", ...)
    pub spin_id: String,
    /// Index of the resolved sector in the configured sector list
    pub sector_index: usize,
    /// Resolved outcome category
    pub key: CategoryKey,
    /// Subtype label of the resolved sector
    pub subtype: String,
    /// Description text published with the outcome
    pub description: String,
    /// The uniform angle sample that picked this sector, in [0, 360)
    pub sample_degrees: f64,
    /// The rotation planned for the animation
    pub rotation: RotationPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_default_idle() {
        assert_eq!(SpinPhase::default(), SpinPhase::Idle);
    }

    #[test]
    fn test_result_roundtrip() {
        let result = SpinResult {
            spin_id: "spin-000001".into(),
            sector_index: 1,
            key: CategoryKey::new("yellow"),
            subtype: "veggie".into(),
            description: "Choose a Yellow Stop Light Veggie".into(),
            sample_degrees: 0.0,
            rotation: RotationPlan {
                additional_degrees: 4.5,
                revolutions: 5,
                jitter_degrees: -0.3,
                total_degrees: 1804.2,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: SpinResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
