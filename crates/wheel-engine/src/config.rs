//! Wheel configuration and load-time validation
//!
//! Configuration is fixed for the widget's lifetime: the engine only accepts
//! a config that passed `validate()`, and never mutates it afterwards.

use serde::{Deserialize, Serialize};

use wheel_core::{CatalogError, CategoryKey, Item, ItemCatalog, SectorDefinition};

use crate::rotation::RotationTuning;
use crate::timing::SpinTiming;

/// Tolerance when checking that sector angles sum to 360
const ANGLE_SUM_EPSILON: f64 = 1e-6;

fn default_anchor() -> f64 {
    -90.0
}

fn default_pointer() -> f64 {
    270.0
}

fn default_max_items() -> usize {
    5
}

/// Full wheel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Ordered sector list; angles must sum to 360
    pub sectors: Vec<SectorDefinition>,

    /// Item catalog keyed by category
    pub catalog: ItemCatalog,

    /// Categories that resolve without offering items (e.g. "spin again")
    #[serde(default)]
    pub no_selection: Vec<CategoryKey>,

    /// Angle where the first sector starts (−90 = top of circle)
    #[serde(default = "default_anchor")]
    pub anchor_degrees: f64,

    /// Fixed pointer position the wheel settles against
    #[serde(default = "default_pointer")]
    pub pointer_degrees: f64,

    /// Maximum items offered per resolved spin
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Cosmetic rotation tuning (jitter, revolutions)
    #[serde(default)]
    pub rotation: RotationTuning,

    /// Animation timing
    #[serde(default)]
    pub timing: SpinTiming,
}

impl WheelConfig {
    /// Create a config with default geometry and tuning
    pub fn new(sectors: Vec<SectorDefinition>, catalog: ItemCatalog) -> Self {
        Self {
            sectors,
            catalog,
            no_selection: Vec::new(),
            anchor_degrees: default_anchor(),
            pointer_degrees: default_pointer(),
            max_items: default_max_items(),
            rotation: RotationTuning::default(),
            timing: SpinTiming::default(),
        }
    }

    /// Builder: designate a no-selection category
    pub fn with_no_selection(mut self, key: impl Into<CategoryKey>) -> Self {
        self.no_selection.push(key.into());
        self
    }

    /// Builder: set timing
    pub fn with_timing(mut self, timing: SpinTiming) -> Self {
        self.timing = timing;
        self
    }

    /// The stoplight plate wheel: two green, three yellow, one small red
    /// "spin again" sector
    pub fn stoplight() -> Self {
        let sectors = vec![
            SectorDefinition::new(
                "green",
                "veggie",
                "Choose a Green Stop Light Veggie",
                "#22C55E",
                63.0,
            ),
            SectorDefinition::new(
                "yellow",
                "veggie",
                "Choose a Yellow Stop Light Veggie",
                "#FCD34D",
                63.0,
            ),
            SectorDefinition::new(
                "green",
                "fruit",
                "Choose a Green Stop Light Fruit",
                "#22C55E",
                63.0,
            ),
            SectorDefinition::new(
                "yellow",
                "protein",
                "Choose a Yellow Stop Light Protein",
                "#FCD34D",
                63.0,
            ),
            SectorDefinition::new("red", "", "Spin Again", "#DC2626", 45.0),
            SectorDefinition::new(
                "yellow",
                "grain",
                "Choose a Yellow Stop Light Grain",
                "#FCD34D",
                63.0,
            ),
        ];

        let catalog = ItemCatalog::new()
            .with_entry(
                "green",
                vec![
                    Item::new("Apple"),
                    Item::new("Salad"),
                    Item::new("Broccoli"),
                    Item::new("Green Beans"),
                ],
            )
            .with_entry(
                "yellow",
                vec![
                    Item::new("Rice"),
                    Item::new("Banana"),
                    Item::new("Corn"),
                    Item::new("Pasta"),
                ],
            );

        Self::new(sectors, catalog).with_no_selection("red")
    }

    /// Validate the configuration
    ///
    /// Required before the engine will accept it; a failing config must not
    /// become operable.
    pub fn validate(&self) -> Result<(), WheelConfigError> {
        if self.sectors.is_empty() {
            return Err(WheelConfigError::NoSectors);
        }

        for (index, sector) in self.sectors.iter().enumerate() {
            if !sector.angle_degrees.is_finite() || sector.angle_degrees <= 0.0 {
                return Err(WheelConfigError::InvalidAngle {
                    index,
                    angle: sector.angle_degrees,
                });
            }
        }

        let sum: f64 = self.sectors.iter().map(|s| s.angle_degrees).sum();
        if (sum - 360.0).abs() > ANGLE_SUM_EPSILON {
            return Err(WheelConfigError::BadAngleSum(sum));
        }

        if self.max_items == 0 {
            return Err(WheelConfigError::InvalidTuning(
                "max_items must be at least 1",
            ));
        }

        if self.rotation.jitter_degrees < 0.0 {
            return Err(WheelConfigError::InvalidTuning(
                "jitter_degrees cannot be negative",
            ));
        }

        if self.rotation.min_revolutions > self.rotation.max_revolutions {
            return Err(WheelConfigError::InvalidTuning(
                "min_revolutions cannot exceed max_revolutions",
            ));
        }

        self.catalog
            .validate_against(self.sectors.iter().map(|s| &s.key), &self.no_selection)?;

        Ok(())
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load and validate from JSON
    pub fn from_json(json: &str) -> Result<Self, WheelConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WheelConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self::stoplight()
    }
}

/// Configuration validation errors — fatal at load time
#[derive(Debug, Clone, thiserror::Error)]
pub enum WheelConfigError {
    #[error("Wheel must have at least one sector")]
    NoSectors,

    #[error("Sector {index} has invalid angle {angle}")]
    InvalidAngle { index: usize, angle: f64 },

    #[error("Sector angles must sum to 360, got {0}")]
    BadAngleSum(f64),

    #[error("Invalid tuning: {0}")]
    InvalidTuning(&'static str),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stoplight_is_valid() {
        let config = WheelConfig::stoplight();
        assert!(config.validate().is_ok());
        assert_eq!(config.sectors.len(), 6);
        assert_eq!(config.anchor_degrees, -90.0);
        assert_eq!(config.pointer_degrees, 270.0);
    }

    #[test]
    fn test_reject_bad_angle_sum() {
        let mut config = WheelConfig::stoplight();
        config.sectors[0].angle_degrees = 70.0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, WheelConfigError::BadAngleSum(_)));
    }

    #[test]
    fn test_reject_zero_angle() {
        let mut config = WheelConfig::stoplight();
        config.sectors[0].angle_degrees = 0.0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, WheelConfigError::InvalidAngle { index: 0, .. }));
    }

    #[test]
    fn test_reject_empty_sector_list() {
        let config = WheelConfig::new(Vec::new(), ItemCatalog::new());
        assert!(matches!(
            config.validate().unwrap_err(),
            WheelConfigError::NoSectors
        ));
    }

    #[test]
    fn test_reject_missing_catalog_entry() {
        let mut config = WheelConfig::stoplight();
        // "red" is no longer designated no-selection, so it needs items
        config.no_selection.clear();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, WheelConfigError::Catalog(_)));
    }

    #[test]
    fn test_reject_bad_tuning() {
        let mut config = WheelConfig::stoplight();
        config.rotation.min_revolutions = 9;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, WheelConfigError::InvalidTuning(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = WheelConfig::stoplight();
        let json = config.to_json();
        let back = WheelConfig::from_json(&json).unwrap();

        assert_eq!(back.sectors.len(), config.sectors.len());
        assert_eq!(back.no_selection, config.no_selection);
        assert_eq!(back.max_items, config.max_items);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            WheelConfig::from_json("{not json"),
            Err(WheelConfigError::Parse(_))
        ));
    }
}
