//! Outcome categories and sector definitions
//!
//! A wheel is an ordered list of sectors. Each sector covers an angular span
//! and maps to one outcome category; several sectors may share a category
//! (distinguished by subtype, e.g. "veggie" vs "fruit").

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key identifying an outcome category (e.g. "green", "yellow", "red")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Create a new category key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CategoryKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One angular slice of the wheel
///
/// Immutable configuration, supplied once in display order. The sum of
/// `angle_degrees` over a wheel must be exactly 360.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorDefinition {
    /// Outcome category this sector resolves to
    pub key: CategoryKey,
    /// Subtype label shown on the wheel (e.g. "veggie", "fruit")
    #[serde(default)]
    pub subtype: String,
    /// Description published when the sector is resolved
    pub description: String,
    /// Display color (CSS hex string)
    pub color: String,
    /// Angular width in degrees
    pub angle_degrees: f64,
}

impl SectorDefinition {
    /// Create a sector definition
    pub fn new(
        key: impl Into<CategoryKey>,
        subtype: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
        angle_degrees: f64,
    ) -> Self {
        Self {
            key: key.into(),
            subtype: subtype.into(),
            description: description.into(),
            color: color.into(),
            angle_degrees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_key_display() {
        let key = CategoryKey::new("green");
        assert_eq!(key.as_str(), "green");
        assert_eq!(key.to_string(), "green");
    }

    #[test]
    fn test_category_key_serde_transparent() {
        let key = CategoryKey::new("yellow");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"yellow\"");

        let back: CategoryKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_sector_definition_roundtrip() {
        let sector = SectorDefinition::new("green", "veggie", "Choose a veggie", "#22C55E", 63.0);
        let json = serde_json::to_string(&sector).unwrap();
        let back: SectorDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(back.key, sector.key);
        assert_eq!(back.angle_degrees, 63.0);
    }
}
