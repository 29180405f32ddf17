//! Item catalog — what each category offers once resolved
//!
//! Read-only after construction; the engine only ever samples from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sector::CategoryKey;

/// A selectable item belonging to a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,
    /// Image asset reference (may be empty)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_ref: String,
    /// Descriptive tip text (may be empty)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tip: String,
}

impl Item {
    /// Create an item with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_ref: String::new(),
            tip: String::new(),
        }
    }

    /// Attach an image reference
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Attach a tip text
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }
}

/// Static catalog mapping categories to their ordered item lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCatalog {
    entries: BTreeMap<CategoryKey, Vec<Item>>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a category's item list
    pub fn insert(&mut self, key: impl Into<CategoryKey>, items: Vec<Item>) {
        self.entries.insert(key.into(), items);
    }

    /// Builder: insert a category's item list
    pub fn with_entry(mut self, key: impl Into<CategoryKey>, items: Vec<Item>) -> Self {
        self.insert(key, items);
        self
    }

    /// Get a category's items
    pub fn get(&self, key: &CategoryKey) -> Option<&[Item]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of items under a category (0 if absent)
    pub fn len_for(&self, key: &CategoryKey) -> usize {
        self.entries.get(key).map(Vec::len).unwrap_or(0)
    }

    /// Iterate category keys
    pub fn categories(&self) -> impl Iterator<Item = &CategoryKey> {
        self.entries.keys()
    }

    /// Check if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate that every resolvable category has a usable entry
    ///
    /// A category is resolvable when a sector maps to it and it is not
    /// designated no-selection. Missing or empty entries for resolvable
    /// categories are configuration errors.
    pub fn validate_against<'a>(
        &self,
        sector_keys: impl IntoIterator<Item = &'a CategoryKey>,
        no_selection: &[CategoryKey],
    ) -> Result<(), CatalogError> {
        for key in sector_keys {
            if no_selection.contains(key) {
                continue;
            }
            match self.entries.get(key) {
                None => return Err(CatalogError::MissingCategory(key.to_string())),
                Some(items) if items.is_empty() => {
                    return Err(CatalogError::EmptyCategory(key.to_string()));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Catalog validation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("No catalog entry for resolvable category '{0}'")]
    MissingCategory(String),

    #[error("Catalog entry for resolvable category '{0}' is empty")]
    EmptyCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> ItemCatalog {
        ItemCatalog::new()
            .with_entry("green", vec![Item::new("Apple"), Item::new("Salad")])
            .with_entry("yellow", vec![Item::new("Rice")])
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = sample_catalog();
        let green = CategoryKey::new("green");

        assert_eq!(catalog.len_for(&green), 2);
        assert_eq!(catalog.get(&green).unwrap()[0].name, "Apple");
        assert_eq!(catalog.len_for(&CategoryKey::new("red")), 0);
    }

    #[test]
    fn test_validate_ok() {
        let catalog = sample_catalog();
        let keys = [CategoryKey::new("green"), CategoryKey::new("yellow")];
        assert!(catalog.validate_against(keys.iter(), &[]).is_ok());
    }

    #[test]
    fn test_validate_missing_category() {
        let catalog = sample_catalog();
        let keys = [CategoryKey::new("red")];

        let err = catalog.validate_against(keys.iter(), &[]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingCategory(_)));
    }

    #[test]
    fn test_validate_skips_no_selection() {
        let catalog = sample_catalog();
        let keys = [CategoryKey::new("red")];
        let no_selection = [CategoryKey::new("red")];

        assert!(catalog.validate_against(keys.iter(), &no_selection).is_ok());
    }

    #[test]
    fn test_validate_empty_entry() {
        let catalog = ItemCatalog::new().with_entry("green", Vec::new());
        let keys = [CategoryKey::new("green")];

        let err = catalog.validate_against(keys.iter(), &[]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCategory(_)));
    }

    #[test]
    fn test_item_builder() {
        let item = Item::new("Apple")
            .with_image("assets/apple.png")
            .with_tip("Great with peanut butter");

        assert_eq!(item.image_ref, "assets/apple.png");
        assert!(!item.tip.is_empty());
    }
}
