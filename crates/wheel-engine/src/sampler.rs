//! Category item sampling — bounded draw without replacement

use rand::Rng;
use rand::seq::SliceRandom;

use wheel_core::{CategoryKey, Item, ItemCatalog};

/// Draw up to `max_items` items from a category, without replacement
///
/// Every item is equally likely to appear (uniform partial shuffle). Returns
/// fewer items when the category holds fewer than `max_items`, and an empty
/// list for categories absent from the catalog — callers never reach that
/// case for validated configs, since no-selection categories skip sampling
/// entirely.
pub fn sample_items<R: Rng + ?Sized>(
    catalog: &ItemCatalog,
    key: &CategoryKey,
    max_items: usize,
    rng: &mut R,
) -> Vec<Item> {
    let Some(items) = catalog.get(key) else {
        return Vec::new();
    };

    let mut pool: Vec<Item> = items.to_vec();
    let count = max_items.min(pool.len());
    let (picked, _) = pool.partial_shuffle(rng, count);
    picked.to_vec()
}
