//! Outcome selection — map a uniform angle sample to a sector
//!
//! Probability of each sector is exactly its angular share: the sample is
//! uniform on [0, 360) and the ranges partition the circle.

use crate::layout::AngularRange;

/// Resolve a uniform sample in [0, 360) to a sector index
///
/// Searches ranges in sector order and returns the first containing the
/// sample. A valid layout always matches; the first-sector fallback only
/// guards against a broken partition and is logged as an invariant
/// violation.
pub fn select(r: f64, ranges: &[AngularRange]) -> usize {
    match ranges.iter().find(|c| c.contains(r)) {
        Some(range) => range.sector_index,
        None => {
            log::warn!("no angular range contains sample {r:.3}; falling back to first sector");
            ranges.first().map(|c| c.sector_index).unwrap_or(0)
        }
    }
}
