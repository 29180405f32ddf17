//! Sector geometry — cumulative angular ranges on the wheel
//!
//! Converts the ordered sector list into normalized ranges on [0, 360).
//! The accumulator runs unnormalized so long sector lists cannot drift; only
//! the stored endpoints are reduced into [0, 360).

use serde::{Deserialize, Serialize};

use wheel_core::SectorDefinition;

/// Reduce an angle into [0, 360)
pub fn normalize_degrees(x: f64) -> f64 {
    ((x % 360.0) + 360.0) % 360.0
}

/// One sector's angular range, normalized to [0, 360)
///
/// `wraps` marks ranges crossing the 0°/360° seam (end < start).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularRange {
    /// Start angle in degrees, inclusive
    pub start_degrees: f64,
    /// End angle in degrees, exclusive
    pub end_degrees: f64,
    /// Index into the sector list this range belongs to
    pub sector_index: usize,
    /// Does this range cross the 0° seam?
    pub wraps: bool,
}

impl AngularRange {
    /// Check whether an angle in [0, 360) falls inside this range
    pub fn contains(&self, r: f64) -> bool {
        if self.wraps {
            r >= self.start_degrees || r < self.end_degrees
        } else {
            r >= self.start_degrees && r < self.end_degrees
        }
    }

    /// Angular width in degrees
    pub fn span(&self) -> f64 {
        if self.wraps {
            360.0 - self.start_degrees + self.end_degrees
        } else {
            self.end_degrees - self.start_degrees
        }
    }

    /// Wrap-adjusted midpoint of the range, in [0, 360)
    pub fn center(&self) -> f64 {
        if self.wraps {
            normalize_degrees(self.start_degrees + self.span() / 2.0)
        } else {
            (self.start_degrees + self.end_degrees) / 2.0
        }
    }
}

/// Cached angular layout of a wheel
///
/// Pure function of the sector configuration; built once per widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorLayout {
    ranges: Vec<AngularRange>,
    anchor_degrees: f64,
}

impl SectorLayout {
    /// Build ranges for an ordered sector list
    ///
    /// The first sector starts at `anchor_degrees` (−90 puts it at the top
    /// of the circle under screen coordinates). Assumes the angles were
    /// already validated to sum to 360.
    pub fn build(sectors: &[SectorDefinition], anchor_degrees: f64) -> Self {
        let mut ranges = Vec::with_capacity(sectors.len());
        let mut acc = anchor_degrees;

        for (sector_index, sector) in sectors.iter().enumerate() {
            let start = acc;
            let end = acc + sector.angle_degrees;
            let start_degrees = normalize_degrees(start);
            let end_degrees = normalize_degrees(end);

            ranges.push(AngularRange {
                start_degrees,
                end_degrees,
                sector_index,
                wraps: end_degrees < start_degrees,
            });
            // Advance on the unnormalized end
            acc = end;
        }

        Self {
            ranges,
            anchor_degrees,
        }
    }

    /// All ranges, in sector order
    pub fn ranges(&self) -> &[AngularRange] {
        &self.ranges
    }

    /// Range for a sector index
    pub fn range(&self, sector_index: usize) -> Option<&AngularRange> {
        self.ranges.get(sector_index)
    }

    /// Anchor offset the layout was built with
    pub fn anchor_degrees(&self) -> f64 {
        self.anchor_degrees
    }

    /// Number of sectors
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the layout has no sectors
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
