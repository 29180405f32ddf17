//! Wheel engine — spin lifecycle state machine
//!
//! Owns the widget's only mutable state and coordinates layout, selection,
//! rotation planning and item sampling. One spin at a time: requests during
//! the animation are dropped silently, never queued.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wheel_core::Item;

use crate::config::{WheelConfig, WheelConfigError};
use crate::layout::{SectorLayout, normalize_degrees};
use crate::rotation::plan_rotation;
use crate::sampler::sample_items;
use crate::selector::select;
use crate::spin::{SpinPhase, SpinResult};
use crate::timing::SpinTiming;

/// A spin whose animation is still running
#[derive(Debug, Clone)]
struct PendingSpin {
    result: SpinResult,
    resolve_at_ms: f64,
}

/// Weighted wheel engine
///
/// Hosts drive it with virtual time: `spin(now_ms)` starts the animation and
/// publishes the rotation target immediately; `poll(now_ms)` fires the
/// resolution once the spin duration has elapsed.
pub struct WheelEngine {
    /// Validated configuration (fixed for the widget's lifetime)
    config: WheelConfig,
    /// Cached angular layout
    layout: SectorLayout,
    /// Random number generator
    rng: StdRng,
    /// Lifecycle phase
    phase: SpinPhase,
    /// Lifetime rotation in degrees, monotonically non-decreasing
    accumulated_degrees: f64,
    /// Current spin count (drives spin ids)
    spin_count: u64,
    /// Spin awaiting resolution
    pending: Option<PendingSpin>,
    /// Last resolved outcome
    result: Option<SpinResult>,
    /// Items offered for the resolved outcome
    displayed_items: Vec<Item>,
    /// Index of the user's choice among displayed items
    selected_item: Option<usize>,
}

impl WheelEngine {
    /// Create an engine from a configuration
    ///
    /// Fails when the configuration is invalid; a rejected config never
    /// becomes operable.
    pub fn new(config: WheelConfig) -> Result<Self, WheelConfigError> {
        config.validate()?;
        let layout = SectorLayout::build(&config.sectors, config.anchor_degrees);

        Ok(Self {
            config,
            layout,
            rng: StdRng::from_os_rng(),
            phase: SpinPhase::Idle,
            accumulated_degrees: 0.0,
            spin_count: 0,
            pending: None,
            result: None,
            displayed_items: Vec::new(),
            selected_item: None,
        })
    }

    /// Create with the stoplight preset
    pub fn stoplight() -> Self {
        // The preset is statically valid
        Self::new(WheelConfig::stoplight()).expect("stoplight preset must validate")
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Seed RNG for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Set timing profile
    pub fn set_timing(&mut self, timing: SpinTiming) {
        self.config.timing = timing;
    }

    /// Get current config
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Get the cached layout
    pub fn layout(&self) -> &SectorLayout {
        &self.layout
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SPIN EXECUTION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Request a spin at virtual time `now_ms`
    ///
    /// Returns `false` without touching any state when a spin is already in
    /// progress; the request is dropped, not queued.
    pub fn spin(&mut self, now_ms: f64) -> bool {
        if self.phase == SpinPhase::Spinning {
            return false;
        }
        let sample = self.rng.random_range(0.0..360.0);
        self.start_spin(now_ms, sample);
        true
    }

    /// Request a spin with an injected angle sample (deterministic testing)
    pub fn spin_forced(&mut self, now_ms: f64, sample_degrees: f64) -> bool {
        if self.phase == SpinPhase::Spinning {
            return false;
        }
        self.start_spin(now_ms, normalize_degrees(sample_degrees));
        true
    }

    fn start_spin(&mut self, now_ms: f64, sample_degrees: f64) {
        self.result = None;
        self.displayed_items.clear();
        self.selected_item = None;

        self.spin_count += 1;
        let spin_id = format!("spin-{:06}", self.spin_count);

        let sector_index = select(sample_degrees, self.layout.ranges());
        let sector = &self.config.sectors[sector_index];
        let range = &self.layout.ranges()[sector_index];

        let rotation = plan_rotation(
            self.accumulated_degrees,
            range,
            self.config.pointer_degrees,
            &self.config.rotation,
            &mut self.rng,
        );
        // The target is published immediately; the host animates toward it
        self.accumulated_degrees = rotation.total_degrees;

        log::debug!(
            "{spin_id}: sample {sample_degrees:.2}° -> sector {sector_index} ({}), rotating to {:.2}°",
            sector.key,
            rotation.total_degrees
        );

        self.pending = Some(PendingSpin {
            result: SpinResult {
                spin_id,
                sector_index,
                key: sector.key.clone(),
                subtype: sector.subtype.clone(),
                description: sector.description.clone(),
                sample_degrees,
                rotation,
            },
            resolve_at_ms: now_ms + self.config.timing.spin_duration_ms,
        });
        self.phase = SpinPhase::Spinning;
    }

    /// Drive the timed transition
    ///
    /// Returns the freshly resolved result when the animation duration has
    /// elapsed, `None` otherwise. Idempotent once resolved.
    pub fn poll(&mut self, now_ms: f64) -> Option<&SpinResult> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now_ms >= p.resolve_at_ms);
        if !due {
            return None;
        }

        let pending = self.pending.take()?;
        self.phase = SpinPhase::Resolved;

        if !self.config.no_selection.contains(&pending.result.key) {
            self.displayed_items = sample_items(
                &self.config.catalog,
                &pending.result.key,
                self.config.max_items,
                &mut self.rng,
            );
        }

        log::debug!(
            "{}: resolved to '{}' with {} item(s)",
            pending.result.spin_id,
            pending.result.key,
            self.displayed_items.len()
        );

        self.result = Some(pending.result);
        self.result.as_ref()
    }

    /// Record the user's choice among the displayed items
    ///
    /// Pure state update; returns the chosen item, or `None` when no outcome
    /// is on display or the index is out of range.
    pub fn select_item(&mut self, index: usize) -> Option<&Item> {
        if self.phase != SpinPhase::Resolved || index >= self.displayed_items.len() {
            return None;
        }
        self.selected_item = Some(index);
        self.displayed_items.get(index)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // OBSERVABLE STATE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Current rotation in degrees (unbounded, never decreases)
    pub fn rotation_degrees(&self) -> f64 {
        self.accumulated_degrees
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Is a spin animation in progress?
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Last resolved outcome, if any
    pub fn result(&self) -> Option<&SpinResult> {
        self.result.as_ref()
    }

    /// Items offered for the resolved outcome (empty for no-selection
    /// categories)
    pub fn displayed_items(&self) -> &[Item] {
        &self.displayed_items
    }

    /// The user's chosen item, if one was selected
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_item
            .and_then(|index| self.displayed_items.get(index))
    }

    /// Total spins requested so far
    pub fn spin_count(&self) -> u64 {
        self.spin_count
    }
}

impl Default for WheelEngine {
    fn default() -> Self {
        Self::stoplight()
    }
}
