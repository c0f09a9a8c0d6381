//! Step- and level-keyed hazard rules.
//!
//! These are the fixed constants the step loop compares against: when the
//! aggregate water level triggers the reactive phase, which steps count as
//! "early" for evacuation, and the windows in which a household's home zone
//! floods or causes damage.  Outcomes depend only on the step number and the
//! zone's flood level, never on what the household chose to do.

use std::ops::RangeInclusive;

use fr_core::Step;

/// Thresholds and windows for phase triggering and hazard outcomes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HazardRules {
    /// Aggregate water level at or above which the reactive phase begins.
    pub trigger_level: f64,

    /// Relocations strictly before this step count as early evacuations.
    pub early_cutoff: u64,

    /// Steps (inclusive) during which a zone can flood.
    pub flood_window: (u64, u64),

    /// A zone floods when its level exceeds this inside the flood window.
    pub flood_level: f64,

    /// Steps (inclusive) during which an already flooded home takes damage.
    pub damage_window: (u64, u64),

    /// Damage occurs when the level exceeds this inside the damage window.
    pub damage_level: f64,
}

impl Default for HazardRules {
    fn default() -> Self {
        Self {
            trigger_level: 0.75,
            early_cutoff:  6,
            flood_window:  (6, 12),
            flood_level:   0.6,
            damage_window: (13, 20),
            damage_level:  0.8,
        }
    }
}

impl HazardRules {
    /// `true` once the aggregate water level calls for the reactive phase.
    #[inline]
    pub fn triggers(&self, water_level: f64) -> bool {
        water_level >= self.trigger_level
    }

    /// `true` if a relocation at `step` counts as early.
    #[inline]
    pub fn is_early(&self, step: Step) -> bool {
        step.0 < self.early_cutoff
    }

    /// `true` if a home at `level` floods at `step`.
    #[inline]
    pub fn floods(&self, step: Step, level: f64) -> bool {
        window(self.flood_window).contains(&step.0) && level > self.flood_level
    }

    /// `true` if a home at `level` is damaged at `step`, provided it has
    /// already flooded.  The caller enforces the flooded precondition.
    #[inline]
    pub fn damages(&self, step: Step, level: f64) -> bool {
        window(self.damage_window).contains(&step.0) && level > self.damage_level
    }
}

#[inline]
fn window((lo, hi): (u64, u64)) -> RangeInclusive<u64> {
    lo..=hi
}
