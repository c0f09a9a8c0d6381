//! Immutable per-step, per-zone flood-level lookup.

use std::collections::BTreeMap;

use fr_core::Step;
use fr_core::zone::same_zone;

/// One timeline entry: the flood level in `zone` at some step.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneLevel {
    pub zone:        String,
    pub flood_level: f64,
}

/// Sparse `(step, zone) → flood_level` lookup.
///
/// Built once by the loader (or by [`HazardTimeline::from_entries`] in
/// tests) and never mutated afterwards.  Entries are grouped by step in a
/// `BTreeMap`, so the per-step queries the step loop makes are one map
/// lookup plus a scan over that step's handful of zones.
#[derive(Clone, Debug, Default)]
pub struct HazardTimeline {
    by_step: BTreeMap<Step, Vec<ZoneLevel>>,
    entries: usize,
}

impl HazardTimeline {
    /// A timeline with no entries: every query reads level `0.0`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(step, zone, flood_level)` triples.
    ///
    /// When the same `(step, zone)` pair appears twice, lookups return the
    /// first occurrence; both still count towards the step mean.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u64, S, f64)>,
        S: Into<String>,
    {
        let mut timeline = Self::empty();
        for (step, zone, flood_level) in entries {
            timeline.insert(Step(step), zone.into(), flood_level);
        }
        timeline
    }

    pub(crate) fn insert(&mut self, step: Step, zone: String, flood_level: f64) {
        self.by_step
            .entry(step)
            .or_default()
            .push(ZoneLevel { zone, flood_level });
        self.entries += 1;
    }

    /// Flood level in `zone` at `step`; `0.0` when there is no entry.
    pub fn level(&self, step: Step, zone: &str) -> f64 {
        self.levels_at(step)
            .iter()
            .find(|e| same_zone(&e.zone, zone))
            .map_or(0.0, |e| e.flood_level)
    }

    /// Mean flood level over the entries present at `step`.
    ///
    /// Returns `None` when the timeline has nothing for that step, so the
    /// caller can decide whether to hold its previous aggregate.
    pub fn mean_level(&self, step: Step) -> Option<f64> {
        let levels = self.levels_at(step);
        if levels.is_empty() {
            return None;
        }
        let sum: f64 = levels.iter().map(|e| e.flood_level).sum();
        Some(sum / levels.len() as f64)
    }

    /// All entries recorded for `step` (empty slice if none).
    pub fn levels_at(&self, step: Step) -> &[ZoneLevel] {
        self.by_step.get(&step).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct zone names mentioned anywhere in the timeline, sorted.
    pub fn zones(&self) -> Vec<&str> {
        let mut zones: Vec<&str> = self
            .by_step
            .values()
            .flatten()
            .map(|e| e.zone.as_str())
            .collect();
        zones.sort_unstable();
        zones.dedup();
        zones
    }

    /// Last step with any entry, or `None` for an empty timeline.
    pub fn last_step(&self) -> Option<Step> {
        self.by_step.keys().next_back().copied()
    }

    /// Total number of `(step, zone)` entries.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
