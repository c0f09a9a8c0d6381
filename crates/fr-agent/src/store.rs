//! Household storage: `HouseholdStore` (records + home-zone index) and
//! `AgentRngs` (per-household RNG).
//!
//! # Why two structs?
//!
//! The synchronous activation order reads every household (`&HouseholdStore`)
//! while drawing jitter from each household's own RNG (`&mut AgentRng`).
//! Keeping RNGs in a separate `AgentRngs` lets both borrows coexist:
//!
//! ```ignore
//! // fr-sim synchronous read phase (simplified):
//! let store: &HouseholdStore = &sim.store;
//! let actions = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| model.decide(store.household(AgentId(i as u32)), rng))
//!     .collect::<Vec<_>>();
//! ```

use fr_core::{AgentId, AgentRng};

use crate::{Action, Household};

#[cfg(feature = "fx-hash")]
type ZoneIndex = rustc_hash::FxHashMap<String, Vec<AgentId>>;
#[cfg(not(feature = "fx-hash"))]
type ZoneIndex = std::collections::HashMap<String, Vec<AgentId>>;

/// Index key: trimmed, lower-cased zone name.
fn zone_key(zone: &str) -> String {
    zone.trim().to_ascii_lowercase()
}

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-household deterministic RNG state, separated from [`HouseholdStore`]
/// so a shared store borrow and exclusive RNG borrows can coexist.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-household RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── HouseholdStore ────────────────────────────────────────────────────────────

/// All households of one simulation, indexed by `AgentId` and by home zone.
///
/// `AgentId` values are dense and 0-based, so `agent.index()` is the
/// position in the backing `Vec`.  The home-zone index is built once; home
/// zones never change afterwards.
pub struct HouseholdStore {
    households: Vec<Household>,
    by_home_zone: ZoneIndex,
}

impl HouseholdStore {
    pub(crate) fn new(households: Vec<Household>) -> Self {
        let mut by_home_zone = ZoneIndex::default();
        for h in &households {
            by_home_zone
                .entry(zone_key(h.home_zone()))
                .or_insert_with(Vec::new)
                .push(h.id());
        }
        Self { households, by_home_zone }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.households.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.households.len() as u32).map(AgentId)
    }

    pub fn get(&self, agent: AgentId) -> Option<&Household> {
        self.households.get(agent.index())
    }

    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Household> {
        self.households.get_mut(agent.index())
    }

    /// Indexed access for IDs known to be in range.
    ///
    /// # Panics
    ///
    /// If `agent` was not issued by this store.
    #[inline]
    pub fn household(&self, agent: AgentId) -> &Household {
        &self.households[agent.index()]
    }

    #[inline]
    pub fn household_mut(&mut self, agent: AgentId) -> &mut Household {
        &mut self.households[agent.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Household> + '_ {
        self.households.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Household> + '_ {
        self.households.iter_mut()
    }

    pub fn as_slice(&self) -> &[Household] {
        &self.households
    }

    // ── Zone queries ──────────────────────────────────────────────────────

    /// Households whose home zone is `zone` (trimmed, case-insensitive).
    pub fn zone_members(&self, zone: &str) -> &[AgentId] {
        self.by_home_zone
            .get(&zone_key(zone))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every other household sharing `agent`'s home zone.
    ///
    /// Membership is by home zone, so households that have moved to the
    /// safe zone remain neighbours of those they left behind.
    pub fn neighbors_of(&self, agent: AgentId) -> impl Iterator<Item = AgentId> + '_ {
        let members = self
            .get(agent)
            .map(|h| self.zone_members(h.home_zone()))
            .unwrap_or(&[]);
        members.iter().copied().filter(move |&n| n != agent)
    }

    /// Current actions of `agent`'s neighbours.
    pub fn neighbor_actions(&self, agent: AgentId) -> Vec<Option<Action>> {
        self.neighbors_of(agent)
            .map(|n| self.household(n).action())
            .collect()
    }

    /// Distinct home-zone names in first-seen order.
    pub fn home_zones(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for h in &self.households {
            if !seen.iter().any(|z| fr_core::zone::same_zone(z, h.home_zone())) {
                seen.push(h.home_zone());
            }
        }
        seen
    }
}
