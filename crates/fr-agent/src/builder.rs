//! Fluent builder for constructing `HouseholdStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use fr_agent::{Household, HouseholdStoreBuilder, SesTier};
//!
//! let (store, rngs) = HouseholdStoreBuilder::new(/*seed=*/ 42)
//!     .household(Household::new("Heugem", SesTier::Low, 4.0, 1.0))
//!     .household(Household::new("Randwyck", SesTier::High, 2.0, 3.0))
//!     .build();
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(rngs.len(), 2);
//! ```

use fr_core::AgentId;

use crate::{AgentRngs, Household, HouseholdStore};

/// Fluent builder for [`HouseholdStore`] + [`AgentRngs`].
///
/// IDs are assigned in insertion order starting at 0; any ID already set on
/// an incoming household is overwritten.
pub struct HouseholdStoreBuilder {
    seed: u64,
    households: Vec<Household>,
}

impl HouseholdStoreBuilder {
    /// Create an empty builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, households: Vec::new() }
    }

    pub fn with_capacity(seed: u64, capacity: usize) -> Self {
        Self { seed, households: Vec::with_capacity(capacity) }
    }

    /// Append one household.
    pub fn household(mut self, household: Household) -> Self {
        self.push(household);
        self
    }

    /// Append one household, returning the ID it will carry.
    pub fn push(&mut self, mut household: Household) -> AgentId {
        let id = AgentId(self.households.len() as u32);
        household.assign_id(id);
        self.households.push(household);
        id
    }

    pub fn len(&self) -> usize {
        self.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }

    /// Construct the store (with its home-zone index) and the matching RNGs.
    pub fn build(self) -> (HouseholdStore, AgentRngs) {
        let rngs = AgentRngs::new(self.households.len(), self.seed);
        let store = HouseholdStore::new(self.households);
        (store, rngs)
    }
}
