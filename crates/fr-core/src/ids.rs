//! Household identity.

use std::fmt;

/// Identity of one household.
///
/// Assigned in creation order starting at 0, so it doubles as the index into
/// the household store and the per-agent RNG vector.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Placeholder carried by a household that has not been added to a store.
    pub const INVALID: AgentId = AgentId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// `None` once `n` no longer fits the id space.
    pub fn from_index(n: usize) -> Option<Self> {
        u32::try_from(n).ok().filter(|&v| v != u32::MAX).map(AgentId)
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            f.write_str("household(unassigned)")
        } else {
            write!(f, "household #{}", self.0)
        }
    }
}
