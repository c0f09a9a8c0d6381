//! Global phase and activation order.

use std::fmt;

/// Global behavioural phase.  Moves `PreHazard → Reactive` once and never
/// back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Households appraise the threat but nobody moves.
    #[default]
    PreHazard,
    /// Threat triggered: decisions, social influence, and relocation.
    Reactive,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::PreHazard => "pre_hazard",
            Phase::Reactive => "reactive",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How households are visited during the reactive phase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ActivationOrder {
    /// A fresh seeded permutation each step.  Households see the actions
    /// their neighbours already took earlier in the same step.
    #[default]
    RandomSequential,
    /// Everyone reads the start-of-step actions; updates are published
    /// together afterwards.  Results do not depend on visiting order.
    Synchronous,
}
