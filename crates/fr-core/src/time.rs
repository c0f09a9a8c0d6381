//! Simulation time model.
//!
//! Time is a monotonically increasing `Step` counter.  A step has no fixed
//! wall-clock meaning; hazard timelines are authored directly in steps.

use std::fmt;

// ── Step ──────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current step.  Written only by the simulation's step loop.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    pub current_step: Step,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_step = self.current_step + 1;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_step)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration shared by every scenario.
///
/// Behavioral parameters (scenario, thresholds, social ties) live in
/// `fr_behavior::PmtConfig`; this struct only covers the run itself.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total steps to simulate.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical results;
    /// `None` opts in to entropy seeding.
    pub seed: Option<u64>,

    /// Upper bound on households created from the survey.  `None` keeps
    /// every record that resolves to a known zone.
    pub max_agents: Option<usize>,

    /// Record per-agent rows every N steps.  1 = every step.
    pub output_interval_steps: u64,
}

impl SimConfig {
    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.total_steps)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_steps:           20,
            seed:                  Some(42),
            max_agents:            None,
            output_interval_steps: 1,
        }
    }
}
