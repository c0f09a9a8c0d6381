//! Protection-motivation decisions.
//!
//! Threat and coping appraisals (survey scale 0–5) are normalised to
//! `[0, 1]`, perturbed by a small uniform jitter, and compared against two
//! thresholds:
//!
//! | threat > tt | coping > ct | action       |
//! |-------------|-------------|--------------|
//! | yes         | yes         | `mitigate`   |
//! | yes         | no          | `evacuate`   |
//! | no          | any         | `do_nothing` |

use rand::{Rng, RngCore};

use fr_agent::household::MAX_SCORE;
use fr_agent::{Action, Household};
use fr_core::Scenario;

use crate::scenario;

/// Half-width of the uniform jitter added to each normalised appraisal.
pub const JITTER: f64 = 0.03;

// ── Thresholds ────────────────────────────────────────────────────────────────

/// Decision thresholds on the normalised `[0, 1]` scale.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PmtThresholds {
    pub threat: f64,
    pub coping: f64,
}

impl Default for PmtThresholds {
    fn default() -> Self {
        Self { threat: 0.6, coping: 0.6 }
    }
}

/// Classify normalised appraisals.  Comparisons are strict: a value equal
/// to its threshold does not exceed it.
pub fn classify(threat: f64, coping: f64, thresholds: &PmtThresholds) -> Action {
    if threat > thresholds.threat {
        if coping > thresholds.coping { Action::Mitigate } else { Action::Evacuate }
    } else {
        Action::DoNothing
    }
}

// ── DecisionModel trait ───────────────────────────────────────────────────────

/// Pluggable per-household decision rule.
///
/// # Thread safety
///
/// The synchronous activation order may evaluate many households in
/// parallel, so implementations must be `Send + Sync`.  Per-household
/// randomness comes from the `rng` argument, never from the model itself.
pub trait DecisionModel: Send + Sync + 'static {
    /// Choose an action for `household`.  Must not mutate anything besides
    /// the RNG.
    fn decide(&self, household: &Household, rng: &mut dyn RngCore) -> Action;
}

// ── PmtDecision ───────────────────────────────────────────────────────────────

/// The jittered PMT rule.
#[derive(Clone, Debug, PartialEq)]
pub struct PmtDecision {
    pub scenario: Scenario,
    pub thresholds: PmtThresholds,
}

impl PmtDecision {
    pub fn new(scenario: Scenario, thresholds: PmtThresholds) -> Self {
        Self { scenario, thresholds }
    }

    /// Normalised, jittered `(threat, coping)` for `household`.
    ///
    /// Draws exactly two values from `rng`, threat first.
    pub fn appraise(&self, household: &Household, rng: &mut dyn RngCore) -> (f64, f64) {
        let raw_threat =
            scenario::decision_threat(self.scenario, household.home_zone(), household.threat_score());
        let threat = (raw_threat / MAX_SCORE + rng.gen_range(-JITTER..=JITTER)).clamp(0.0, 1.0);
        let coping =
            (household.coping_score() / MAX_SCORE + rng.gen_range(-JITTER..=JITTER)).clamp(0.0, 1.0);
        (threat, coping)
    }
}

impl Default for PmtDecision {
    fn default() -> Self {
        Self::new(Scenario::Default, PmtThresholds::default())
    }
}

impl DecisionModel for PmtDecision {
    fn decide(&self, household: &Household, rng: &mut dyn RngCore) -> Action {
        let (threat, coping) = self.appraise(household, rng);
        classify(threat, coping, &self.thresholds)
    }
}
