//! Scenario score modifiers.
//!
//! Scenarios rewrite threat scores once, when the simulation is built.
//! `heugem_only` is additionally enforced by the decision rule itself, which
//! is idempotent with the construction-time rewrite.

use fr_agent::Household;
use fr_core::Scenario;
use fr_core::zone::{HEUGEM, same_zone};

/// Threat score every household gets under `all_high_threat`.
pub const HIGH_THREAT_SCORE: f64 = 4.5;
/// Threat score every household gets under `all_low_threat`.
pub const LOW_THREAT_SCORE: f64 = 0.8;
/// Threat score of households outside Heugem under `heugem_only`.
pub const HEUGEM_ONLY_THREAT: f64 = 0.1;

/// Threat score a household should carry under `scenario`.
pub fn resolved_threat(scenario: Scenario, home_zone: &str, raw: f64) -> f64 {
    match scenario {
        Scenario::Default => raw,
        Scenario::AllHighThreat => HIGH_THREAT_SCORE,
        Scenario::AllLowThreat => LOW_THREAT_SCORE,
        Scenario::HeugemOnly => decision_threat(scenario, home_zone, raw),
    }
}

/// Raw threat the decision rule uses: only the `heugem_only` override.
pub fn decision_threat(scenario: Scenario, home_zone: &str, raw: f64) -> f64 {
    if scenario == Scenario::HeugemOnly && !same_zone(home_zone, HEUGEM) {
        HEUGEM_ONLY_THREAT
    } else {
        raw
    }
}

/// Rewrite `household`'s threat score for `scenario`.
pub fn apply_scenario(scenario: Scenario, household: &mut Household) {
    let threat = resolved_threat(scenario, household.home_zone(), household.threat_score());
    household.set_threat_score(threat);
}
