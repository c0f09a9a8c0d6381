//! Social influence.
//!
//! During the reactive phase a household looks at its neighbours (everyone
//! else with the same home zone).  If the share of neighbours taking the
//! counted actions exceeds its threshold, it switches to `mitigate` and is
//! marked influenced.  One evaluation per household per step; no cascades.

use fr_agent::{Action, Household};

/// Which neighbour actions count towards the influence ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InfluenceRule {
    /// Only evacuating neighbours count.
    #[default]
    EvacuateOnly,
    /// Evacuating and mitigating neighbours both count.
    EvacuateOrMitigate,
}

impl InfluenceRule {
    pub fn counts(self, action: Option<Action>) -> bool {
        match self {
            InfluenceRule::EvacuateOnly => action == Some(Action::Evacuate),
            InfluenceRule::EvacuateOrMitigate => {
                matches!(action, Some(Action::Evacuate | Action::Mitigate))
            }
        }
    }
}

/// Share of `neighbor_actions` that `rule` counts.  `None` when there are no
/// neighbours.
pub fn influence_ratio(neighbor_actions: &[Option<Action>], rule: InfluenceRule) -> Option<f64> {
    if neighbor_actions.is_empty() {
        return None;
    }
    let hits = neighbor_actions.iter().filter(|&&a| rule.counts(a)).count();
    Some(hits as f64 / neighbor_actions.len() as f64)
}

/// Threshold used when none is configured: tighter-knit households are
/// easier to sway.  A missing strength counts as 0.
pub fn default_threshold(social_network_strength: Option<u8>) -> f64 {
    0.6 - 0.05 * f64::from(social_network_strength.unwrap_or(0))
}

// ── SocialConfig ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SocialConfig {
    /// Social ties on/off.  When off, influence never applies.
    pub enabled: bool,
    /// Fixed threshold for every household; `None` uses
    /// [`default_threshold`] per household.
    pub threshold: Option<f64>,
    pub rule: InfluenceRule,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self { enabled: true, threshold: None, rule: InfluenceRule::EvacuateOnly }
    }
}

impl SocialConfig {
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    pub fn threshold_for(&self, household: &Household) -> f64 {
        self.threshold
            .unwrap_or_else(|| default_threshold(household.social_network_strength()))
    }

    /// `true` if `household` would be swayed by `neighbor_actions`.
    pub fn evaluate(&self, household: &Household, neighbor_actions: &[Option<Action>]) -> bool {
        if !self.enabled {
            return false;
        }
        match influence_ratio(neighbor_actions, self.rule) {
            Some(ratio) => ratio > self.threshold_for(household),
            None => false,
        }
    }

    /// Evaluate and, if swayed, override the household's action.  Returns
    /// whether the override happened.
    pub fn apply(&self, household: &mut Household, neighbor_actions: &[Option<Action>]) -> bool {
        let swayed = self.evaluate(household, neighbor_actions);
        if swayed {
            household.apply_influence();
        }
        swayed
    }
}
