//! Behavioral parameters for one run.

use fr_core::Scenario;

use crate::{BehaviorError, BehaviorResult, PmtDecision, PmtThresholds, SocialConfig};

/// Everything that shapes household decisions, fixed for a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PmtConfig {
    pub scenario: Scenario,
    pub threat_threshold: f64,
    pub coping_threshold: f64,
    pub social: SocialConfig,
}

impl Default for PmtConfig {
    fn default() -> Self {
        let t = PmtThresholds::default();
        Self {
            scenario:         Scenario::Default,
            threat_threshold: t.threat,
            coping_threshold: t.coping,
            social:           SocialConfig::default(),
        }
    }
}

impl PmtConfig {
    /// Check every threshold lies in `[0, 1]`.
    pub fn validate(&self) -> BehaviorResult<()> {
        check_unit("threat_threshold", self.threat_threshold)?;
        check_unit("coping_threshold", self.coping_threshold)?;
        if let Some(t) = self.social.threshold {
            check_unit("social_threshold", t)?;
        }
        Ok(())
    }

    pub fn thresholds(&self) -> PmtThresholds {
        PmtThresholds { threat: self.threat_threshold, coping: self.coping_threshold }
    }

    /// The PMT decision rule these parameters describe.
    pub fn decision_model(&self) -> PmtDecision {
        PmtDecision::new(self.scenario, self.thresholds())
    }
}

fn check_unit(name: &str, value: f64) -> BehaviorResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BehaviorError::Config(format!("{name} must be within [0, 1], got {value}")))
    }
}
