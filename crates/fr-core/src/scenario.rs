//! Named scenario bundles.
//!
//! A scenario selects which hazard timeline file a run reads and how survey
//! threat scores are rewritten before the first step.  The threat rewrite
//! itself lives in `fr-behavior`; this crate only names the variants.

use std::str::FromStr;

use crate::FrError;

/// The scenarios a run can be configured with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Scenario {
    /// Survey threat scores as collected.
    #[default]
    Default,
    /// Only households in Heugem perceive the hazard.
    HeugemOnly,
    /// Every household's threat score is forced high.
    AllHighThreat,
    /// Every household's threat score is forced low.
    AllLowThreat,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Default,
        Scenario::HeugemOnly,
        Scenario::AllHighThreat,
        Scenario::AllLowThreat,
    ];

    /// Stable lowercase name, as used in config files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Default       => "default",
            Scenario::HeugemOnly    => "heugem_only",
            Scenario::AllHighThreat => "all_high_threat",
            Scenario::AllLowThreat  => "all_low_threat",
        }
    }

    /// File name of the hazard timeline this scenario reads.
    pub fn hazard_file_name(self) -> &'static str {
        match self {
            Scenario::Default       => "flood_scenarios.csv",
            Scenario::HeugemOnly    => "flood_heugem_only.csv",
            Scenario::AllHighThreat => "flood_all_high.csv",
            Scenario::AllLowThreat  => "flood_all_low.csv",
        }
    }
}

impl FromStr for Scenario {
    type Err = FrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FrError::UnknownScenario(s.to_owned()))
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
