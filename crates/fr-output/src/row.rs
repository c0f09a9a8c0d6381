//! Plain data row types written by output backends.

use fr_agent::{Action, Household, SesTier};
use fr_sim::StepSummary;

/// Per-agent column names, in output order.
pub const AGENT_COLUMNS: [&str; 14] = [
    "Step",
    "AgentID",
    "Type",
    "Zone",
    "CurrentZone",
    "SES",
    "ThreatScore",
    "CopingScore",
    "Action",
    "Influenced",
    "EarlyEvacuated",
    "SocialNetwork",
    "Longitude",
    "Latitude",
];

/// Per-step summary column names, in output order.
pub const SUMMARY_COLUMNS: [&str; 11] = [
    "Step",
    "WaterLevel",
    "ThreatTriggered",
    "Mitigate",
    "Evacuate",
    "DoNothing",
    "Undecided",
    "Evacuated",
    "Flooded",
    "Damaged",
    "Influenced",
];

/// One household's state after one step.
///
/// `None` fields are written as empty cells (or SQL/Arrow nulls).
#[derive(Debug, Clone, PartialEq)]
pub struct AgentStepRow {
    pub step:            u64,
    pub agent_id:        u32,
    pub agent_type:      String,
    /// Home zone.
    pub zone:            String,
    pub current_zone:    String,
    pub ses:             SesTier,
    pub threat_score:    f64,
    pub coping_score:    f64,
    pub action:          Option<Action>,
    pub influenced:      bool,
    pub early_evacuated: bool,
    pub social_network:  Option<u8>,
    pub longitude:       Option<f64>,
    pub latitude:        Option<f64>,
}

impl AgentStepRow {
    pub fn from_household(step: u64, h: &Household) -> Self {
        let pos = h.position();
        Self {
            step,
            agent_id:        h.id().0,
            agent_type:      h.agent_type().to_owned(),
            zone:            h.home_zone().to_owned(),
            current_zone:    h.current_zone().to_owned(),
            ses:             h.ses(),
            threat_score:    h.threat_score(),
            coping_score:    h.coping_score(),
            action:          h.action(),
            influenced:      h.state().influenced,
            early_evacuated: h.state().early_evacuated,
            social_network:  h.social_network_strength(),
            longitude:       pos.map(|p| p.lon),
            latitude:        pos.map(|p| p.lat),
        }
    }

    /// Cell values in [`AGENT_COLUMNS`] order.
    pub fn to_record(&self) -> [String; 14] {
        [
            self.step.to_string(),
            self.agent_id.to_string(),
            self.agent_type.clone(),
            self.zone.clone(),
            self.current_zone.clone(),
            self.ses.to_string(),
            self.threat_score.to_string(),
            self.coping_score.to_string(),
            self.action.map(|a| a.as_str().to_owned()).unwrap_or_default(),
            self.influenced.to_string(),
            self.early_evacuated.to_string(),
            self.social_network.map(|s| s.to_string()).unwrap_or_default(),
            self.longitude.map(|v| v.to_string()).unwrap_or_default(),
            self.latitude.map(|v| v.to_string()).unwrap_or_default(),
        ]
    }
}

/// Aggregate counts for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:             u64,
    pub water_level:      f64,
    pub threat_triggered: bool,
    pub mitigate:         u64,
    pub evacuate:         u64,
    pub do_nothing:       u64,
    pub undecided:        u64,
    pub evacuated:        u64,
    pub flooded:          u64,
    pub damaged:          u64,
    pub influenced:       u64,
}

impl From<&StepSummary> for StepSummaryRow {
    fn from(s: &StepSummary) -> Self {
        Self {
            step:             s.step.0,
            water_level:      s.water_level,
            threat_triggered: s.threat_triggered(),
            mitigate:         s.mitigate as u64,
            evacuate:         s.evacuate as u64,
            do_nothing:       s.do_nothing as u64,
            undecided:        s.undecided as u64,
            evacuated:        s.evacuated as u64,
            flooded:          s.flooded as u64,
            damaged:          s.damaged as u64,
            influenced:       s.influenced as u64,
        }
    }
}

impl StepSummaryRow {
    /// Cell values in [`SUMMARY_COLUMNS`] order.
    pub fn to_record(&self) -> [String; 11] {
        [
            self.step.to_string(),
            self.water_level.to_string(),
            self.threat_triggered.to_string(),
            self.mitigate.to_string(),
            self.evacuate.to_string(),
            self.do_nothing.to_string(),
            self.undecided.to_string(),
            self.evacuated.to_string(),
            self.flooded.to_string(),
            self.damaged.to_string(),
            self.influenced.to_string(),
        ]
    }
}
