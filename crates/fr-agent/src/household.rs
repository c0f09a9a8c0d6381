//! The household agent and its value types.
//!
//! A `Household` owns its position and outcome flags.  Every field that
//! takes part in an invariant is private and changes only through the
//! mutators below:
//!
//! - threat/coping scores stay in `[0, 5]`;
//! - `evacuated ⇒ current_zone == SafeZone`;
//! - `early_evacuated ⇒ evacuated`;
//! - `damaged ⇒ flooded`.

use std::fmt;

use fr_core::zone::SAFE_ZONE;
use fr_core::{AgentId, GeoPoint};

/// Upper bound of the survey appraisal scale.
pub const MAX_SCORE: f64 = 5.0;

// ── Action ────────────────────────────────────────────────────────────────────

/// Protective response chosen by the decision engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    Mitigate,
    Evacuate,
    DoNothing,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Mitigate, Action::Evacuate, Action::DoNothing];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Mitigate => "mitigate",
            Action::Evacuate => "evacuate",
            Action::DoNothing => "do_nothing",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SesTier ───────────────────────────────────────────────────────────────────

/// Socio-economic tier derived from the survey's standardised SES score.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SesTier {
    Low,
    #[default]
    Medium,
    High,
}

impl SesTier {
    /// `z < -0.5` is low, `z > 0.5` is high, anything else (NaN included)
    /// is medium.
    pub fn from_z_score(z: f64) -> Self {
        if z < -0.5 {
            SesTier::Low
        } else if z > 0.5 {
            SesTier::High
        } else {
            SesTier::Medium
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SesTier::Low => "low",
            SesTier::Medium => "medium",
            SesTier::High => "high",
        }
    }
}

impl fmt::Display for SesTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Demographics ──────────────────────────────────────────────────────────────

/// Optional descriptive attributes.  None of them feed the decision rule;
/// absent values stay `None`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Demographics {
    pub education_level: Option<String>,
    pub income_level: Option<String>,
    pub home_ownership: Option<bool>,
    pub flood_experience: Option<bool>,
}

// ── HouseholdState ────────────────────────────────────────────────────────────

/// Behavioural and outcome flags.  Read through [`Household::state`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HouseholdState {
    /// `None` until the first decision.
    pub action: Option<Action>,
    pub evacuated: bool,
    pub early_evacuated: bool,
    pub influenced: bool,
    pub flooded: bool,
    pub damaged: bool,
    /// Never cleared; no mortality is modelled.
    pub alive: bool,
}

impl Default for HouseholdState {
    fn default() -> Self {
        Self {
            action:          None,
            evacuated:       false,
            early_evacuated: false,
            influenced:      false,
            flooded:         false,
            damaged:         false,
            alive:           true,
        }
    }
}

// ── Household ─────────────────────────────────────────────────────────────────

/// One surveyed household.
///
/// Construct with [`Household::new`] and the `with_*` methods, then hand it
/// to a [`HouseholdStoreBuilder`](crate::HouseholdStoreBuilder), which
/// assigns the `AgentId`.
#[derive(Clone, Debug)]
pub struct Household {
    id: AgentId,
    home_zone: String,
    ses: SesTier,
    agent_type: String,
    demographics: Demographics,
    social_network_strength: Option<u8>,

    threat_score: f64,
    coping_score: f64,
    position: Option<GeoPoint>,
    current_zone: String,
    state: HouseholdState,
}

impl Household {
    /// A household of type `"agent"` living in `home_zone`.
    pub fn new(home_zone: impl Into<String>, ses: SesTier, threat_score: f64, coping_score: f64) -> Self {
        let home_zone = home_zone.into();
        Self {
            id: AgentId::INVALID,
            current_zone: home_zone.clone(),
            home_zone,
            ses,
            agent_type: "agent".to_owned(),
            demographics: Demographics::default(),
            social_network_strength: None,
            threat_score: clamp_score(threat_score),
            coping_score: clamp_score(coping_score),
            position: None,
            state: HouseholdState::default(),
        }
    }

    pub fn with_agent_type(mut self, agent_type: impl Into<String>) -> Self {
        self.agent_type = agent_type.into();
        self
    }

    pub fn with_demographics(mut self, demographics: Demographics) -> Self {
        self.demographics = demographics;
        self
    }

    pub fn with_social_network_strength(mut self, strength: u8) -> Self {
        self.social_network_strength = Some(strength);
        self
    }

    pub fn with_position(mut self, position: GeoPoint) -> Self {
        self.position = Some(position);
        self
    }

    pub(crate) fn assign_id(&mut self, id: AgentId) {
        self.id = id;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn home_zone(&self) -> &str {
        &self.home_zone
    }

    #[inline]
    pub fn current_zone(&self) -> &str {
        &self.current_zone
    }

    #[inline]
    pub fn ses(&self) -> SesTier {
        self.ses
    }

    #[inline]
    pub fn agent_type(&self) -> &str {
        &self.agent_type
    }

    #[inline]
    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    #[inline]
    pub fn social_network_strength(&self) -> Option<u8> {
        self.social_network_strength
    }

    #[inline]
    pub fn threat_score(&self) -> f64 {
        self.threat_score
    }

    #[inline]
    pub fn coping_score(&self) -> f64 {
        self.coping_score
    }

    #[inline]
    pub fn position(&self) -> Option<GeoPoint> {
        self.position
    }

    #[inline]
    pub fn state(&self) -> &HouseholdState {
        &self.state
    }

    #[inline]
    pub fn action(&self) -> Option<Action> {
        self.state.action
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Set the threat score, clamped to `[0, 5]`.
    pub fn set_threat_score(&mut self, score: f64) {
        self.threat_score = clamp_score(score);
    }

    /// Set the coping score, clamped to `[0, 5]`.
    pub fn set_coping_score(&mut self, score: f64) {
        self.coping_score = clamp_score(score);
    }

    /// Initial placement inside the home zone.
    pub fn place_at(&mut self, position: GeoPoint) {
        self.position = Some(position);
    }

    pub fn set_action(&mut self, action: Action) {
        self.state.action = Some(action);
    }

    /// Social override: the household mitigates because its neighbours act.
    pub fn apply_influence(&mut self) {
        self.state.action = Some(Action::Mitigate);
        self.state.influenced = true;
    }

    /// Move to `point` in the safe zone.
    ///
    /// Does nothing and returns `false` if the household has already
    /// evacuated.  `early` is recorded only when the move happens.
    pub fn relocate_to_safe_zone(&mut self, point: GeoPoint, early: bool) -> bool {
        if self.state.evacuated {
            return false;
        }
        self.position = Some(point);
        self.current_zone = SAFE_ZONE.to_owned();
        self.state.evacuated = true;
        self.state.early_evacuated = early;
        true
    }

    pub fn mark_flooded(&mut self) {
        self.state.flooded = true;
    }

    /// Mark as damaged.  Returns `false` (and changes nothing) unless the
    /// household is already flooded.
    pub fn mark_damaged(&mut self) -> bool {
        if !self.state.flooded {
            return false;
        }
        self.state.damaged = true;
        true
    }
}

impl fmt::Display for Household {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | Zone: {} | Action: ", self.id, self.home_zone)?;
        match self.state.action {
            Some(a) => write!(f, "{a}"),
            None => f.write_str("none"),
        }
    }
}

/// Non-finite scores count as zero.
fn clamp_score(score: f64) -> f64 {
    if score.is_finite() { score.clamp(0.0, MAX_SCORE) } else { 0.0 }
}
