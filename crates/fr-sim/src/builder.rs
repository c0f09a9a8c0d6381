//! Fluent builder for constructing a [`FloodSim`].

use fr_agent::{Household, HouseholdStoreBuilder, SurveyRecord};
use fr_behavior::scenario::apply_scenario;
use fr_behavior::{DecisionModel, PmtConfig, PmtDecision};
use fr_core::zone::SAFE_ZONE;
use fr_core::{SimClock, SimConfig, SimRng};
use fr_hazard::{HazardRules, HazardTimeline};
use fr_spatial::ZoneLocator;

use crate::{ActivationOrder, FloodSim, Phase, SimError, SimResult};

/// Fluent builder for [`FloodSim<D, Z>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total steps, seed, agent cap, snapshot interval
/// - [`PmtConfig`] — scenario, decision thresholds, social ties
/// - `Z: ZoneLocator` — zone geometry; must contain `SafeZone`
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                   |
/// |------------------------|-------------------------------------------|
/// | `.survey(r)`           | no households                             |
/// | `.households(v)`       | no households                             |
/// | `.timeline(t)`         | `HazardTimeline::empty()` (never triggers)|
/// | `.rules(r)`            | `HazardRules::default()`                  |
/// | `.activation(a)`       | `ActivationOrder::RandomSequential`       |
/// | `.decision_model(d)`   | `PmtDecision` from the `PmtConfig`        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, pmt, zones)
///     .survey(&records)
///     .timeline(timeline)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: DecisionModel, Z: ZoneLocator> {
    config:     SimConfig,
    pmt:        PmtConfig,
    zones:      Z,
    decision:   D,
    households: Vec<Household>,
    timeline:   Option<HazardTimeline>,
    rules:      HazardRules,
    activation: ActivationOrder,
}

impl<Z: ZoneLocator> SimBuilder<PmtDecision, Z> {
    /// Create a builder with all required inputs.  The decision rule is the
    /// PMT rule described by `pmt`.
    pub fn new(config: SimConfig, pmt: PmtConfig, zones: Z) -> Self {
        Self {
            decision:   pmt.decision_model(),
            config,
            pmt,
            zones,
            households: Vec::new(),
            timeline:   None,
            rules:      HazardRules::default(),
            activation: ActivationOrder::default(),
        }
    }
}

impl<D: DecisionModel, Z: ZoneLocator> SimBuilder<D, Z> {
    /// Replace the decision rule.
    pub fn decision_model<D2: DecisionModel>(self, decision: D2) -> SimBuilder<D2, Z> {
        SimBuilder {
            config:     self.config,
            pmt:        self.pmt,
            zones:      self.zones,
            decision,
            households: self.households,
            timeline:   self.timeline,
            rules:      self.rules,
            activation: self.activation,
        }
    }

    /// Add one household per survey record.
    pub fn survey(mut self, records: &[SurveyRecord]) -> Self {
        self.households.extend(records.iter().map(SurveyRecord::to_household));
        self
    }

    /// Add prepared households.  Positions already set are kept; the rest
    /// are sampled inside their home zone at build time.
    pub fn households<I: IntoIterator<Item = Household>>(mut self, households: I) -> Self {
        self.households.extend(households);
        self
    }

    pub fn timeline(mut self, timeline: HazardTimeline) -> Self {
        self.timeline = Some(timeline);
        self
    }

    pub fn rules(mut self, rules: HazardRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn activation(mut self, activation: ActivationOrder) -> Self {
        self.activation = activation;
        self
    }

    /// Validate inputs, resolve the scenario, place households, and return
    /// a ready-to-run [`FloodSim`].
    ///
    /// Households whose home zone has no geometry are skipped with a
    /// warning.  A missing `SafeZone` is fatal.
    pub fn build(self) -> SimResult<FloodSim<D, Z>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.pmt.validate()?;
        let (lo, hi) = self.rules.flood_window;
        let (dlo, dhi) = self.rules.damage_window;
        if lo > hi || dlo > dhi {
            return Err(SimError::Config(format!(
                "hazard windows must be ordered, got flood {lo}..={hi}, damage {dlo}..={dhi}"
            )));
        }
        if !self.zones.has_zone(SAFE_ZONE) {
            return Err(SimError::Setup(format!("zone geometry has no {SAFE_ZONE:?} polygon")));
        }

        // ── Seeding ───────────────────────────────────────────────────────
        let (mut sim_rng, agent_seed) = match self.config.seed {
            Some(seed) => (SimRng::new(seed), seed),
            None => {
                let mut rng = SimRng::from_entropy();
                let seed = rng.next_seed();
                (rng, seed)
            }
        };

        // ── Households ────────────────────────────────────────────────────
        let cap = self.config.max_agents.unwrap_or(usize::MAX);
        let mut store_builder =
            HouseholdStoreBuilder::with_capacity(agent_seed, self.households.len().min(cap));
        let mut skipped = 0usize;
        for mut household in self.households {
            if store_builder.len() >= cap {
                break;
            }
            if !self.zones.has_zone(household.home_zone()) {
                log::warn!(
                    "skipping household in zone {:?}: no geometry for that zone",
                    household.home_zone(),
                );
                skipped += 1;
                continue;
            }
            apply_scenario(self.pmt.scenario, &mut household);
            if household.position().is_none() {
                let p = self.zones.sample_point(household.home_zone(), &mut sim_rng)?;
                household.place_at(p);
            }
            store_builder.push(household);
        }
        let (store, rngs) = store_builder.build();

        log::info!(
            "built simulation: {} households ({} skipped), scenario {}, social ties {}",
            store.len(),
            skipped,
            self.pmt.scenario,
            if self.pmt.social.enabled { "on" } else { "off" },
        );

        Ok(FloodSim {
            clock:       SimClock::new(),
            config:      self.config,
            scenario:    self.pmt.scenario,
            social:      self.pmt.social,
            decision:    self.decision,
            zones:       self.zones,
            store,
            rngs,
            sim_rng,
            timeline:    self.timeline.unwrap_or_else(HazardTimeline::empty),
            rules:       self.rules,
            activation:  self.activation,
            water_level: 0.0,
            phase:       Phase::PreHazard,
        })
    }
}
