//! The `FloodSim` session object and its step loop.

use fr_agent::{Action, AgentRngs, HouseholdStore};
use fr_behavior::{DecisionModel, SocialConfig};
use fr_core::zone::SAFE_ZONE;
use fr_core::{AgentId, Scenario, SimClock, SimConfig, SimRng, Step};
use fr_hazard::{HazardRules, HazardTimeline};
use fr_spatial::ZoneLocator;

use crate::{ActivationOrder, Phase, SimObserver, SimResult, StepSummary};

// ── FloodSim ──────────────────────────────────────────────────────────────────

/// One simulation session: build, step until done, export, discard.
///
/// `FloodSim<D, Z>` owns the households, the hazard timeline, and every RNG.
/// Households never hold a reference back to the simulation; global state
/// is read by the step routine and passed down explicitly.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct FloodSim<D: DecisionModel, Z: ZoneLocator> {
    /// Run configuration (total steps, seed, snapshot interval).
    pub config: SimConfig,

    pub clock: SimClock,

    pub scenario: Scenario,

    pub social: SocialConfig,

    /// The decision rule.  Called once per household per step.
    pub decision: D,

    /// Zone geometry; only `SafeZone` is consulted after build.
    pub zones: Z,

    pub(crate) store: HouseholdStore,

    /// Per-household RNGs for decision jitter.
    pub rngs: AgentRngs,

    /// Activation permutations and safe-zone sampling.
    pub sim_rng: SimRng,

    pub timeline: HazardTimeline,

    pub rules: HazardRules,

    pub activation: ActivationOrder,

    pub(crate) water_level: f64,

    pub(crate) phase: Phase,
}

impl<D: DecisionModel, Z: ZoneLocator> FloodSim<D, Z> {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// Read-only view of every household.
    pub fn households(&self) -> &HouseholdStore {
        &self.store
    }

    #[inline]
    pub fn current_step(&self) -> Step {
        self.clock.current_step
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn threat_triggered(&self) -> bool {
        self.phase == Phase::Reactive
    }

    /// Aggregate water level as of the last processed step.
    #[inline]
    pub fn water_level(&self) -> f64 {
        self.water_level
    }

    /// `true` once `config.total_steps` steps have run.
    pub fn is_finished(&self) -> bool {
        self.clock.current_step >= self.config.end_step()
    }

    /// Counts for the current state, stamped with the last processed step.
    pub fn summary(&self) -> StepSummary {
        let last = Step(self.clock.current_step.0.saturating_sub(1));
        StepSummary::collect(last, self.water_level, self.phase, &self.store)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step to `config.end_step()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while !self.is_finished() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_step);
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores the
    /// configured end).
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process one step, notify `observer`, and advance the clock.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepSummary> {
        let now = self.clock.current_step;
        observer.on_step_start(now);

        self.process_step(now, observer)?;

        let summary = StepSummary::collect(now, self.water_level, self.phase, &self.store);
        log::debug!(
            "{now}: water {:.2}, {} | mitigate {} evacuate {} do_nothing {} | evacuated {} flooded {} damaged {}",
            summary.water_level,
            summary.phase,
            summary.mitigate,
            summary.evacuate,
            summary.do_nothing,
            summary.evacuated,
            summary.flooded,
            summary.damaged,
        );
        observer.on_step_end(&summary);
        if self.config.output_interval_steps > 0
            && now.0.is_multiple_of(self.config.output_interval_steps)
        {
            observer.on_snapshot(now, &self.store);
        }

        self.clock.advance();
        Ok(summary)
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn process_step<O: SimObserver>(&mut self, now: Step, observer: &mut O) -> SimResult<()> {
        // ── ① Aggregate water level ───────────────────────────────────────
        if let Some(mean) = self.timeline.mean_level(now) {
            self.water_level = mean;
        }

        // ── ② Phase transition (one-way) ──────────────────────────────────
        if self.phase == Phase::PreHazard && self.rules.triggers(self.water_level) {
            self.phase = Phase::Reactive;
            log::info!(
                "{now}: threat triggered at water level {:.2}; reactive phase begins",
                self.water_level,
            );
            observer.on_phase_change(now, self.phase);
        }

        // ── ③ Decisions ───────────────────────────────────────────────────
        match (self.phase, self.activation) {
            (Phase::PreHazard, _) => self.pre_hazard_pass(),
            (Phase::Reactive, ActivationOrder::RandomSequential) => self.reactive_sequential(now)?,
            (Phase::Reactive, ActivationOrder::Synchronous) => self.reactive_synchronous(now)?,
        }

        // ── ④ Hazard outcomes (reactive phase only) ───────────────────────
        if self.phase == Phase::Reactive {
            self.apply_outcomes(now);
        }
        Ok(())
    }

    /// Decision only; nobody reads anybody else, so order is irrelevant.
    fn pre_hazard_pass(&mut self) {
        let actions = decide_all(&self.decision, &self.store, &mut self.rngs);
        for (h, action) in self.store.iter_mut().zip(actions) {
            h.set_action(action);
        }
    }

    /// Seeded random order with live visibility: a household sees the
    /// actions neighbours visited earlier in this step already took.
    fn reactive_sequential(&mut self, now: Step) -> SimResult<()> {
        let order = self.sim_rng.permutation(self.store.len());
        for agent in order {
            let action = self
                .decision
                .decide(self.store.household(agent), self.rngs.get_mut(agent));
            self.store.household_mut(agent).set_action(action);

            let neighbor_actions = self.store.neighbor_actions(agent);
            self.social
                .apply(self.store.household_mut(agent), &neighbor_actions);

            self.relocate_if_evacuating(agent, now)?;
        }
        Ok(())
    }

    /// Read phase against the start-of-step state, then publish in
    /// ascending `AgentId` order.
    fn reactive_synchronous(&mut self, now: Step) -> SimResult<()> {
        let actions = decide_all(&self.decision, &self.store, &mut self.rngs);

        // Influence is judged on the actions neighbours held at the start
        // of the step, which the store still holds during this pass.
        let store = &self.store;
        let social = &self.social;
        let swayed: Vec<bool> = store
            .agent_ids()
            .map(|agent| social.evaluate(store.household(agent), &store.neighbor_actions(agent)))
            .collect();

        for (i, (action, swayed)) in actions.into_iter().zip(swayed).enumerate() {
            let agent = AgentId(i as u32);
            let h = self.store.household_mut(agent);
            h.set_action(action);
            if swayed {
                h.apply_influence();
            }
            self.relocate_if_evacuating(agent, now)?;
        }
        Ok(())
    }

    fn relocate_if_evacuating(&mut self, agent: AgentId, now: Step) -> SimResult<()> {
        let h = self.store.household_mut(agent);
        if h.action() == Some(Action::Evacuate) && !h.state().evacuated {
            let point = self.zones.sample_point(SAFE_ZONE, &mut self.sim_rng)?;
            h.relocate_to_safe_zone(point, self.rules.is_early(now));
        }
        Ok(())
    }

    /// Flooding and damage depend only on the step and the home zone's
    /// level, not on where the household currently is.
    fn apply_outcomes(&mut self, now: Step) {
        for h in self.store.iter_mut() {
            let level = self.timeline.level(now, h.home_zone());
            if self.rules.floods(now, level) {
                h.mark_flooded();
            }
            if h.state().flooded && self.rules.damages(now, level) {
                h.mark_damaged();
            }
        }
    }
}

// ── Decision pass helpers ─────────────────────────────────────────────────────

/// One decision per household, each drawing from its own RNG.
#[cfg(not(feature = "parallel"))]
fn decide_all<D: DecisionModel>(
    decision: &D,
    store:    &HouseholdStore,
    rngs:     &mut AgentRngs,
) -> Vec<Action> {
    store
        .iter()
        .zip(rngs.inner.iter_mut())
        .map(|(h, rng)| decision.decide(h, rng))
        .collect()
}

/// One decision per household, each drawing from its own RNG.
#[cfg(feature = "parallel")]
fn decide_all<D: DecisionModel>(
    decision: &D,
    store:    &HouseholdStore,
    rngs:     &mut AgentRngs,
) -> Vec<Action> {
    use rayon::prelude::*;

    store
        .as_slice()
        .par_iter()
        .zip(rngs.inner.par_iter_mut())
        .map(|(h, rng)| decision.decide(h, rng))
        .collect()
}
