//! Simulation observer trait and per-step summary.

use fr_agent::{Action, HouseholdStore};
use fr_core::Step;

use crate::Phase;

// ── StepSummary ───────────────────────────────────────────────────────────────

/// Aggregate state after one step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepSummary {
    pub step:        Step,
    pub water_level: f64,
    pub phase:       Phase,
    pub mitigate:    usize,
    pub evacuate:    usize,
    pub do_nothing:  usize,
    /// Households that have not decided yet.
    pub undecided:   usize,
    pub evacuated:   usize,
    pub flooded:     usize,
    pub damaged:     usize,
    pub influenced:  usize,
}

impl StepSummary {
    /// Count the store's current state.
    pub fn collect(step: Step, water_level: f64, phase: Phase, store: &HouseholdStore) -> Self {
        let mut s = StepSummary { step, water_level, phase, ..Default::default() };
        for h in store.iter() {
            match h.action() {
                Some(Action::Mitigate) => s.mitigate += 1,
                Some(Action::Evacuate) => s.evacuate += 1,
                Some(Action::DoNothing) => s.do_nothing += 1,
                None => s.undecided += 1,
            }
            let st = h.state();
            s.evacuated += usize::from(st.evacuated);
            s.flooded += usize::from(st.flooded);
            s.damaged += usize::from(st.damaged);
            s.influenced += usize::from(st.influenced);
        }
        s
    }

    pub fn threat_triggered(&self) -> bool {
        self.phase == Phase::Reactive
    }

    pub fn action_count(&self, action: Action) -> usize {
        match action {
            Action::Mitigate => self.mitigate,
            Action::Evacuate => self.evacuate,
            Action::DoNothing => self.do_nothing,
        }
    }

    pub fn total(&self) -> usize {
        self.mitigate + self.evacuate + self.do_nothing + self.undecided
    }
}

// ── SimObserver ───────────────────────────────────────────────────────────────

/// Callbacks invoked by [`FloodSim`][crate::FloodSim] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_step_end(&mut self, summary: &StepSummary) {
///         println!("{}: {} evacuated", summary.step, summary.evacuated);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called once, during the step in which the reactive phase begins.
    fn on_phase_change(&mut self, _step: Step, _phase: Phase) {}

    /// Called at the end of each step with its aggregate counts.
    fn on_step_end(&mut self, _summary: &StepSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`
    /// steps) with read-only access to every household.
    fn on_snapshot(&mut self, _step: Step, _households: &HouseholdStore) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Step) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
