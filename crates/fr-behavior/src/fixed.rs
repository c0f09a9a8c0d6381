//! A decision model that ignores its input.

use rand::RngCore;

use fr_agent::{Action, Household};

use crate::DecisionModel;

/// A [`DecisionModel`] that always returns the same action.
///
/// Useful in tests, or as a baseline population that never reacts.
#[derive(Copy, Clone, Debug)]
pub struct FixedDecision(pub Action);

impl DecisionModel for FixedDecision {
    fn decide(&self, _household: &Household, _rng: &mut dyn RngCore) -> Action {
        self.0
    }
}
